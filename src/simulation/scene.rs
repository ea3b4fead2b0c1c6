//! Build and drive a fully-initialized scene from configuration
//!
//! Takes a `SceneConfig` (YAML-facing) and produces the runtime `Scene`:
//! the ordered body collection at t = 0. The scene owns its bodies and is
//! the only thing that mutates them; membership never changes after
//! construction.
//!
//! `run` advances the whole collection step by step, printing one report
//! per step, and `analyze_life` / `life_summary` produce the closing
//! analysis.

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use tracing::{debug, info};

use crate::configuration::config::{BodyConfig, SceneConfig};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyError, Planet, Star};

/// Runtime scene: a named, ordered body collection plus the current
/// simulation time `t`.
#[derive(Debug, Clone)]
pub struct Scene {
    pub name: String,
    pub bodies: Vec<Body>,
    pub t: f64, // accumulated simulated time
}

impl Scene {
    /// Map `BodyConfig` entries into runtime bodies, preserving order.
    /// Fails if any planet carries a non-positive orbital distance; no
    /// partial scene is returned.
    pub fn build_scene(cfg: SceneConfig) -> Result<Self, BodyError> {
        let mut bodies = Vec::with_capacity(cfg.bodies.len());
        for bc in cfg.bodies {
            let body = match bc {
                BodyConfig::Star { name, mass, color } => Body::Star(Star {
                    name,
                    m: mass,
                    color,
                }),
                BodyConfig::Planet {
                    name,
                    mass,
                    distance,
                    life,
                } => Body::Planet(Planet::new(name, mass, distance, life)?),
            };
            bodies.push(body);
        }

        info!(name = %cfg.name, bodies = bodies.len(), "scene built");

        Ok(Self {
            name: cfg.name,
            bodies,
            t: 0.0,
        })
    }

    /// Advance every body by `dt`, in insertion order. Bodies do not
    /// interact, so the order only matters for report layout.
    pub fn advance_all(&mut self, dt: f64) {
        for b in self.bodies.iter_mut() {
            b.advance(dt);
        }
        self.t += dt;
    }

    /// One step report: a header naming the step, then each body's
    /// `describe()` line in insertion order.
    pub fn report(&self, step: u32) -> String {
        let mut out = format!("\n[Time Step {}]", step);
        for b in &self.bodies {
            out.push_str("\n  ");
            out.push_str(&b.describe());
        }
        out
    }

    /// Run the simulation loop: `steps` iterations of pace, advance by
    /// `params.dt`, print the step report. Checks `shutdown` between steps
    /// and exits the remaining iterations cleanly when it is set.
    ///
    /// Returns the number of steps actually completed.
    pub fn run(&mut self, params: &Parameters, shutdown: &AtomicBool) -> u32 {
        println!("--- Starting Simulation for {} ---", self.name);

        let mut completed = 0;
        for step in 1..=params.steps {
            if shutdown.load(Ordering::Relaxed) {
                debug!(step, "shutdown requested, stopping between steps");
                break;
            }
            if !params.pace.is_zero() {
                thread::sleep(params.pace);
            }
            self.advance_all(params.dt);
            println!("{}", self.report(step));
            completed += 1;
        }
        completed
    }

    /// Names of all life-bearing planets, in insertion order.
    pub fn analyze_life(&self) -> Vec<&str> {
        self.bodies
            .iter()
            .filter_map(|b| match b {
                Body::Planet(p) if p.life => Some(p.name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Human-readable life analysis line.
    pub fn life_summary(&self) -> String {
        let found = self.analyze_life();
        if found.is_empty() {
            "  ❌ No known life in this system.".to_string()
        } else {
            format!("  ✅ Life found on: {}", found.join(", "))
        }
    }
}
