//! Core state types for the orbital scene simulation.
//!
//! Defines the two body variants and their per-step behavior:
//! - `Star`   – fixed at the origin, display-only color tag
//! - `Planet` – circles the star on a fixed radius, driven by `advance`
//!
//! A planet's position is always `distance * (cos(angle), sin(angle))`;
//! `advance` is the only way the angle (and hence the position) changes.

use nalgebra::Vector2;
use serde::Deserialize;
use thiserror::Error;

pub type NVec2 = Vector2<f64>;

/// Errors raised while constructing bodies.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BodyError {
    /// Orbital angular speed is `1 / sqrt(distance)`, so a non-positive
    /// distance must be rejected here rather than fault during `advance`.
    #[error("planet {0:?} needs a positive orbital distance, got {1}")]
    NonPositiveDistance(String, f64),
}

/// Display color of a star
/// `color: "yellow"`, `"blue"`, `"red"`, `"grey"` or `"orange"` in YAML
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StarColor {
    Yellow,
    Blue,
    Red,
    Grey,
    Orange,
}

impl StarColor {
    pub fn icon(&self) -> &'static str {
        match self {
            StarColor::Yellow => "✨",
            StarColor::Blue => "🔵",
            StarColor::Red => "🔴",
            StarColor::Grey => "⚪",
            StarColor::Orange => "🟠",
        }
    }
}

/// A star sits at the origin and never moves; it only shows up in reports.
#[derive(Debug, Clone)]
pub struct Star {
    pub name: String,
    pub m: f64, // mass (kg)
    pub color: StarColor, // display tag only
}

impl Star {
    pub fn position(&self) -> NVec2 {
        NVec2::zeros()
    }

    pub fn describe(&self) -> String {
        format!(
            "{} [STAR] {} (Mass: {:.2e} kg) - Burning Bright",
            self.color.icon(),
            self.name,
            self.m
        )
    }
}

/// A planet on a fixed circular orbit around the star.
#[derive(Debug, Clone)]
pub struct Planet {
    pub name: String,
    pub m: f64, // mass (kg)
    pub life: bool, // life-present flag
    distance: f64, // orbital distance from the star (AU), always > 0
    angle: f64, // accumulated orbital angle (radians)
    x: NVec2, // position, kept equal to distance * (cos(angle), sin(angle))
}

impl Planet {
    /// Create a planet at angle 0, i.e. at `(distance, 0)`.
    /// Fails fast on `distance <= 0`.
    pub fn new(name: String, m: f64, distance: f64, life: bool) -> Result<Self, BodyError> {
        if distance <= 0.0 {
            return Err(BodyError::NonPositiveDistance(name, distance));
        }
        Ok(Self {
            name,
            m,
            life,
            distance,
            angle: 0.0,
            x: NVec2::new(distance, 0.0),
        })
    }

    /// Advance the orbit by `dt` simulated time-units.
    ///
    /// Angular speed is `1 / sqrt(distance)` - a simplified rotation law,
    /// not Keplerian mechanics.
    pub fn advance(&mut self, dt: f64) {
        let speed = 1.0 / self.distance.sqrt();
        self.angle += speed * dt;
        self.x = self.distance * NVec2::new(self.angle.cos(), self.angle.sin());
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn describe(&self) -> String {
        let life_status = if self.life {
            "🌿 Life Detected"
        } else {
            "💀 Barren"
        };
        format!(
            "🪐 [PLANET] {:<10} | Pos: ({:.2}, {:.2}) | {}",
            self.name, self.x.x, self.x.y, life_status
        )
    }
}

/// A simulated object in the scene. Closed variant set: every body is
/// either a star or a planet.
#[derive(Debug, Clone)]
pub enum Body {
    Star(Star),
    Planet(Planet),
}

impl Body {
    pub fn name(&self) -> &str {
        match self {
            Body::Star(s) => &s.name,
            Body::Planet(p) => &p.name,
        }
    }

    pub fn position(&self) -> NVec2 {
        match self {
            Body::Star(s) => s.position(),
            Body::Planet(p) => p.position(),
        }
    }

    /// Advance this body by `dt`. Stars are static in this model.
    pub fn advance(&mut self, dt: f64) {
        match self {
            Body::Star(_) => {}
            Body::Planet(p) => p.advance(dt),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Body::Star(s) => s.describe(),
            Body::Planet(p) => p.describe(),
        }
    }
}
