//! Runtime parameters for driving a scene
//!
//! `Parameters` holds the loop settings:
//! - number of steps and simulated time per step,
//! - per-step pacing delay for human-readable console output

use std::time::Duration;

use crate::configuration::config::ParametersConfig;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub steps: u32, // number of time steps to run
    pub dt: f64, // simulated time-units per step
    pub pace: Duration, // display delay between steps, zero disables
}

impl Parameters {
    pub fn from_config(cfg: &ParametersConfig) -> Self {
        Self {
            steps: cfg.steps,
            dt: cfg.dt,
            pace: Duration::from_millis(cfg.pace_ms),
        }
    }
}
