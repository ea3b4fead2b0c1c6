//! Configuration types for loading scenes from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! scene. A scene consists of:
//!
//! - [`ParametersConfig`] – loop settings (steps, dt, pacing)
//! - [`BodyConfig`]       – one entry per body, tagged by kind
//! - [`SceneConfig`]      – top-level wrapper used to load a scene from YAML
//!
//! # YAML format
//! The reference scene YAML matching these types:
//!
//! ```yaml
//! name: "Milky Way"
//!
//! parameters:
//!   steps: 5           # number of time steps to simulate
//!   dt: 0.5            # simulated time-units per step
//!   pace_ms: 300       # display delay between steps (optional, default 0)
//!
//! bodies:
//!   - kind: star
//!     name: "Sun"
//!     mass: 1.989e30
//!     color: yellow    # yellow / blue / red / grey / orange
//!   - kind: planet
//!     name: "Earth"
//!     mass: 5.972e24
//!     distance: 1.0    # orbital distance in AU, must be > 0
//!     life: true
//! ```
//!
//! The engine then maps this configuration into its internal runtime scene
//! representation; planet validation happens during that mapping.

use serde::Deserialize;

use crate::simulation::states::StarColor;

/// Loop settings for a scene
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub steps: u32, // number of time steps
    pub dt: f64,    // simulated time per step
    #[serde(default)]
    pub pace_ms: u64, // per-step display delay in milliseconds
}

/// Configuration for a single body, tagged by `kind`
#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BodyConfig {
    Star {
        name: String,
        mass: f64,
        color: StarColor,
    },
    Planet {
        name: String,
        mass: f64,
        distance: f64, // orbital distance in AU
        life: bool,
    },
}

/// Top-level scene configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct SceneConfig {
    pub name: String, // scene display name
    pub parameters: ParametersConfig, // loop settings
    pub bodies: Vec<BodyConfig>, // bodies in report order
}
