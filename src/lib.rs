pub mod simulation;
pub mod configuration;

pub use simulation::states::{Body, BodyError, NVec2, Planet, Star, StarColor};
pub use simulation::params::Parameters;
pub use simulation::scene::Scene;

pub use configuration::config::{BodyConfig, ParametersConfig, SceneConfig};
