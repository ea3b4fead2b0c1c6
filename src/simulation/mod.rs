pub mod states;
pub mod params;
pub mod scene;
