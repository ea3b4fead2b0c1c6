use orbsim::{Parameters, Scene, SceneConfig};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::time::Duration;

#[derive(Parser, Debug)]
struct Args {
    /// Scene file under the scenarios/ directory
    #[arg(short, default_value = "solar.yaml")]
    file_name: String,

    /// Disable the per-step display delay
    #[arg(long)]
    no_pace: bool,
}

// load here to keep main clean
fn load_scene_from_yaml(file_name: &str) -> Result<SceneConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scene file {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scene_cfg: SceneConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scene file {}", config_path.display()))?;

    Ok(scene_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let scene_cfg = load_scene_from_yaml(&args.file_name)?;

    let mut params = Parameters::from_config(&scene_cfg.parameters);
    if args.no_pace {
        params.pace = Duration::ZERO;
    }

    let mut scene = Scene::build_scene(scene_cfg)?;

    // The loop polls this between steps; nothing sets it in the plain CLI
    // run, it exists so embedders and tests can stop the loop cleanly.
    let shutdown = AtomicBool::new(false);

    println!("🔭 Initializing Cosmos Simulation...");
    scene.run(&params, &shutdown);

    println!("\n📊 Analysis Report:");
    println!("{}", scene.life_summary());

    Ok(())
}
