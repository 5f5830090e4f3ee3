use novasim::{Scenario, ScenarioConfig};
use novasim::{run_2d, run_headless};

use clap::Parser;
use anyhow::{Context, Result};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Real-time N-body view of a star system and its supernova")]
struct Args {
    /// Scenario file under `scenarios/`; the built-in system when omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run this many ticks without a window instead of opening the viewer
    #[arg(long)]
    headless: Option<u64>,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();

    let scenario_cfg = match &args.file_name {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::default(),
    };
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("building scenario")?;

    match args.headless {
        Some(ticks) => {
            // bevy installs its own subscriber; headless needs one
            tracing_subscriber::fmt::init();
            run_headless(&mut scenario, ticks);
        }
        None => run_2d(scenario),
    }

    Ok(())
}
