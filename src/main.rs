use rigidsim::{Clock, ScenarioConfig, Scenario};
use rigidsim::{bench_integrators, bench_scan};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it exists as given
    #[arg(short, default_value = "drop.yaml")]
    file_name: String,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let given = PathBuf::from(file_name);
    if given.exists() {
        return given;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = scenario_path(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    if args.bench {
        bench_integrators();
        bench_scan();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build_scenario(scenario_cfg).context("invalid scenario")?;

    let mut ticks = 0usize;
    let mut contacts = 0usize;
    while !scenario.is_finished() {
        let t = scenario.clock.current_time();
        contacts += scenario.tick().contacts;
        ticks += 1;

        for event in scenario.world.drain_events() {
            info!(t, body = ?event.body, other = ?event.other, "collision");
        }
    }

    info!(ticks, contacts, "simulation finished");
    for (handle, body) in scenario.world.iter() {
        let p = body.position();
        let v = body.velocity;
        info!(
            ?handle,
            shape = ?body.kind(),
            position = %format!("({:.3}, {:.3}, {:.3})", p.x, p.y, p.z),
            velocity = %format!("({:.3}, {:.3}, {:.3})", v.x, v.y, v.z),
            "final state"
        );
    }

    Ok(())
}
