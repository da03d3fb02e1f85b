use std::collections::HashMap;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use dronectl::cli::{Cli, Commands};
use dronectl::config::MissionRequest;
use dronectl::error::Result;
use dronectl::runner::MissionRunner;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("dronectl=debug")
    } else {
        EnvFilter::new("dronectl=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { config } => cmd_run(&config),
        Commands::Demo {
            mission_type,
            environment,
            platform,
        } => cmd_demo(&mission_type, &environment, &platform),
        Commands::Schema => cmd_schema(),
    }
}

fn cmd_run(path: &Path) -> Result<()> {
    let request = MissionRequest::from_json_file(path)?;
    let report = MissionRunner::new().run_mission(&request)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_demo(mission_type: &str, environment: &str, platform: &str) -> Result<()> {
    let request = MissionRequest {
        mission_id: uuid::Uuid::new_v4().to_string()[..8].to_string(),
        mission_type: mission_type.to_string(),
        environment_type: environment.to_string(),
        platform_type: platform.to_string(),
        mode: "single".to_string(),
        target_area: (120.0, 45.0, 60.0),
        base_area: (0.0, 0.0, 0.0),
        thresholds: HashMap::new(),
        behavior_params: HashMap::new(),
    };

    let report = MissionRunner::new().run_mission(&request)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn cmd_schema() -> Result<()> {
    let schema = schemars::schema_for!(MissionRequest);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
