use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "dronectl", about = "Drone mission-control simulation", version)]
pub struct Cli {
    /// Enable debug logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a mission from a JSON request file.
    Run {
        /// Path to the mission request JSON.
        #[arg(short, long)]
        config: PathBuf,
    },

    /// Run a generated sample mission.
    Demo {
        #[arg(long, default_value = "rescue")]
        mission_type: String,

        #[arg(long, default_value = "air")]
        environment: String,

        #[arg(long, default_value = "air")]
        platform: String,
    },

    /// Print the JSON schema of the mission request record.
    Schema,
}
