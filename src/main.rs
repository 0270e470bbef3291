// SPDX-License-Identifier: GPL-3.0-only

use camera_resolution::constants::app_info;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "camera-resolution")]
#[command(about = "Resolve camera capture and preview sizes from a quality preset")]
#[command(version = app_info::version())]
struct Cli {
    /// Config file (default: ~/.config/camera-resolution/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve capture and preview sizes for a camera
    Resolve {
        /// Camera name (numeric camera id)
        #[arg(short, long)]
        camera: Option<String>,

        /// Quality preset (low, medium, high, veryHigh, ultraHigh, max)
        #[arg(short, long)]
        preset: Option<String>,

        /// Aspect ratio (16:9 or 4:3)
        #[arg(short, long)]
        ratio: Option<String>,

        /// JSON profile table to use instead of V4L2 devices
        #[arg(long)]
        profiles: Option<PathBuf>,

        /// Also refine the capture size against the sizes the camera reports
        #[arg(short, long)]
        live: bool,
    },

    /// List the profile tiers a camera reports
    Tiers {
        /// Camera id
        #[arg(short, long, default_value = "0")]
        camera: u32,

        /// JSON profile table to use instead of V4L2 devices
        #[arg(long)]
        profiles: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    // Set RUST_LOG environment variable to control log level
    // Examples: RUST_LOG=debug, RUST_LOG=camera_resolution=debug, RUST_LOG=info
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => camera_resolution::Config::load_from(path)?,
        None => camera_resolution::Config::load()?,
    };

    match cli.command {
        Commands::Resolve {
            camera,
            preset,
            ratio,
            profiles,
            live,
        } => cli::resolve(
            &config,
            cli::ResolveArgs {
                camera,
                preset,
                ratio,
                profiles,
                live,
            },
        ),
        Commands::Tiers { camera, profiles } => {
            cli::list_tiers(camera, profiles.or(config.profile_table))
        }
    }
}
