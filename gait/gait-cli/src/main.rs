//! Gait trial analysis from the command line.
//!
//! # Commands
//!
//! - `gait analyze --trc walk.trc --htr walk.htr --model cgm23` - Analyse a
//!   trial and print its report as JSON
//! - `gait models` - List the built-in biomechanical models
//!
//! Logs go to stderr; `-v` raises the level and `RUST_LOG` overrides it.

mod analyze;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gait_types::BiomechanicalModel;
use tracing_subscriber::EnvFilter;

/// Gait trial analysis
#[derive(Parser)]
#[command(name = "gait")]
#[command(about = "Gait analysis of motion-capture trials", long_about = None)]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse one trial and print the report as JSON
    Analyze {
        /// TRC marker-trajectory file
        #[arg(long)]
        trc: PathBuf,

        /// HTR segment-rotation file
        #[arg(long)]
        htr: PathBuf,

        /// Biomechanical model (see `gait models`)
        #[arg(long)]
        model: String,

        /// Force-plate recording
        #[arg(long)]
        force: Option<PathBuf>,

        /// JSON configuration overriding the default parameters
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the report here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// List the built-in biomechanical models
    Models,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            trc,
            htr,
            model,
            force,
            config,
            output,
            pretty,
        } => analyze::run(&analyze::Request {
            trc,
            htr,
            model,
            force,
            config,
            output,
            pretty,
        }),
        Commands::Models => {
            for name in BiomechanicalModel::NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
