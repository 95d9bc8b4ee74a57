use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use gamehost::{commands, config, ui};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config/gamehost.yml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a commented template configuration file
    Init,
    /// Validate the configuration and print the resolution decisions
    Check,
    /// Build the deployment plan and write it as JSON
    Synth {
        /// Install script to upload as the boot-time asset
        #[arg(short, long, default_value = "scripts/install.sh")]
        script: PathBuf,
        /// Where to write the plan
        #[arg(short, long, default_value = "gamehost.plan.json")]
        out: PathBuf,
    },
    /// Print a human-readable summary of the deployment plan
    Show {
        /// Install script to upload as the boot-time asset
        #[arg(short, long, default_value = "scripts/install.sh")]
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Commands::Init = cli.command {
        return commands::init(&cli.config);
    }

    let config = match config::Config::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&format!("Error loading configuration: {}", e));
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Init => unreachable!("handled above"),
        Commands::Check => commands::check(&config),
        Commands::Synth { script, out } => commands::synth(&config, &script, &out),
        Commands::Show { script } => commands::show(&config, &script),
    }
}
