//! starkviz CLI entry point.

use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;
mod logging;
mod render;
mod session;

use config::CliConfig;

#[derive(Parser)]
#[command(name = "starkviz")]
#[command(about = "Step-by-step visualizations of Cairo contracts on StarkNet", long_about = None)]
struct Cli {
    /// Config file (JSON); defaults to ./starkviz.json when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<commands::Commands>,
}

fn main() {
    let cli = Cli::parse();

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    logging::init(&config, cli.verbose);
    if !config.color {
        colored::control::set_override(false);
    }

    match cli.command {
        Some(cmd) => {
            if let Err(e) = commands::run(cmd, &config) {
                eprintln!("Error: {:#}", e);
                std::process::exit(1);
            }
        }
        None => {
            println!("starkviz - Cairo smart contracts, visualized step by step");
            println!("Run 'starkviz --help' for usage information.");
        }
    }
}
