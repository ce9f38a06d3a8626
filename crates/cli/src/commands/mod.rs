//! CLI commands module.

use crate::config::CliConfig;
use anyhow::Result;
use clap::Subcommand;

mod lessons;
mod open;
mod storage;
mod walk;

#[derive(Subcommand)]
pub enum Commands {
    /// List the lessons in recommended order
    Lessons,
    /// Open a page by its path, e.g. /storageone
    Open(open::OpenArgs),
    /// Step through a lesson
    Walk(walk::WalkArgs),
    /// Run the storage demo once and print what it shows
    Storage(storage::StorageArgs),
}

pub fn run(cmd: Commands, config: &CliConfig) -> Result<()> {
    match cmd {
        Commands::Lessons => lessons::run(),
        Commands::Open(args) => open::run(args, config),
        Commands::Walk(args) => walk::run(args, config),
        Commands::Storage(args) => storage::run(args),
    }
}
