//! One-shot run of the storage demo.

use crate::render::{self, DemoSnapshot};
use anyhow::Result;
use clap::Args;
use starkviz_storage::{Operand, StorageSimulator};
use std::io::Write;

#[derive(Args)]
pub struct StorageArgs {
    /// Raw input for operand a (non-numeric input counts as 0)
    #[arg(short, long, allow_hyphen_values = true)]
    a: Option<String>,

    /// Raw input for operand b (non-numeric input counts as 0)
    #[arg(short, long, allow_hyphen_values = true)]
    b: Option<String>,

    /// Call add_two_numbers(a, b) before showing the result
    #[arg(short, long)]
    write: bool,

    /// Print the snapshot as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(args: StorageArgs) -> Result<()> {
    let sim = simulate(&args);
    let view = sim.derive_view_model();
    let mut out = std::io::stdout().lock();

    if args.json {
        let snapshot = DemoSnapshot::from(view);
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    } else {
        render::storage_demo(&mut out, &view)?;
    }

    Ok(())
}

fn simulate(args: &StorageArgs) -> StorageSimulator {
    let mut sim = StorageSimulator::new();
    if let Some(raw) = &args.a {
        sim.set_operand(Operand::A, raw);
    }
    if let Some(raw) = &args.b {
        sim.set_operand(Operand::B, raw);
    }
    if args.write {
        sim.write();
    }
    sim
}
