//! List lessons command.

use crate::render;
use anyhow::Result;
use colored::Colorize;
use starkviz_core::LESSONS;

pub fn run() -> Result<()> {
    let mut out = std::io::stdout().lock();
    render::lesson_list(&mut out, LESSONS)?;

    println!(
        "Start with {} and follow the lessons in order.",
        "starkviz walk deployment".bright_cyan()
    );
    Ok(())
}
