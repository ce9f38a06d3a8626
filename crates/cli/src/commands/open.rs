//! Open a page by path.

use crate::config::CliConfig;
use crate::render;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use starkviz_core::{catalog, Route, LESSONS};

#[derive(Args)]
pub struct OpenArgs {
    /// Page path, e.g. / or /learn or /deployment
    #[arg(default_value = "/")]
    path: String,
}

pub fn run(args: OpenArgs, config: &CliConfig) -> Result<()> {
    let mut out = std::io::stdout().lock();

    match Route::resolve(&args.path) {
        Route::Home => {
            println!();
            println!("{}", "Welcome to Starknet Visualized".bold().cyan());
            println!("Learn Cairo smart contracts through interactive visualizations.");
            println!();
            println!("Use {} to see all lessons.", "starkviz open /learn".bright_cyan());
        }
        Route::Learn => render::lesson_list(&mut out, LESSONS)?,
        Route::Lesson(info) => {
            let seq = info.sequencer()?;

            println!();
            println!("{} {}", info.icon, info.title.bold().cyan());
            println!("{}", info.description);
            println!();
            render::step_buttons(&mut out, &seq)?;
            render::progress(&mut out, &seq, config.progress_width)?;
            render::step(&mut out, seq.current_step())?;

            println!();
            println!(
                "Run {} to step through this lesson.",
                format!("starkviz walk {}", info.id).bright_cyan()
            );
            if let Some(next) = catalog::next_lesson(info.id) {
                println!("Next lesson: {} ({})", next.title, next.path.bright_yellow());
            }
        }
        Route::NotFound => bail!(
            "404 - Page not found: {}. Use 'starkviz open /learn' to see all lessons.",
            args.path
        ),
    }

    Ok(())
}
