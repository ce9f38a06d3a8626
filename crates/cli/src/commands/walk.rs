//! Step through a lesson.

use crate::config::CliConfig;
use crate::render::{self, DemoSnapshot};
use crate::session::{LessonSession, Outcome, SessionCommand};
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use starkviz_core::{catalog, load_steps};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::debug;

#[derive(Args)]
pub struct WalkArgs {
    /// Lesson id, as listed by 'starkviz lessons'
    #[arg(required_unless_present = "file")]
    lesson: Option<String>,

    /// Load the steps from a JSON file instead of the catalog
    #[arg(short, long, conflicts_with = "lesson")]
    file: Option<PathBuf>,

    /// Semicolon-separated commands to run instead of reading stdin
    #[arg(short, long)]
    script: Option<String>,
}

pub fn run(args: WalkArgs, config: &CliConfig) -> Result<()> {
    let mut session = match (&args.file, &args.lesson) {
        (Some(path), _) => {
            let steps = load_steps(path)
                .with_context(|| format!("Failed to load lesson file: {}", path.display()))?;
            let title = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Custom lesson")
                .to_string();
            LessonSession::from_steps(title, steps)?
        }
        (None, Some(id)) => LessonSession::start(catalog::find(id)?)?,
        (None, None) => anyhow::bail!("Give a lesson id or --file"),
    };

    debug!(
        lesson = session.title(),
        steps = session.sequencer().len(),
        "lesson session started"
    );
    let mut out = io::stdout().lock();

    match args.script {
        Some(script) => {
            let lines = script.split(';').map(|s| Ok::<_, io::Error>(s.to_string()));
            drive(&mut session, lines, &mut out, config, false)
        }
        None => {
            writeln!(out, "Type {} for commands.", "help".bright_cyan())?;
            drive(&mut session, io::stdin().lock().lines(), &mut out, config, true)
        }
    }
}

/// Feed commands into a session until input runs out or the learner quits.
pub fn drive<I, W>(
    session: &mut LessonSession,
    lines: I,
    out: &mut W,
    config: &CliConfig,
    interactive: bool,
) -> Result<()>
where
    I: IntoIterator<Item = io::Result<String>>,
    W: Write,
{
    let mut lines = lines.into_iter();
    draw(out, session, config)?;

    loop {
        if interactive {
            write!(out, "{} ", ">".bright_cyan())?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        let cmd = match line.parse::<SessionCommand>() {
            Ok(cmd) => cmd,
            Err(err) => {
                writeln!(out, "{}", err.to_string().red())?;
                continue;
            }
        };

        match session.apply(cmd) {
            Outcome::Moved | Outcome::Show => draw(out, session, config)?,
            Outcome::Unchanged => {
                writeln!(out, "{}", "No step in that direction.".bright_black())?
            }
            Outcome::StorageChanged => {
                render::storage_demo(out, &session.simulator().derive_view_model())?
            }
            Outcome::Read(value) => writeln!(
                out,
                "  {} {}",
                "self.sum.read() returned".bright_black(),
                value.to_string().bold()
            )?,
            Outcome::Json => {
                let snapshot = DemoSnapshot::from(session.simulator().derive_view_model());
                writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?
            }
            Outcome::Help => render::session_help(out)?,
            Outcome::DemoUnavailable => match session.demo_step_number() {
                Some(n) => writeln!(
                    out,
                    "The storage demo is on step {}. Use {} to go there.",
                    n,
                    format!("g {}", n).bright_cyan()
                )?,
                None => writeln!(out, "This lesson has no storage demo.")?,
            },
            Outcome::Quit => break,
        }
    }

    Ok(())
}

fn draw<W: Write>(out: &mut W, session: &LessonSession, config: &CliConfig) -> Result<()> {
    let seq = session.sequencer();

    writeln!(out)?;
    writeln!(out, "{}", session.title().bold().cyan())?;
    render::step_buttons(out, seq)?;
    render::progress(out, seq, config.progress_width)?;
    render::step(out, seq.current_step())?;

    if session.on_demo_step() {
        render::storage_demo(out, &session.simulator().derive_view_model())?;
    }

    let mut controls = Vec::new();
    if !seq.is_first() {
        controls.push("← p");
    }
    if !seq.is_last() {
        controls.push("n →");
    }
    if !controls.is_empty() {
        writeln!(out)?;
        writeln!(out, "{}", controls.join("   ").bright_black())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(lesson: &str, script: &str) -> String {
        colored::control::set_override(false);
        let mut session = LessonSession::start(catalog::find(lesson).unwrap()).unwrap();
        let mut out = Vec::new();
        let lines = script.split(';').map(|s| Ok::<_, io::Error>(s.to_string()));
        drive(&mut session, lines, &mut out, &CliConfig::default(), false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_walk_deployment() {
        let out = run_script("deployment", "n;n");
        assert!(out.contains("Step 1: Cairo Smart Contract"));
        assert!(out.contains("Step 3: Test Your Contract"));
        assert!(out.contains("$ snforge test"));
    }

    #[test]
    fn test_walk_stops_at_quit() {
        let out = run_script("deployment", "q;n");
        assert!(!out.contains("Step 2:"));
    }

    #[test]
    fn test_storage_demo_script() {
        let out = run_script("storageone", "a 5;b 7;w;r;a 20;r");
        assert!(out.contains("sum = 12"));
        assert!(out.contains("self.sum.read() returned 12"));
        assert!(!out.contains("returned 27"));
    }

    #[test]
    fn test_demo_unavailable_hint() {
        let out = run_script("storageone", "n;w");
        assert!(out.contains("The storage demo is on step 1"));
    }

    #[test]
    fn test_bad_command_keeps_going() {
        let out = run_script("deployment", "dance;n");
        assert!(out.contains("Unknown command: 'dance'"));
        assert!(out.contains("Step 2: Build with Scarb"));
    }

    #[test]
    fn test_json_snapshot() {
        let out = run_script("storageone", "w;json");
        assert!(out.contains("\"kind\": \"post_write\""));
    }
}
