//! Terminal rendering of lessons and the storage demo.

use colored::Colorize;
use serde::Serialize;
use starkviz_core::{LessonInfo, LessonStep, StepSequencer, StepStatus};
use starkviz_storage::{
    labels::CONTRACT_ADDRESS, LayoutRow, StatusLine, StorageViewModel, SyscallTrace, TreeDiagram,
};
use std::io::{self, Write};

/// Everything the storage demo shows, for `--json` output.
#[derive(Serialize)]
pub struct DemoSnapshot {
    pub view: StorageViewModel,
    pub status: StatusLine,
    pub layout: LayoutRow,
    pub write: SyscallTrace,
    pub read: SyscallTrace,
    pub tree: TreeDiagram,
}

impl From<StorageViewModel> for DemoSnapshot {
    fn from(view: StorageViewModel) -> Self {
        Self {
            status: view.status_line(),
            layout: view.layout_row(),
            write: view.write_trace(),
            read: view.read_trace(),
            tree: view.tree(),
            view,
        }
    }
}

/// `[██████░░░░░░]` for `fraction` in `[0, 1]`.
pub fn progress_bar(fraction: f64, width: usize) -> String {
    let filled = ((fraction.clamp(0.0, 1.0) * width as f64).round() as usize).min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn lesson_list<W: Write>(out: &mut W, lessons: &[LessonInfo]) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "Learn StarkNet Smart Contracts".bold().cyan())?;
    writeln!(out)?;

    for (i, lesson) in lessons.iter().enumerate() {
        writeln!(
            out,
            "  {} {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            lesson.icon,
            lesson.title.bold(),
            format!("{:?}", lesson.level).bright_black()
        )?;
        writeln!(out, "     {}", lesson.description)?;
        writeln!(
            out,
            "     {} {}   {} {}",
            "path:".bright_black(),
            lesson.path.bright_yellow(),
            "topics:".bright_black(),
            lesson.topics.join(", ")
        )?;
        writeln!(out)?;
    }

    Ok(())
}

/// Row of step buttons, coloured by status.
pub fn step_buttons<W: Write>(out: &mut W, seq: &StepSequencer) -> io::Result<()> {
    let buttons: Vec<String> = seq
        .steps()
        .iter()
        .map(|step| {
            let label = format!(" {} Step {} ", step.icon, step.index + 1);
            match seq.step_status(step.index) {
                StepStatus::Current => label.white().on_blue().bold().to_string(),
                StepStatus::Completed => label.green().to_string(),
                StepStatus::Upcoming => label.bright_black().to_string(),
            }
        })
        .collect();

    writeln!(out, "{}", buttons.join(" "))
}

pub fn progress<W: Write>(out: &mut W, seq: &StepSequencer, width: usize) -> io::Result<()> {
    writeln!(
        out,
        "{} {}",
        progress_bar(seq.progress_fraction(), width).blue(),
        format!("{}/{}", seq.current_index() + 1, seq.len()).bright_black()
    )
}

pub fn step<W: Write>(out: &mut W, step: &LessonStep) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "{} {}",
        step.icon,
        format!("Step {}: {}", step.index + 1, step.title).bold()
    )?;
    writeln!(out, "{}", step.description)?;

    let content = &step.content;

    if let Some(command) = &content.command {
        writeln!(out)?;
        writeln!(out, "  {}", "Terminal Command".bright_black())?;
        writeln!(out, "  {}", format!("$ {}", command).green())?;
    }

    if let Some(snippet) = &content.snippet {
        writeln!(out)?;
        writeln!(
            out,
            "  {} {}",
            snippet.file_name.bold(),
            format!("({})", snippet.language).bright_black()
        )?;
        for line in snippet.code.lines() {
            writeln!(out, "  {} {}", "│".bright_black(), line)?;
        }
    }

    if let Some(link) = &content.link {
        writeln!(out)?;
        writeln!(out, "  {} {}", link.label.bold(), link.url.bright_cyan().underline())?;
    }

    if let Some(heading) = &content.notes_heading {
        writeln!(out)?;
        writeln!(out, "  {}", heading.bold().yellow())?;
        for note in &content.notes {
            writeln!(out, "    • {}", note)?;
        }
    }

    Ok(())
}

/// The whole storage demo, drawn from one snapshot.
pub fn storage_demo<W: Write>(out: &mut W, view: &StorageViewModel) -> io::Result<()> {
    let status = view.status_line();
    let row = view.layout_row();
    let write = view.write_trace();
    let read = view.read_trace();
    let tree = view.tree();

    writeln!(out)?;
    writeln!(out, "{}", "Interactive Demo".bold().cyan())?;
    writeln!(
        out,
        "  Value A: {}   Value B: {}   → {}",
        view.pending.a.to_string().bright_cyan(),
        view.pending.b.to_string().bright_cyan(),
        format!("Call {}", view.pending.call()).bold()
    )?;
    let dot = if status.active {
        "●".green()
    } else {
        "○".bright_black()
    };
    writeln!(out, "  {} Contract Storage: {}", dot, status.text.bold())?;

    writeln!(out)?;
    writeln!(out, "{}", "Storage Layout".bold().cyan())?;
    writeln!(
        out,
        "  {:<10} {:<40} {}",
        "VARIABLE".bright_black(),
        "HASH (STORAGE ADDRESS)".bright_black(),
        "VALUE".bright_black()
    )?;
    let line = format!("  {:<10} {:<40} {}", row.name, row.address, row.value);
    if row.highlighted {
        writeln!(out, "{}", line.green())?;
    } else {
        writeln!(out, "{}", line)?;
    }

    writeln!(out)?;
    writeln!(out, "{}", "Write Operation".bold().red())?;
    trace(out, &write)?;
    writeln!(out, "{}", "Read Operation".bold().blue())?;
    trace(out, &read)?;

    writeln!(out)?;
    writeln!(out, "{}", "Patricia Merkle Tree".bold().cyan())?;
    writeln!(out, "  {}", tree.root.bold())?;
    writeln!(out, "   └─ {}", tree.address)?;
    let leaf = if tree.leaf_filled {
        tree.leaf.green().bold()
    } else {
        tree.leaf.bright_black()
    };
    writeln!(out, "       └─ {}", leaf)?;
    writeln!(
        out,
        "  Storage Address Hash: {}",
        tree.address_hash.yellow()
    )?;
    writeln!(
        out,
        "  New State Root:       {} {}",
        tree.state_root.root.magenta(),
        tree.state_root.caption.bright_black()
    )?;
    writeln!(out, "  Contract address:     {}", CONTRACT_ADDRESS.bright_black())?;

    Ok(())
}

fn trace<W: Write>(out: &mut W, trace: &SyscallTrace) -> io::Result<()> {
    writeln!(out, "  {} {}", "Cairo Code:".bright_black(), trace.cairo)?;
    writeln!(out, "  {} {}", "System Call:".bright_black(), trace.syscall)?;
    writeln!(out, "  {} {}", "Result:".bright_black(), trace.result.bold())
}

pub fn session_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Commands:".bold())?;
    for (cmd, desc) in [
        ("n, next", "next step"),
        ("p, prev", "previous step"),
        ("g, goto <N>", "jump to step N"),
        ("a <num>, b <num>", "set an operand of the storage demo"),
        ("w, write", "call add_two_numbers(a, b)"),
        ("r, read", "read the sum slot"),
        ("reset", "clear the sum slot"),
        ("s, show", "redraw the current step"),
        ("json", "print the demo snapshot as JSON"),
        ("q, quit", "leave the lesson"),
    ] {
        writeln!(out, "  {:<18} {}", cmd.bright_cyan(), desc)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use starkviz_storage::StorageSimulator;

    #[test]
    fn test_progress_bar() {
        assert_eq!(progress_bar(0.5, 4), "[██░░]");
        assert_eq!(progress_bar(1.0, 3), "[███]");
        assert_eq!(progress_bar(0.0, 2), "[░░]");
        assert_eq!(progress_bar(1.5, 2), "[██]");
    }

    #[test]
    fn test_snapshot_matches_view() {
        let mut sim = StorageSimulator::new();
        sim.write();
        let snapshot = DemoSnapshot::from(sim.derive_view_model());

        assert_eq!(snapshot.status.text, "sum = 12");
        assert_eq!(snapshot.layout.value, snapshot.view.value);
        assert_eq!(snapshot.tree.leaf, "Value: 12");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["read"]["result"], "Returns value: 12");
    }

    #[test]
    fn test_storage_demo_mentions_values() {
        colored::control::set_override(false);
        let mut sim = StorageSimulator::new();
        sim.write();

        let mut out = Vec::new();
        storage_demo(&mut out, &sim.derive_view_model()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("sum = 12"));
        assert!(text.contains("0x9fa3c2b1...7e8d4f (Updated after write)"));
        assert!(text.contains("storage_write_syscall(address=H(\"sum\"), value=12)"));
    }
}
