//! A lesson session: one sequencer and one storage demo.
//!
//! Sessions are built fresh every time a lesson is entered and dropped when
//! the learner leaves, so nothing carries over between visits.

use anyhow::{bail, Context, Result};
use starkviz_core::{LessonInfo, LessonStep, StepSequencer};
use starkviz_storage::{Operand, SlotValue, StorageSimulator};
use std::str::FromStr;

/// A single learner action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Next,
    Previous,
    /// Jump to a step, numbered from 1 as shown on screen.
    GoTo(usize),
    SetOperand(Operand, String),
    Write,
    Read,
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

impl FromStr for SessionCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let cmd = match word.to_ascii_lowercase().as_str() {
            "n" | "next" => Self::Next,
            "p" | "prev" | "previous" => Self::Previous,
            "g" | "goto" => {
                let step = rest
                    .parse::<usize>()
                    .with_context(|| format!("Invalid step number: '{}'", rest))?;
                Self::GoTo(step)
            }
            "a" => Self::SetOperand(Operand::A, rest.to_string()),
            "b" => Self::SetOperand(Operand::B, rest.to_string()),
            "set" => {
                let (which, raw) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                Self::SetOperand(which.parse()?, raw.trim().to_string())
            }
            "w" | "write" | "call" => Self::Write,
            "r" | "read" => Self::Read,
            "reset" => Self::Reset,
            "s" | "show" | "" => Self::Show,
            "json" => Self::Json,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command: '{}'. Type 'help' for a list.", other),
        };

        Ok(cmd)
    }
}

/// What happened after applying a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The current step changed.
    Moved,
    /// Navigation had nowhere to go.
    Unchanged,
    /// The storage demo changed.
    StorageChanged,
    /// Result of a read, per the demo's read semantics.
    Read(SlotValue),
    Show,
    Json,
    Help,
    /// A storage command was issued away from the demo step.
    DemoUnavailable,
    Quit,
}

/// State of one visit to a lesson.
pub struct LessonSession {
    title: String,
    sequencer: StepSequencer,
    simulator: StorageSimulator,
}

impl LessonSession {
    /// Enter a catalog lesson.
    pub fn start(info: &LessonInfo) -> Result<Self> {
        Self::from_steps(info.title, info.steps())
    }

    /// Enter a lesson built from arbitrary steps.
    pub fn from_steps(title: impl Into<String>, steps: Vec<LessonStep>) -> Result<Self> {
        let sequencer = StepSequencer::new(steps).context("Failed to build lesson")?;
        Ok(Self {
            title: title.into(),
            sequencer,
            simulator: StorageSimulator::new(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sequencer(&self) -> &StepSequencer {
        &self.sequencer
    }

    pub fn simulator(&self) -> &StorageSimulator {
        &self.simulator
    }

    /// Whether the current step shows the storage demo.
    pub fn on_demo_step(&self) -> bool {
        self.sequencer.current_step().content.storage_demo
    }

    /// 1-based number of the step hosting the storage demo, if any.
    pub fn demo_step_number(&self) -> Option<usize> {
        self.sequencer
            .steps()
            .iter()
            .find(|step| step.content.storage_demo)
            .map(|step| step.index + 1)
    }

    pub fn apply(&mut self, cmd: SessionCommand) -> Outcome {
        match cmd {
            SessionCommand::Next => moved(self.sequencer.next()),
            SessionCommand::Previous => moved(self.sequencer.previous()),
            SessionCommand::GoTo(step) => match step.checked_sub(1) {
                Some(target) => moved(self.sequencer.go_to(target)),
                None => Outcome::Unchanged,
            },
            SessionCommand::SetOperand(which, raw) => self.on_demo(|sim| {
                sim.set_operand(which, &raw);
                Outcome::StorageChanged
            }),
            SessionCommand::Write => self.on_demo(|sim| {
                sim.write();
                Outcome::StorageChanged
            }),
            SessionCommand::Read => self.on_demo(|sim| Outcome::Read(sim.read())),
            SessionCommand::Reset => self.on_demo(|sim| {
                sim.reset();
                Outcome::StorageChanged
            }),
            SessionCommand::Show => Outcome::Show,
            SessionCommand::Json => Outcome::Json,
            SessionCommand::Help => Outcome::Help,
            SessionCommand::Quit => Outcome::Quit,
        }
    }

    fn on_demo(&mut self, f: impl FnOnce(&mut StorageSimulator) -> Outcome) -> Outcome {
        if self.on_demo_step() {
            f(&mut self.simulator)
        } else {
            Outcome::DemoUnavailable
        }
    }
}

fn moved(changed: bool) -> Outcome {
    if changed {
        Outcome::Moved
    } else {
        Outcome::Unchanged
    }
}
