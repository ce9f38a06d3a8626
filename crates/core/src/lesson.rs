//! Lesson steps and the step sequencer.
//!
//! A lesson is a fixed, ordered walkthrough. The [`StepSequencer`] owns the
//! steps and the learner's position among them; nothing else in a lesson
//! session can move that position.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

/// Errors that can occur while building or loading a lesson.
#[derive(Debug, Error)]
pub enum LessonError {
    #[error("a lesson needs at least one step")]
    EmptyLesson,

    #[error("unknown lesson: {0}")]
    UnknownLesson(String),

    #[error("failed to read lesson file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid lesson file: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LessonError>;

/// A code listing shown inside a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub file_name: String,
    pub language: String,
    pub code: String,
}

/// An external link shown inside a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

/// Authored body of a step. Purely presentational.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepContent {
    /// Terminal command the step runs, without the prompt.
    pub command: Option<String>,
    pub snippet: Option<Snippet>,
    pub notes_heading: Option<String>,
    pub notes: Vec<String>,
    pub link: Option<Link>,
    /// The step embeds the interactive storage demo.
    pub storage_demo: bool,
}

/// One stage of a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonStep {
    /// Zero-based position, assigned by [`StepSequencer::new`].
    #[serde(default, skip_deserializing)]
    pub index: usize,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[serde(default)]
    pub content: StepContent,
}

impl LessonStep {
    /// Create a step with no authored body.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            index: 0,
            title: title.into(),
            description: description.into(),
            icon: icon.into(),
            content: StepContent::default(),
        }
    }

    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.content.command = Some(command.into());
        self
    }

    pub fn with_snippet(
        mut self,
        file_name: impl Into<String>,
        language: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        self.content.snippet = Some(Snippet {
            file_name: file_name.into(),
            language: language.into(),
            code: code.into(),
        });
        self
    }

    pub fn with_notes(mut self, heading: impl Into<String>, notes: &[&str]) -> Self {
        self.content.notes_heading = Some(heading.into());
        self.content.notes = notes.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_link(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.content.link = Some(Link {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    /// Mark this step as the one that hosts the storage demo.
    pub fn with_storage_demo(mut self) -> Self {
        self.content.storage_demo = true;
        self
    }
}

/// Where a step sits relative to the learner's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Current,
    Upcoming,
}

/// Tracks the learner's position within a fixed list of steps.
///
/// Invariant: `current < steps.len()` and `steps` is never empty.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    steps: Vec<LessonStep>,
    current: usize,
}

impl StepSequencer {
    /// Build a sequencer positioned at the first step.
    ///
    /// Step indices are reassigned from their position in `steps`.
    pub fn new(steps: Vec<LessonStep>) -> Result<Self> {
        if steps.is_empty() {
            return Err(LessonError::EmptyLesson);
        }

        let steps = steps
            .into_iter()
            .enumerate()
            .map(|(index, mut step)| {
                step.index = index;
                step
            })
            .collect();

        Ok(Self { steps, current: 0 })
    }

    /// Jump to `target`. Out-of-range targets are ignored.
    ///
    /// Returns true if the position changed.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target >= self.steps.len() {
            trace!(target, len = self.steps.len(), "ignoring out-of-range step");
            return false;
        }

        let moved = target != self.current;
        self.current = target;
        if moved {
            debug!(step = target, title = %self.steps[target].title, "moved to step");
        }
        moved
    }

    /// Advance one step. No-op on the last step.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current + 1)
    }

    /// Go back one step. No-op on the first step.
    pub fn previous(&mut self) -> bool {
        match self.current.checked_sub(1) {
            Some(target) => self.go_to(target),
            None => {
                trace!("already at the first step");
                false
            }
        }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_step(&self) -> &LessonStep {
        &self.steps[self.current]
    }

    pub fn steps(&self) -> &[LessonStep] {
        &self.steps
    }

    /// Number of steps. Always at least one.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(current + 1) / len`, in `(0, 1]`.
    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.steps.len() as f64
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    /// Classify `index` against the current position.
    pub fn step_status(&self, index: usize) -> StepStatus {
        use std::cmp::Ordering;

        match index.cmp(&self.current) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Current,
            Ordering::Greater => StepStatus::Upcoming,
        }
    }
}

/// Read a list of steps from a JSON file.
///
/// The file holds an array of step objects; indices in the file, if any,
/// are ignored.
pub fn load_steps(path: impl AsRef<Path>) -> Result<Vec<LessonStep>> {
    let contents = std::fs::read_to_string(path)?;
    let steps: Vec<LessonStep> = serde_json::from_str(&contents)?;
    if steps.is_empty() {
        return Err(LessonError::EmptyLesson);
    }
    Ok(steps)
}
