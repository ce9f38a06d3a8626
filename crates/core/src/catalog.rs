//! The built-in lesson catalog.

use crate::content::{deployment_steps, storage_one_steps};
use crate::lesson::{LessonError, LessonStep, Result, StepSequencer};
use serde::Serialize;

/// Difficulty shown next to a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
}

/// Catalog entry for a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LessonInfo {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub level: Level,
    pub path: &'static str,
    pub icon: &'static str,
    pub topics: &'static [&'static str],
}

impl LessonInfo {
    /// Build the authored steps for this lesson.
    ///
    /// Lessons without authored steps get a single overview step.
    pub fn steps(&self) -> Vec<LessonStep> {
        match self.id {
            "deployment" => deployment_steps(),
            "storageone" => storage_one_steps(),
            _ => vec![LessonStep::new(self.title, self.description, self.icon)],
        }
    }

    /// Start a fresh walkthrough of this lesson.
    pub fn sequencer(&self) -> Result<StepSequencer> {
        StepSequencer::new(self.steps())
    }
}

/// All lessons, in the recommended learning order.
pub const LESSONS: &[LessonInfo] = &[
    LessonInfo {
        id: "deployment",
        title: "Smart Contract Deployment",
        description: "Learn how smart contracts are processed in Starknet - from Cairo code to Sierra/CASM, through the sequencer, to proof generation.",
        level: Level::Beginner,
        path: "/deployment",
        icon: "🚀",
        topics: &["Compilation", "Sequencer", "Proof Generation"],
    },
    LessonInfo {
        id: "storageone",
        title: "Simple Storage - Part 1",
        description: "Understand the basic storage mechanism with a simple storage contract. Learn about storage slots and read/write operations.",
        level: Level::Beginner,
        path: "/storageone",
        icon: "💾",
        topics: &["Storage Variables", "Read Operations", "Write Operations"],
    },
    LessonInfo {
        id: "storagetwo",
        title: "Simple Storage - Part 2",
        description: "Deep dive into the Patricia Merkle Tree structure and how contract storage is organized behind the scenes.",
        level: Level::Beginner,
        path: "/storagetwo",
        icon: "🌳",
        topics: &["Merkle Tree", "Storage Layout", "Syscalls"],
    },
    LessonInfo {
        id: "constructor",
        title: "Constructor Mechanism",
        description: "Learn how constructors initialize contract state during deployment with constructor arguments.",
        level: Level::Beginner,
        path: "/constructor",
        icon: "🏗️",
        topics: &["Constructor", "Initial State", "Deployment Arguments"],
    },
];

/// Look up a lesson by id.
pub fn find(id: &str) -> Result<&'static LessonInfo> {
    LESSONS
        .iter()
        .find(|lesson| lesson.id == id)
        .ok_or_else(|| LessonError::UnknownLesson(id.to_string()))
}

/// Look up a lesson by its route path.
pub fn find_by_path(path: &str) -> Option<&'static LessonInfo> {
    LESSONS.iter().find(|lesson| lesson.path == path)
}

/// The lesson that follows `id` in the learning path, if any.
pub fn next_lesson(id: &str) -> Option<&'static LessonInfo> {
    let position = LESSONS.iter().position(|lesson| lesson.id == id)?;
    LESSONS.get(position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = LESSONS.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec!["deployment", "storageone", "storagetwo", "constructor"]);
    }

    #[test]
    fn test_find() {
        assert_eq!(find("storageone").unwrap().path, "/storageone");
        assert!(matches!(
            find("nope"),
            Err(LessonError::UnknownLesson(id)) if id == "nope"
        ));
    }

    #[test]
    fn test_find_by_path() {
        assert_eq!(find_by_path("/deployment").unwrap().id, "deployment");
        assert!(find_by_path("/about").is_none());
    }

    #[test]
    fn test_next_lesson() {
        assert_eq!(next_lesson("deployment").unwrap().id, "storageone");
        assert!(next_lesson("constructor").is_none());
        assert!(next_lesson("unknown").is_none());
    }

    #[test]
    fn test_every_lesson_has_steps() {
        for lesson in LESSONS {
            let seq = lesson.sequencer().unwrap();
            assert!(seq.len() >= 1, "{} has no steps", lesson.id);
            assert_eq!(seq.current_index(), 0);
        }
    }

    #[test]
    fn test_placeholder_lesson_has_one_step() {
        let seq = find("constructor").unwrap().sequencer().unwrap();
        assert_eq!(seq.len(), 1);
        assert!(seq.is_first() && seq.is_last());
    }
}
