//! Lesson primitives for starkviz.
//!
//! This crate provides everything a lesson page needs apart from the
//! storage demo:
//! - Lesson steps and the step sequencer
//! - The built-in lesson catalog and its authored content
//! - Page routes
//!
//! # Example
//!
//! ```rust
//! use starkviz_core::catalog;
//!
//! let lesson = catalog::find("deployment").unwrap();
//! let mut seq = lesson.sequencer().unwrap();
//!
//! seq.next();
//! assert_eq!(seq.current_step().title, "Build with Scarb");
//! assert!(!seq.is_first());
//! ```

pub mod catalog;
pub mod content;
pub mod lesson;
pub mod route;

// Re-export commonly used types at the crate root
pub use catalog::{LessonInfo, Level, LESSONS};
pub use lesson::{
    load_steps, LessonError, LessonStep, Link, Snippet, StepContent, StepSequencer, StepStatus,
};
pub use route::Route;
