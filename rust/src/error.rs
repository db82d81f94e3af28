//! Error types for schedule computation.

use thiserror::Error;

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors that abort a schedule computation or reject malformed input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// The in-project dependency graph contains a cycle. `cycle` starts and
    /// ends with the same title.
    #[error("Circular dependency detected: {}", .cycle.join(" -> "))]
    CycleDetected { cycle: Vec<String> },

    /// Late times need at least one task to anchor the project finish.
    #[error("Project has no tasks defined")]
    NoTasksDefined,

    #[error("Duplicate task title in project: {0}")]
    DuplicateTask(String),

    #[error("Task '{title}' has invalid duration {duration_days} (must be at least 1 day)")]
    InvalidDuration { title: String, duration_days: u32 },

    #[error("Unknown task status: {0}")]
    InvalidStatus(String),

    /// A computed date would fall outside the calendar range `NaiveDate`
    /// can represent.
    #[error("Task '{title}' dates fall outside the supported calendar range")]
    DateOutOfRange { title: String },

    /// Task ids are `u32`, so a project holds at most `u32::MAX` tasks.
    #[error("Project has {count} tasks, more than the supported {}", u32::MAX)]
    TooManyTasks { count: usize },
}
