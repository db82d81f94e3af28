//! Value types produced by the schedule passes.

use chrono::NaiveDate;
use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::models::Project;

/// Earliest start/finish of a task (forward pass output).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EarlyTimes {
    pub early_start: NaiveDate,
    pub early_finish: NaiveDate,
}

/// Full timing of a task after both passes.
#[pyclass]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaskTiming {
    #[pyo3(get, set)]
    pub early_start: NaiveDate,
    #[pyo3(get, set)]
    pub early_finish: NaiveDate,
    #[pyo3(get, set)]
    pub late_start: NaiveDate,
    #[pyo3(get, set)]
    pub late_finish: NaiveDate,
}

impl TaskTiming {
    /// Days the task can slip without moving the project finish.
    pub fn slack_days(&self) -> i64 {
        (self.late_start - self.early_start).num_days()
    }

    pub fn is_critical(&self) -> bool {
        self.early_start == self.late_start
    }

    pub fn early(&self) -> EarlyTimes {
        EarlyTimes {
            early_start: self.early_start,
            early_finish: self.early_finish,
        }
    }
}

#[pymethods]
impl TaskTiming {
    #[new]
    fn py_new(
        early_start: NaiveDate,
        early_finish: NaiveDate,
        late_start: NaiveDate,
        late_finish: NaiveDate,
    ) -> Self {
        Self {
            early_start,
            early_finish,
            late_start,
            late_finish,
        }
    }

    #[getter(slack_days)]
    fn py_slack_days(&self) -> i64 {
        self.slack_days()
    }

    #[getter(is_critical)]
    fn py_is_critical(&self) -> bool {
        self.is_critical()
    }

    fn __repr__(&self) -> String {
        format!(
            "TaskTiming(es={}, ef={}, ls={}, lf={}, slack={})",
            self.early_start,
            self.early_finish,
            self.late_start,
            self.late_finish,
            self.slack_days()
        )
    }
}

/// Outcome of critical-path reconstruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CriticalPath {
    /// At least one complete chain from a dependency-free critical task to a
    /// task finishing on the project finish date. `path` is the first chain in
    /// input order; further chains are listed in `alternatives`.
    Found {
        path: Vec<String>,
        alternatives: Vec<Vec<String>>,
    },
    /// No task has zero slack.
    NoCriticalTasks,
    /// Critical tasks exist but none of them can be chained into a complete path.
    NoCompletePath,
}

impl CriticalPath {
    /// The primary path, if one was found.
    pub fn path(&self) -> Option<&[String]> {
        match self {
            CriticalPath::Found { path, .. } => Some(path),
            _ => None,
        }
    }

    /// Every complete path found, primary first.
    pub fn all_paths(&self) -> Vec<&[String]> {
        match self {
            CriticalPath::Found { path, alternatives } => std::iter::once(path.as_slice())
                .chain(alternatives.iter().map(Vec::as_slice))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Short status name used by the Python binding.
    pub fn status(&self) -> &'static str {
        match self {
            CriticalPath::Found { .. } => "found",
            CriticalPath::NoCriticalTasks => "no_critical_tasks",
            CriticalPath::NoCompletePath => "no_complete_path",
        }
    }
}

/// Complete schedule for one project snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct Schedule {
    pub start_date: NaiveDate,
    /// Latest early finish over all tasks.
    pub project_finish: NaiveDate,
    /// Task titles in the order the passes processed them.
    pub order: Vec<String>,
    pub timings: FxHashMap<String, TaskTiming>,
    /// Zero-slack task titles, in project order.
    pub critical_tasks: Vec<String>,
    pub critical_path: CriticalPath,
}

impl Schedule {
    pub fn timing(&self, title: &str) -> Option<&TaskTiming> {
        self.timings.get(title)
    }

    /// Minimum number of days needed to finish the project.
    ///
    /// Zero when recorded completed work already finishes on or before the
    /// start date.
    pub fn project_duration_days(&self) -> i64 {
        (self.project_finish - self.start_date).num_days().max(0)
    }

    /// Copy computed timings into the matching tasks of `project`.
    ///
    /// Returns the number of tasks updated. Tasks absent from the schedule
    /// (added after it was computed) are left alone.
    pub fn apply_to(&self, project: &mut Project) -> usize {
        let mut updated = 0;
        for task in &mut project.tasks {
            if let Some(timing) = self.timings.get(&task.title) {
                task.schedule = Some(*timing);
                updated += 1;
            }
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_task_timing_critical() {
        let timing = TaskTiming {
            early_start: date(2025, 1, 1),
            early_finish: date(2025, 1, 6),
            late_start: date(2025, 1, 1),
            late_finish: date(2025, 1, 6),
        };
        assert!(timing.is_critical());
        assert_eq!(timing.slack_days(), 0);

        let with_slack = TaskTiming {
            late_start: date(2025, 1, 3),
            late_finish: date(2025, 1, 8),
            ..timing
        };
        assert!(!with_slack.is_critical());
        assert_eq!(with_slack.slack_days(), 2);
    }

    #[test]
    fn test_critical_path_accessors() {
        let found = CriticalPath::Found {
            path: vec!["a".to_string(), "b".to_string()],
            alternatives: vec![vec!["c".to_string()]],
        };
        assert_eq!(found.path().map(<[String]>::len), Some(2));
        assert_eq!(found.all_paths().len(), 2);
        assert_eq!(found.status(), "found");

        assert_eq!(CriticalPath::NoCompletePath.path(), None);
        assert!(CriticalPath::NoCriticalTasks.all_paths().is_empty());
        assert_eq!(CriticalPath::NoCriticalTasks.status(), "no_critical_tasks");
    }
}
