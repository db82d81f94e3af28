//! Project and task values consumed by the schedule engine.

use chrono::NaiveDate;
use pyo3::prelude::*;
use rustc_hash::FxHashSet;
use std::str::FromStr;

use crate::cpm::TaskTiming;
use crate::error::{Result, ScheduleError};

/// Lifecycle status of a task. Only `Completed` changes how a task is scheduled.
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    InProgress,
    Blocked,
    Completed,
}

impl TaskStatus {
    pub fn is_completed(self) -> bool {
        self == TaskStatus::Completed
    }
}

impl FromStr for TaskStatus {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" | "inprogress" => Ok(TaskStatus::InProgress),
            "blocked" => Ok(TaskStatus::Blocked),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(ScheduleError::InvalidStatus(s.to_string())),
        }
    }
}

#[pymethods]
impl TaskStatus {
    /// Parse a status name such as "in_progress" or "Completed".
    #[staticmethod]
    fn from_name(name: &str) -> PyResult<Self> {
        name.parse::<TaskStatus>()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }
}

/// A task inside a project.
///
/// `dependencies` lists the titles of tasks that must finish before this one
/// can start. Titles that do not name a task of the same project are kept but
/// ignored by the schedule passes.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    #[pyo3(get, set)]
    pub title: String,
    pub duration_days: u32,
    #[pyo3(get, set)]
    pub status: TaskStatus,
    #[pyo3(get, set)]
    pub dependencies: Vec<String>,
    /// Last computed or historically recorded timing.
    #[pyo3(get, set)]
    pub schedule: Option<TaskTiming>,
}

impl Task {
    /// Create a pending task with no dependencies.
    pub fn new(title: impl Into<String>, duration_days: u32) -> Result<Self> {
        let title = title.into();
        if duration_days == 0 {
            return Err(ScheduleError::InvalidDuration {
                title,
                duration_days,
            });
        }
        Ok(Self {
            title,
            duration_days,
            status: TaskStatus::Pending,
            dependencies: Vec::new(),
            schedule: None,
        })
    }

    pub fn with_dependencies<I, S>(mut self, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies.extend(deps.into_iter().map(Into::into));
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_schedule(mut self, schedule: TaskTiming) -> Self {
        self.schedule = Some(schedule);
        self
    }

    pub fn is_completed(&self) -> bool {
        self.status.is_completed()
    }
}

#[pymethods]
impl Task {
    #[new]
    #[pyo3(signature = (title, duration_days, dependencies=Vec::new(), status=TaskStatus::Pending, schedule=None))]
    fn py_new(
        title: String,
        duration_days: u32,
        dependencies: Vec<String>,
        status: TaskStatus,
        schedule: Option<TaskTiming>,
    ) -> PyResult<Self> {
        let mut task = Task::new(title, duration_days)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))?;
        task.dependencies = dependencies;
        task.status = status;
        task.schedule = schedule;
        Ok(task)
    }

    #[getter]
    fn duration_days(&self) -> u32 {
        self.duration_days
    }

    #[setter]
    fn set_duration_days(&mut self, duration_days: u32) -> PyResult<()> {
        if duration_days == 0 {
            return Err(pyo3::exceptions::PyValueError::new_err(
                ScheduleError::InvalidDuration {
                    title: self.title.clone(),
                    duration_days,
                }
                .to_string(),
            ));
        }
        self.duration_days = duration_days;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "Task(title={:?}, duration_days={}, status={:?}, deps={})",
            self.title,
            self.duration_days,
            self.status,
            self.dependencies.len()
        )
    }
}

/// A project: an ordered task collection plus the day work can begin.
#[pyclass]
#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    #[pyo3(get, set)]
    pub name: String,
    #[pyo3(get, set)]
    pub start_date: NaiveDate,
    #[pyo3(get, set)]
    pub tasks: Vec<Task>,
}

impl Project {
    pub fn new(name: impl Into<String>, start_date: NaiveDate, tasks: Vec<Task>) -> Self {
        Self {
            name: name.into(),
            start_date,
            tasks,
        }
    }

    /// Check the invariants the owning entities are expected to uphold:
    /// unique titles and durations of at least one day.
    pub fn validate(&self) -> Result<()> {
        let mut seen: FxHashSet<&str> =
            FxHashSet::with_capacity_and_hasher(self.tasks.len(), Default::default());
        for task in &self.tasks {
            if task.duration_days == 0 {
                return Err(ScheduleError::InvalidDuration {
                    title: task.title.clone(),
                    duration_days: task.duration_days,
                });
            }
            if !seen.insert(task.title.as_str()) {
                return Err(ScheduleError::DuplicateTask(task.title.clone()));
            }
        }
        Ok(())
    }

    pub fn task(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.title == title)
    }
}

#[pymethods]
impl Project {
    #[new]
    #[pyo3(signature = (name, start_date, tasks=Vec::new()))]
    fn py_new(name: String, start_date: NaiveDate, tasks: Vec<Task>) -> Self {
        Self::new(name, start_date, tasks)
    }

    fn __repr__(&self) -> String {
        format!(
            "Project(name={:?}, start_date={}, tasks={})",
            self.name,
            self.start_date,
            self.tasks.len()
        )
    }
}
