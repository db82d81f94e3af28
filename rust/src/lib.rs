//! Critical path scheduling engine for the project tracker.
//!
//! Given a project's tasks (durations, finish-to-start dependencies,
//! statuses) this crate computes early/late start and finish dates, slack,
//! and the critical path. It is usable as a plain Rust library and as a Python
//! extension module for the tracker's web layer.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;
use std::collections::HashMap;

mod config;
pub mod cpm;
mod error;
mod interner;
pub mod logging;
mod models;

pub use config::CpmConfig;
pub use cpm::{
    calculate_early_times, calculate_late_times, compute_schedule, critical_path,
    critical_tasks, foreign_dependencies, topological_order, CriticalPath, EarlyTimes, Schedule,
    TaskTiming,
};
pub use error::{Result, ScheduleError};
pub use models::{Project, Task, TaskStatus};

fn to_py_err(err: ScheduleError) -> PyErr {
    pyo3::exceptions::PyValueError::new_err(err.to_string())
}

/// Critical path outcome (PyO3 wrapper).
///
/// `status` is "found", "no_critical_tasks" or "no_complete_path"; `path` is
/// empty unless a path was found.
#[pyclass(name = "CriticalPath")]
#[derive(Clone, Debug)]
pub struct PyCriticalPath {
    #[pyo3(get)]
    pub status: String,
    #[pyo3(get)]
    pub path: Vec<String>,
    #[pyo3(get)]
    pub alternatives: Vec<Vec<String>>,
}

impl From<CriticalPath> for PyCriticalPath {
    fn from(result: CriticalPath) -> Self {
        let status = result.status().to_string();
        match result {
            CriticalPath::Found { path, alternatives } => Self {
                status,
                path,
                alternatives,
            },
            CriticalPath::NoCriticalTasks | CriticalPath::NoCompletePath => Self {
                status,
                path: Vec::new(),
                alternatives: Vec::new(),
            },
        }
    }
}

#[pymethods]
impl PyCriticalPath {
    fn __repr__(&self) -> String {
        format!(
            "CriticalPath(status={:?}, path={:?}, alternatives={})",
            self.status,
            self.path,
            self.alternatives.len()
        )
    }
}

/// Complete schedule (PyO3 wrapper).
#[pyclass(name = "Schedule")]
#[derive(Clone, Debug)]
pub struct PySchedule {
    inner: Schedule,
}

#[pymethods]
impl PySchedule {
    #[getter]
    fn start_date(&self) -> NaiveDate {
        self.inner.start_date
    }

    #[getter]
    fn project_finish(&self) -> NaiveDate {
        self.inner.project_finish
    }

    #[getter]
    fn project_duration_days(&self) -> i64 {
        self.inner.project_duration_days()
    }

    #[getter]
    fn order(&self) -> Vec<String> {
        self.inner.order.clone()
    }

    #[getter]
    fn timings(&self) -> HashMap<String, TaskTiming> {
        self.inner
            .timings
            .iter()
            .map(|(k, v)| (k.clone(), *v))
            .collect()
    }

    #[getter]
    fn critical_tasks(&self) -> Vec<String> {
        self.inner.critical_tasks.clone()
    }

    #[getter]
    fn critical_path(&self) -> PyCriticalPath {
        self.inner.critical_path.clone().into()
    }

    /// Copy computed timings onto the project's tasks. Returns the number updated.
    fn apply_to(&self, mut project: PyRefMut<'_, Project>) -> usize {
        self.inner.apply_to(&mut project)
    }

    fn __repr__(&self) -> String {
        format!(
            "Schedule(tasks={}, start={}, finish={}, critical={})",
            self.inner.order.len(),
            self.inner.start_date,
            self.inner.project_finish,
            self.inner.critical_tasks.len()
        )
    }
}

/// Order task titles so every dependency precedes its dependents.
///
/// # Raises
/// * ValueError if a circular dependency or duplicate title is found
#[pyfunction]
#[pyo3(name = "topological_order", signature = (tasks, config=None))]
fn py_topological_order(tasks: Vec<Task>, config: Option<CpmConfig>) -> PyResult<Vec<String>> {
    let config = config.unwrap_or_default();
    let order = topological_order(&tasks, &config).map_err(to_py_err)?;
    Ok(order.into_iter().map(|t| t.title.clone()).collect())
}

/// Earliest (start, finish) per task title.
#[pyfunction]
#[pyo3(name = "calculate_early_times", signature = (project, config=None))]
fn py_calculate_early_times(
    project: Project,
    config: Option<CpmConfig>,
) -> PyResult<HashMap<String, (NaiveDate, NaiveDate)>> {
    let config = config.unwrap_or_default();
    let early = calculate_early_times(&project, &config).map_err(to_py_err)?;
    Ok(early
        .into_iter()
        .map(|(title, t)| (title, (t.early_start, t.early_finish)))
        .collect())
}

/// Full timings per task title.
///
/// # Raises
/// * ValueError if the project has no tasks or a circular dependency
#[pyfunction]
#[pyo3(name = "calculate_late_times", signature = (project, config=None))]
fn py_calculate_late_times(
    project: Project,
    config: Option<CpmConfig>,
) -> PyResult<HashMap<String, TaskTiming>> {
    let config = config.unwrap_or_default();
    let timings = calculate_late_times(&project, &config).map_err(to_py_err)?;
    Ok(timings.into_iter().collect())
}

#[pyfunction]
#[pyo3(name = "critical_path", signature = (project, config=None))]
fn py_critical_path(project: Project, config: Option<CpmConfig>) -> PyResult<PyCriticalPath> {
    let config = config.unwrap_or_default();
    let result = critical_path(&project, &config).map_err(to_py_err)?;
    Ok(result.into())
}

/// Validate the project and compute its complete schedule.
#[pyfunction]
#[pyo3(name = "compute_schedule", signature = (project, config=None))]
fn py_compute_schedule(project: Project, config: Option<CpmConfig>) -> PyResult<PySchedule> {
    let config = config.unwrap_or_default();
    let inner = compute_schedule(&project, &config).map_err(to_py_err)?;
    Ok(PySchedule { inner })
}

/// (task, dependency) title pairs whose dependency lies outside the project.
#[pyfunction]
#[pyo3(name = "foreign_dependencies")]
fn py_foreign_dependencies(project: Project) -> PyResult<Vec<(String, String)>> {
    foreign_dependencies(&project).map_err(to_py_err)
}

/// The tasktrack.cpm Python module.
#[pymodule]
#[pyo3(name = "cpm")]
fn cpm_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Data types
    m.add_class::<TaskStatus>()?;
    m.add_class::<Task>()?;
    m.add_class::<Project>()?;
    m.add_class::<TaskTiming>()?;
    m.add_class::<PyCriticalPath>()?;
    m.add_class::<PySchedule>()?;

    // Config types
    m.add_class::<CpmConfig>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_topological_order, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_early_times, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_late_times, m)?)?;
    m.add_function(wrap_pyfunction!(py_critical_path, m)?)?;
    m.add_function(wrap_pyfunction!(py_compute_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_foreign_dependencies, m)?)?;

    Ok(())
}
