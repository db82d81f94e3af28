//! Critical path method (CPM) schedule computation.
//!
//! A project's tasks are lowered to an arena graph, ordered so every
//! dependency precedes its dependents, then run through a forward pass (early
//! start/finish) and a backward pass (late start/finish). Zero-slack tasks are
//! critical; chains of them from a dependency-free task to the project finish
//! form the critical path.
//!
//! Every entry point recomputes from scratch and returns new values; the
//! input project is never modified. Use [`Schedule::apply_to`] to copy results
//! back onto task values.

mod backward;
mod forward;
mod graph;
mod path;
mod topo;
mod types;

use chrono::NaiveDate;
use rustc_hash::FxHashMap;

use crate::config::CpmConfig;
use crate::error::Result;
use crate::log_pass;
use crate::models::{Project, Task};

use graph::ProjectGraph;

pub use types::{CriticalPath, EarlyTimes, Schedule, TaskTiming};

/// Order tasks so that every in-project dependency comes before its dependents.
///
/// Fails with `CycleDetected` if the in-project dependency graph has a cycle.
pub fn topological_order<'a>(tasks: &'a [Task], config: &CpmConfig) -> Result<Vec<&'a Task>> {
    let graph = ProjectGraph::build(tasks)?;
    let order = topo::sort(&graph, config.verbosity)?;
    Ok(order.into_iter().map(|id| graph.task(id)).collect())
}

/// Earliest start and finish per task title.
pub fn calculate_early_times(
    project: &Project,
    config: &CpmConfig,
) -> Result<FxHashMap<String, EarlyTimes>> {
    let graph = ProjectGraph::build(&project.tasks)?;
    let order = topo::sort(&graph, config.verbosity)?;
    let early = forward::early_times(&graph, &order, project.start_date, config.verbosity)?;
    Ok(graph
        .ids()
        .map(|id| (graph.title(id).to_string(), early[id as usize]))
        .collect())
}

/// Full timings per task title. Runs the forward pass first.
///
/// Fails with `NoTasksDefined` for a project without tasks.
pub fn calculate_late_times(
    project: &Project,
    config: &CpmConfig,
) -> Result<FxHashMap<String, TaskTiming>> {
    let passes = Passes::run(project, config)?;
    Ok(passes
        .graph
        .ids()
        .map(|id| (passes.graph.title(id).to_string(), passes.timings[id as usize]))
        .collect())
}

/// Reconstruct the project's critical path.
pub fn critical_path(project: &Project, config: &CpmConfig) -> Result<CriticalPath> {
    let passes = Passes::run(project, config)?;
    Ok(passes.critical_path(config))
}

/// Titles of all zero-slack tasks, in project order.
pub fn critical_tasks(project: &Project, config: &CpmConfig) -> Result<Vec<String>> {
    Ok(Passes::run(project, config)?.critical_titles())
}

/// Dependency edges, as `(task, dependency)` title pairs, whose dependency is
/// not a task of this project. These edges never constrain the schedule.
pub fn foreign_dependencies(project: &Project) -> Result<Vec<(String, String)>> {
    let graph = ProjectGraph::build(&project.tasks)?;
    Ok(graph
        .foreign_edges()
        .iter()
        .map(|&(id, dep)| (graph.title(id).to_string(), dep.to_string()))
        .collect())
}

/// Validate the project and compute its complete schedule in one call.
pub fn compute_schedule(project: &Project, config: &CpmConfig) -> Result<Schedule> {
    project.validate()?;
    let passes = Passes::run(project, config)?;
    let critical_path = passes.critical_path(config);
    let critical_tasks = passes.critical_titles();

    let graph = &passes.graph;
    let schedule = Schedule {
        start_date: project.start_date,
        project_finish: passes.project_finish,
        order: passes
            .order
            .iter()
            .map(|&id| graph.title(id).to_string())
            .collect(),
        timings: graph
            .ids()
            .map(|id| (graph.title(id).to_string(), passes.timings[id as usize]))
            .collect(),
        critical_tasks,
        critical_path,
    };
    log_pass!(
        config.verbosity,
        "schedule for {:?}: {} tasks, {} days, {} critical",
        project.name,
        schedule.order.len(),
        schedule.project_duration_days(),
        schedule.critical_tasks.len()
    );
    Ok(schedule)
}

/// Sorter, forward and backward pass results over one graph.
struct Passes<'a> {
    graph: ProjectGraph<'a>,
    order: Vec<crate::interner::TaskId>,
    project_finish: NaiveDate,
    timings: Vec<TaskTiming>,
}

impl<'a> Passes<'a> {
    fn run(project: &'a Project, config: &CpmConfig) -> Result<Self> {
        let graph = ProjectGraph::build(&project.tasks)?;
        let order = topo::sort(&graph, config.verbosity)?;
        let early = forward::early_times(&graph, &order, project.start_date, config.verbosity)?;
        let (project_finish, timings) =
            backward::late_times(&graph, &order, &early, config.verbosity)?;
        Ok(Self {
            graph,
            order,
            project_finish,
            timings,
        })
    }

    fn critical_path(&self, config: &CpmConfig) -> CriticalPath {
        path::critical_path(
            &self.graph,
            &self.timings,
            self.project_finish,
            config.max_critical_paths,
            config.verbosity,
        )
    }

    fn critical_titles(&self) -> Vec<String> {
        self.graph
            .ids()
            .filter(|&id| self.timings[id as usize].is_critical())
            .map(|id| self.graph.title(id).to_string())
            .collect()
    }
}
