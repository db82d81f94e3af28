//! Critical path reconstruction.
//!
//! Starts from every critical task without in-project dependencies and walks
//! forward over tight edges (successor starts exactly when the task finishes)
//! into critical successors. A chain is complete when its last task has no
//! tight critical successor and finishes on the project finish date. The walk
//! is an explicit-stack DFS; starts and successors are visited in project
//! order, so the first complete chain is the same for the same input.

use chrono::NaiveDate;

use crate::interner::TaskId;
use crate::{log_pass, log_trace};

use super::graph::ProjectGraph;
use super::types::{CriticalPath, TaskTiming};

pub(crate) fn critical_path(
    graph: &ProjectGraph<'_>,
    timings: &[TaskTiming],
    project_finish: NaiveDate,
    max_paths: usize,
    verbosity: u8,
) -> CriticalPath {
    let max_paths = max_paths.max(1);
    let critical: Vec<bool> = timings.iter().map(TaskTiming::is_critical).collect();
    if !critical.iter().any(|&c| c) {
        log_pass!(verbosity, "critical path: no zero-slack tasks");
        return CriticalPath::NoCriticalTasks;
    }

    let is_step = |from: TaskId, to: TaskId| {
        critical[to as usize]
            && timings[to as usize].early_start == timings[from as usize].early_finish
    };

    let mut paths: Vec<Vec<TaskId>> = Vec::new();
    // Tasks proven not to reach a complete chain.
    let mut dead = vec![false; graph.len()];
    // DFS frames: (task, next successor position, paths found before entering)
    let mut stack: Vec<(TaskId, usize, usize)> = Vec::new();

    let starts = graph
        .ids()
        .filter(|&id| critical[id as usize] && graph.dependencies(id).is_empty());

    'starts: for start in starts {
        log_trace!(verbosity, "path: start {}", graph.title(start));
        stack.push((start, 0, paths.len()));

        while let Some(frame) = stack.last_mut() {
            let (task, next, found_before) = *frame;
            let successors = graph.successors(task);

            let step = successors[next..]
                .iter()
                .position(|&succ| !dead[succ as usize] && is_step(task, succ));
            if let Some(offset) = step {
                frame.1 = next + offset + 1;
                let succ = successors[next + offset];
                stack.push((succ, 0, paths.len()));
                continue;
            }

            // Nothing left to step into; a chain end has no steps at all.
            let is_end = !successors.iter().any(|&succ| is_step(task, succ));
            if is_end && timings[task as usize].early_finish == project_finish {
                let path: Vec<TaskId> = stack.iter().map(|&(id, _, _)| id).collect();
                log_trace!(verbosity, "path: complete, {} tasks", path.len());
                paths.push(path);
                if paths.len() >= max_paths {
                    stack.clear();
                    break 'starts;
                }
            }

            stack.pop();
            if paths.len() == found_before {
                dead[task as usize] = true;
            }
        }
    }

    let mut titled = paths
        .into_iter()
        .map(|path| path.iter().map(|&id| graph.title(id).to_string()).collect::<Vec<_>>());
    match titled.next() {
        Some(path) => {
            let alternatives: Vec<Vec<String>> = titled.collect();
            log_pass!(
                verbosity,
                "critical path: {} ({} alternatives)",
                path.join(" -> "),
                alternatives.len()
            );
            CriticalPath::Found { path, alternatives }
        }
        None => {
            log_pass!(verbosity, "critical path: no complete chain from any start task");
            CriticalPath::NoCompletePath
        }
    }
}
