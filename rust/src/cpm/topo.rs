//! Topological ordering with cycle detection.
//!
//! Iterative depth-first search with three-color marking. A task is emitted
//! only after all of its in-project dependencies, so the result lists every
//! dependency before its dependents. Roots are taken in project order and
//! dependencies in the order each task lists them, which makes the output
//! deterministic for a given input order.

use crate::error::{Result, ScheduleError};
use crate::interner::TaskId;
use crate::log_trace;

use super::graph::ProjectGraph;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
    Unvisited,
    InProgress,
    Done,
}

pub(crate) fn sort(graph: &ProjectGraph<'_>, verbosity: u8) -> Result<Vec<TaskId>> {
    let n = graph.len();
    let mut marks = vec![Mark::Unvisited; n];
    let mut order: Vec<TaskId> = Vec::with_capacity(n);
    // DFS frames: (task, position of the next dependency to visit)
    let mut stack: Vec<(TaskId, usize)> = Vec::new();

    for root in graph.ids() {
        if marks[root as usize] != Mark::Unvisited {
            continue;
        }
        log_trace!(verbosity, "sort: root {}", graph.title(root));
        marks[root as usize] = Mark::InProgress;
        stack.push((root, 0));

        while let Some(frame) = stack.last_mut() {
            let (task, next) = *frame;
            let deps = graph.dependencies(task);

            if next < deps.len() {
                frame.1 += 1;
                let dep = deps[next];
                match marks[dep as usize] {
                    Mark::Unvisited => {
                        marks[dep as usize] = Mark::InProgress;
                        stack.push((dep, 0));
                    }
                    Mark::InProgress => return Err(cycle_error(graph, &stack, dep)),
                    Mark::Done => {}
                }
            } else {
                marks[task as usize] = Mark::Done;
                order.push(task);
                stack.pop();
                log_trace!(verbosity, "sort: emit {}", graph.title(task));
            }
        }
    }

    Ok(order)
}

/// Build the cycle from the DFS stack: the frames from `repeated` to the top,
/// closed by `repeated` again.
fn cycle_error(
    graph: &ProjectGraph<'_>,
    stack: &[(TaskId, usize)],
    repeated: TaskId,
) -> ScheduleError {
    let from = stack
        .iter()
        .position(|&(task, _)| task == repeated)
        .unwrap_or(0);
    let cycle = stack[from..]
        .iter()
        .map(|&(task, _)| graph.title(task).to_string())
        .chain(std::iter::once(graph.title(repeated).to_string()))
        .collect();
    ScheduleError::CycleDetected { cycle }
}
