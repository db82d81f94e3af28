//! Backward pass: latest start and finish dates.

use chrono::{Days, NaiveDate};

use crate::error::{Result, ScheduleError};
use crate::interner::TaskId;
use crate::{log_pass, log_task};

use super::graph::ProjectGraph;
use super::types::{EarlyTimes, TaskTiming};

/// Compute late times for every task from the forward-pass results.
///
/// Every task is first anchored on the project finish (the latest early
/// finish). Walking `order` in reverse, a task with in-project successors must
/// finish by the earliest late start among them. Returns the project finish
/// and the full timings, indexed by task id.
pub(crate) fn late_times(
    graph: &ProjectGraph<'_>,
    order: &[TaskId],
    early: &[EarlyTimes],
    verbosity: u8,
) -> Result<(NaiveDate, Vec<TaskTiming>)> {
    if graph.is_empty() {
        return Err(ScheduleError::NoTasksDefined);
    }
    let project_finish = early
        .iter()
        .map(|t| t.early_finish)
        .max()
        .ok_or(ScheduleError::NoTasksDefined)?;

    let mut timings: Vec<TaskTiming> = graph
        .ids()
        .map(|id| -> Result<TaskTiming> {
            let e = early[id as usize];
            Ok(TaskTiming {
                early_start: e.early_start,
                early_finish: e.early_finish,
                late_start: late_start(graph, id, project_finish)?,
                late_finish: project_finish,
            })
        })
        .collect::<Result<_>>()?;

    for &id in order.iter().rev() {
        let Some(late_finish) = graph
            .successors(id)
            .iter()
            .map(|&succ| timings[succ as usize].late_start)
            .min()
        else {
            continue;
        };
        let start = late_start(graph, id, late_finish)?;
        let timing = &mut timings[id as usize];
        timing.late_finish = late_finish;
        timing.late_start = start;
        log_task!(
            verbosity,
            "backward: {} ls={} lf={} slack={}",
            graph.title(id),
            timing.late_start,
            timing.late_finish,
            timing.slack_days()
        );
    }

    log_pass!(
        verbosity,
        "backward pass: {} tasks, project finish {}",
        order.len(),
        project_finish
    );
    Ok((project_finish, timings))
}

/// Latest start for a task that must finish by `late_finish`.
fn late_start(graph: &ProjectGraph<'_>, id: TaskId, late_finish: NaiveDate) -> Result<NaiveDate> {
    late_finish
        .checked_sub_days(Days::new(u64::from(graph.task(id).duration_days)))
        .ok_or_else(|| ScheduleError::DateOutOfRange {
            title: graph.title(id).to_string(),
        })
}
