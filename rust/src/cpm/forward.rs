//! Forward pass: earliest start and finish dates.

use chrono::{Days, NaiveDate};

use crate::error::{Result, ScheduleError};
use crate::interner::TaskId;
use crate::{log_pass, log_task};

use super::graph::ProjectGraph;
use super::types::EarlyTimes;

/// Compute early times for every task, visiting tasks in `order`
/// (dependencies first).
///
/// A task without in-project dependencies starts on `start_date`; any other
/// task starts when its latest-finishing dependency finishes. A completed task
/// that carries a recorded schedule keeps its recorded early times, and those
/// recorded dates are what its dependents wait on. Returned vector is indexed
/// by task id.
///
/// Fails with `DateOutOfRange` when an early finish would run past the last
/// representable date.
pub(crate) fn early_times(
    graph: &ProjectGraph<'_>,
    order: &[TaskId],
    start_date: NaiveDate,
    verbosity: u8,
) -> Result<Vec<EarlyTimes>> {
    let mut times = vec![
        EarlyTimes {
            early_start: start_date,
            early_finish: start_date,
        };
        graph.len()
    ];
    let mut preserved = 0usize;

    for &id in order {
        let task = graph.task(id);

        if task.is_completed() {
            if let Some(recorded) = task.schedule {
                times[id as usize] = recorded.early();
                preserved += 1;
                log_task!(
                    verbosity,
                    "forward: {} completed, keeping {} .. {}",
                    task.title,
                    recorded.early_start,
                    recorded.early_finish
                );
                continue;
            }
        }

        let early_start = graph
            .dependencies(id)
            .iter()
            .map(|&dep| times[dep as usize].early_finish)
            .max()
            .unwrap_or(start_date);
        let early_finish = early_start
            .checked_add_days(Days::new(u64::from(task.duration_days)))
            .ok_or_else(|| ScheduleError::DateOutOfRange {
                title: task.title.clone(),
            })?;

        times[id as usize] = EarlyTimes {
            early_start,
            early_finish,
        };
        log_task!(
            verbosity,
            "forward: {} es={} ef={}",
            task.title,
            early_start,
            early_finish
        );
    }

    log_pass!(
        verbosity,
        "forward pass: {} tasks from {}, {} completed tasks preserved",
        order.len(),
        start_date,
        preserved
    );
    Ok(times)
}
