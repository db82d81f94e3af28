//! Property-based tests for schedule invariants.
//!
//! Generated projects are DAGs (tasks only depend on lower-numbered tasks),
//! optionally presented in reverse so dependents come before dependencies.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use std::collections::HashMap;
use tasktrack_cpm::{
    calculate_early_times, compute_schedule, topological_order, CpmConfig, CriticalPath, Project,
    ScheduleError, Task,
};

// =============================================================================
// Strategies
// =============================================================================

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
}

fn build_project(durations: &[u32], deps: &[Vec<usize>], reverse: bool) -> Project {
    let mut tasks: Vec<Task> = durations
        .iter()
        .zip(deps)
        .enumerate()
        .map(|(i, (&duration, deps))| {
            Task::new(format!("t{i}"), duration)
                .unwrap()
                .with_dependencies(deps.iter().map(|d| format!("t{d}")))
        })
        .collect();
    if reverse {
        tasks.reverse();
    }
    Project::new("generated", start_date(), tasks)
}

fn project_strategy(max_tasks: usize) -> impl Strategy<Value = Project> {
    (1..=max_tasks)
        .prop_flat_map(|n| {
            let durations = proptest::collection::vec(1u32..=10, n);
            let deps: Vec<BoxedStrategy<Vec<usize>>> = (0..n)
                .map(|i| {
                    if i == 0 {
                        Just(Vec::new()).boxed()
                    } else {
                        proptest::collection::vec(0..i, 0..=i.min(3)).boxed()
                    }
                })
                .collect();
            (durations, deps, any::<bool>())
        })
        .prop_map(|(durations, deps, reverse)| build_project(&durations, &deps, reverse))
}

fn in_project_deps<'a>(project: &'a Project, task: &'a Task) -> impl Iterator<Item = &'a Task> {
    task.dependencies
        .iter()
        .filter_map(move |dep| project.task(dep))
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn topological_order_puts_dependencies_first(project in project_strategy(15)) {
        let order = topological_order(&project.tasks, &CpmConfig::default()).unwrap();
        prop_assert_eq!(order.len(), project.tasks.len());

        let position: HashMap<&str, usize> = order
            .iter()
            .enumerate()
            .map(|(i, t)| (t.title.as_str(), i))
            .collect();
        for task in &project.tasks {
            for dep in in_project_deps(&project, task) {
                prop_assert!(position[dep.title.as_str()] < position[task.title.as_str()]);
            }
        }
    }

    #[test]
    fn forward_pass_respects_precedence(project in project_strategy(15)) {
        let early = calculate_early_times(&project, &CpmConfig::default()).unwrap();

        for task in &project.tasks {
            let times = early[&task.title];
            prop_assert_eq!(
                times.early_finish,
                times.early_start + Days::new(u64::from(task.duration_days))
            );
            let mut deps = in_project_deps(&project, task).peekable();
            if deps.peek().is_none() {
                prop_assert_eq!(times.early_start, project.start_date);
            }
            for dep in deps {
                prop_assert!(early[&dep.title].early_finish <= times.early_start);
            }
        }
    }

    #[test]
    fn late_times_are_consistent(project in project_strategy(15)) {
        let schedule = compute_schedule(&project, &CpmConfig::default()).unwrap();

        for task in &project.tasks {
            let timing = schedule.timings[&task.title];
            prop_assert!(timing.slack_days() >= 0);
            prop_assert_eq!(
                (timing.late_finish - timing.late_start).num_days(),
                i64::from(task.duration_days)
            );
            prop_assert!(timing.late_finish <= schedule.project_finish);
            prop_assert_eq!(
                timing.is_critical(),
                schedule.critical_tasks.contains(&task.title)
            );
        }
    }

    #[test]
    fn recomputation_is_idempotent(project in project_strategy(12)) {
        let config = CpmConfig::default();
        let first = compute_schedule(&project, &config).unwrap();
        let second = compute_schedule(&project, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn critical_path_spans_the_project(project in project_strategy(12)) {
        let schedule = compute_schedule(&project, &CpmConfig::default()).unwrap();
        let CriticalPath::Found { path, alternatives } = &schedule.critical_path else {
            return Err(TestCaseError::fail("expected a critical path"));
        };

        for chain in std::iter::once(path).chain(alternatives) {
            let first = &schedule.timings[&chain[0]];
            prop_assert_eq!(first.early_start, project.start_date);

            let mut total_days = 0i64;
            for pair in chain.windows(2) {
                let (prev, next) = (&pair[0], &pair[1]);
                let next_task = project.task(next).unwrap();
                prop_assert!(next_task.dependencies.contains(prev));
                prop_assert_eq!(
                    schedule.timings[next].early_start,
                    schedule.timings[prev].early_finish
                );
            }
            for title in chain {
                prop_assert!(schedule.timings[title].is_critical());
                total_days += i64::from(project.task(title).unwrap().duration_days);
            }
            prop_assert_eq!(total_days, schedule.project_duration_days());
        }
    }

    #[test]
    fn injected_cycle_is_detected(project in project_strategy(12)) {
        let mut project = project;
        let n = project.tasks.len();
        let first = project.tasks[0].title.clone();
        let last = project.tasks[n - 1].title.clone();
        project.tasks[0].dependencies.push(last);
        project.tasks[n - 1].dependencies.push(first);

        match compute_schedule(&project, &CpmConfig::default()) {
            Err(ScheduleError::CycleDetected { cycle }) => {
                prop_assert!(cycle.len() >= 2);
                prop_assert_eq!(cycle.first(), cycle.last());
            }
            other => prop_assert!(false, "expected cycle, got {:?}", other),
        }
    }
}
