//! Title interning for the arena graph.
//!
//! Task titles are mapped to dense integer ids in project order, so id `i` is
//! also the position of the task in `Project::tasks`.

use rustc_hash::FxHashMap;

use crate::error::{Result, ScheduleError};

/// Interned task id (u32 for compact adjacency lists). A project therefore
/// holds at most `u32::MAX` tasks.
pub type TaskId = u32;

/// Bidirectional title <-> id map.
#[derive(Debug, Clone)]
pub struct TitleIndex {
    to_id: FxHashMap<String, TaskId>,
    titles: Vec<String>,
}

impl TitleIndex {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            titles: Vec::with_capacity(capacity),
        }
    }

    /// Intern a title. Titles are the primary key of a task, so a repeated
    /// title is a `DuplicateTask` error.
    pub fn insert(&mut self, title: &str) -> Result<TaskId> {
        if self.to_id.contains_key(title) {
            return Err(ScheduleError::DuplicateTask(title.to_string()));
        }
        let id = next_id(self.titles.len())?;
        self.titles.push(title.to_string());
        self.to_id.insert(title.to_string(), id);
        Ok(id)
    }

    #[inline]
    pub fn get(&self, title: &str) -> Option<TaskId> {
        self.to_id.get(title).copied()
    }

    /// Title for an id. Ids handed out by this index always resolve.
    #[inline]
    pub fn title(&self, id: TaskId) -> &str {
        &self.titles[id as usize]
    }
}

/// Id for the entry following `count` interned titles. `TaskId::MAX` is never
/// handed out, so the task count itself always fits in a `TaskId`.
fn next_id(count: usize) -> Result<TaskId> {
    TaskId::try_from(count)
        .ok()
        .filter(|&id| id < TaskId::MAX)
        .ok_or(ScheduleError::TooManyTasks {
            count: count.saturating_add(1),
        })
}
