//! Arena form of a project's dependency graph.

use crate::error::Result;
use crate::interner::{TaskId, TitleIndex};
use crate::models::Task;

/// Project tasks lowered to integer ids with adjacency lists restricted to
/// in-project edges. Id `i` is `tasks[i]`.
pub(crate) struct ProjectGraph<'a> {
    tasks: &'a [Task],
    index: TitleIndex,
    /// Tasks each task depends on, in the order the task lists them.
    dependencies: Vec<Vec<TaskId>>,
    /// Tasks depending on each task, in project order.
    successors: Vec<Vec<TaskId>>,
    /// Edges whose dependency is not a task of this project.
    foreign: Vec<(TaskId, &'a str)>,
}

impl<'a> ProjectGraph<'a> {
    /// Build the graph. Fails on duplicate titles, which would make
    /// dependency edges ambiguous, and on projects too large for `TaskId`.
    pub fn build(tasks: &'a [Task]) -> Result<Self> {
        let n = tasks.len();
        let mut index = TitleIndex::with_capacity(n);
        for task in tasks {
            index.insert(&task.title)?;
        }

        let mut dependencies: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut successors: Vec<Vec<TaskId>> = vec![Vec::new(); n];
        let mut foreign = Vec::new();

        for (i, task) in tasks.iter().enumerate() {
            let id = i as TaskId;
            for dep in &task.dependencies {
                match index.get(dep) {
                    Some(dep_id) => {
                        if dependencies[i].contains(&dep_id) {
                            continue;
                        }
                        dependencies[i].push(dep_id);
                        successors[dep_id as usize].push(id);
                    }
                    None => foreign.push((id, dep.as_str())),
                }
            }
        }

        Ok(Self {
            tasks,
            index,
            dependencies,
            successors,
            foreign,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TaskId> {
        0..self.tasks.len() as TaskId
    }

    #[inline]
    pub fn task(&self, id: TaskId) -> &'a Task {
        &self.tasks[id as usize]
    }

    #[inline]
    pub fn title(&self, id: TaskId) -> &str {
        self.index.title(id)
    }

    #[inline]
    pub fn dependencies(&self, id: TaskId) -> &[TaskId] {
        &self.dependencies[id as usize]
    }

    #[inline]
    pub fn successors(&self, id: TaskId) -> &[TaskId] {
        &self.successors[id as usize]
    }

    pub fn foreign_edges(&self) -> &[(TaskId, &'a str)] {
        &self.foreign
    }
}
