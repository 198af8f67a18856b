use crate::models::{Task, TaskStatus};

/// Tasks split into the three fixed board columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoardColumns {
    pub todo: Vec<Task>,
    pub progress: Vec<Task>,
    pub done: Vec<Task>,
}

impl BoardColumns {
    pub fn for_status(&self, status: TaskStatus) -> &[Task] {
        match status {
            TaskStatus::ToDo => &self.todo,
            TaskStatus::InProgress => &self.progress,
            TaskStatus::Done => &self.done,
        }
    }
}

/// Split tasks into per-status columns, keeping insertion order within each.
///
/// Pure derivation; recomputed from the store on every board render.
pub fn partition_by_status(tasks: &[Task]) -> BoardColumns {
    let mut columns = BoardColumns::default();
    for task in tasks {
        match task.status {
            TaskStatus::ToDo => columns.todo.push(task.clone()),
            TaskStatus::InProgress => columns.progress.push(task.clone()),
            TaskStatus::Done => columns.done.push(task.clone()),
        }
    }
    columns
}
