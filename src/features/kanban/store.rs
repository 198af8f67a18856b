use crate::models::{Task, TaskStatus};

/// Ordered task collection for the board screen.
///
/// Owns the task list and the id counter. Ids come from a strictly
/// monotonic counter, so deleting a task never frees its id for reuse.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u32,
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// The four demo tasks the screen starts with.
    pub fn with_seed_tasks() -> Self {
        let mut store = Self::new();
        store.add_task("Task 1".to_string(), "2024-04-30".to_string());
        store.add_task("Task 2".to_string(), "2024-05-05".to_string());
        let third = store.add_task("Task 3".to_string(), "2024-04-25".to_string());
        let fourth = store.add_task("Task 4".to_string(), "2024-04-20".to_string());
        store.move_task(third.id, TaskStatus::InProgress);
        store.move_task(fourth.id, TaskStatus::Done);
        store
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Append a new task in the ToDo column and return a copy of it.
    pub fn add_task(&mut self, title: String, deadline: String) -> Task {
        let task = Task::new(self.next_id, title, deadline);
        self.next_id += 1;
        self.tasks.push(task.clone());
        task
    }

    /// Reassign the status of the matching task. Unknown ids are a no-op.
    pub fn move_task(&mut self, id: u32, new_status: TaskStatus) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.update_status(new_status);
        }
    }

    /// Remove the matching task. Unknown ids are a no-op.
    pub fn delete_task(&mut self, id: u32) {
        self.tasks.retain(|t| t.id != id);
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::TaskStore;
    use crate::models::TaskStatus;

    #[test]
    fn add_task_appends_with_todo_status() {
        let mut store = TaskStore::new();
        let task = store.add_task("Buy milk".to_string(), "2024-06-01".to_string());
        assert_eq!(task.id, 1);
        assert_eq!(task.status, TaskStatus::ToDo);
        assert_eq!(task.title, "Buy milk");
        assert_eq!(task.deadline, "2024-06-01");
        assert_eq!(store.tasks(), &[task]);
    }

    #[test]
    fn add_task_appends_after_existing_tasks() {
        let mut store = TaskStore::with_seed_tasks();
        let task = store.add_task("Buy milk".to_string(), "2024-06-01".to_string());
        assert_eq!(task.id, 5);
        assert_eq!(store.tasks().last(), Some(&task));
        assert_eq!(store.tasks().len(), 5);
    }

    #[test]
    fn ids_are_never_reused_after_a_delete() {
        let mut store = TaskStore::new();
        store.add_task("first".to_string(), "2024-01-01".to_string());
        let second = store.add_task("second".to_string(), "2024-01-02".to_string());
        store.delete_task(second.id);

        let third = store.add_task("third".to_string(), "2024-01-03".to_string());
        assert_eq!(third.id, 3);
        assert!(store.task(second.id).is_none());
    }

    #[test]
    fn move_task_changes_only_the_target() {
        let mut store = TaskStore::with_seed_tasks();
        let before: Vec<_> = store.tasks().to_vec();

        store.move_task(3, TaskStatus::Done);

        for (old, new) in before.iter().zip(store.tasks()) {
            if old.id == 3 {
                assert_eq!(new.status, TaskStatus::Done);
                assert_eq!(new.title, old.title);
                assert_eq!(new.deadline, old.deadline);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn move_task_to_its_current_status_changes_nothing() {
        let mut store = TaskStore::with_seed_tasks();
        let before = store.clone();
        store.move_task(1, TaskStatus::ToDo);
        assert_eq!(store, before);
    }

    #[test]
    fn move_task_with_unknown_id_is_a_noop() {
        let mut store = TaskStore::with_seed_tasks();
        let before = store.clone();
        store.move_task(99, TaskStatus::Done);
        assert_eq!(store, before);
    }

    #[test]
    fn delete_task_removes_it_permanently() {
        let mut store = TaskStore::with_seed_tasks();
        store.delete_task(2);
        assert!(store.task(2).is_none());
        assert_eq!(store.tasks().len(), 3);

        // Further operations on the deleted id fall through silently.
        store.move_task(2, TaskStatus::Done);
        store.delete_task(2);
        assert_eq!(store.tasks().len(), 3);
    }

    #[test]
    fn seed_tasks_match_the_demo_board() {
        let store = TaskStore::with_seed_tasks();
        let ids: Vec<_> = store.tasks().iter().map(|t| t.id).collect();
        let statuses: Vec<_> = store.tasks().iter().map(|t| t.status).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(
            statuses,
            vec![
                TaskStatus::ToDo,
                TaskStatus::ToDo,
                TaskStatus::InProgress,
                TaskStatus::Done,
            ]
        );
        assert_eq!(store.task(1).unwrap().deadline, "2024-04-30");
        assert_eq!(store.task(4).unwrap().deadline, "2024-04-20");
    }
}
