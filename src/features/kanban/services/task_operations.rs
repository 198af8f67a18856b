use leptos::prelude::*;
use crate::features::kanban::store::TaskStore;
use crate::models::TaskStatus;

// Build the add handler for the task form
pub fn create_task_handler(store: RwSignal<TaskStore>) -> Box<dyn Fn(String, String) + 'static> {
    Box::new(move |title: String, deadline: String| {
        // Presence check only; whitespace and malformed deadlines are
        // stored verbatim.
        if title.is_empty() || deadline.is_empty() {
            return;
        }
        store.update(|s| {
            s.add_task(title, deadline);
        });
    })
}

// Reassign a task's status in place
pub fn update_task_status(task_id: u32, new_status: TaskStatus, store: RwSignal<TaskStore>) {
    let old_status = store.with_untracked(|s| s.task(task_id).map(|t| t.status));
    web_sys::console::log_1(
        &format!(
            "update_task_status: task_id={}, {:?} -> {:?}",
            task_id, old_status, new_status
        )
        .into(),
    );

    store.update(|s| s.move_task(task_id, new_status));
}

// Delete a task
pub fn delete_task(task_id: u32, store: RwSignal<TaskStore>) {
    web_sys::console::log_1(&format!("delete_task: task_id={}", task_id).into());

    store.update(|s| s.delete_task(task_id));
}
