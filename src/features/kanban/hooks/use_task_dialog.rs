use leptos::prelude::*;
use std::rc::Rc;
use crate::features::kanban::components::{ActionDialog, TaskAction};
use crate::features::kanban::services::{delete_task, update_task_status};
use crate::features::kanban::store::TaskStore;

// Hook for managing the move/delete dialog of the currently selected task
pub fn use_task_dialog(
    store: RwSignal<TaskStore>,
    selected_task: ReadSignal<Option<u32>>,
    set_selected_task: WriteSignal<Option<u32>>,
) -> impl IntoView {
    move || {
        if let Some(task_id) = selected_task.get() {
            // Re-resolve the id against the store; a stale id just
            // dismisses the dialog instead of rendering a ghost task.
            let maybe_task = store.with(|s| s.task(task_id).cloned());
            if let Some(task) = maybe_task {
                let on_action = Rc::new(move |action: TaskAction| {
                    match action {
                        TaskAction::MoveTo(status) => update_task_status(task_id, status, store),
                        TaskAction::Delete => delete_task(task_id, store),
                        TaskAction::Cancel => {}
                    }
                    set_selected_task.set(None);
                }) as Rc<dyn Fn(TaskAction) + 'static>;

                view! { <ActionDialog task=task on_action=on_action /> }.into_any()
            } else {
                view! {}.into_any()
            }
        } else {
            view! {}.into_any()
        }
    }
}
