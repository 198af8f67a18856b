use leptos::prelude::*;
use std::rc::Rc;
use crate::features::kanban::components::{KanbanBoard, TaskColumn, TaskForm};
use crate::features::kanban::hooks::use_task_dialog;
use crate::features::kanban::partition::partition_by_status;
use crate::features::kanban::services::create_task_handler;
use crate::features::kanban::store::TaskStore;
use crate::models::{Task, TaskStatus};

#[component]
pub fn KanbanPage() -> impl IntoView {
    // Screen-lifetime state: the store itself plus which task (if any)
    // the move/delete dialog is showing. The store signal is the single
    // owner of the task collection; everything below it sees snapshots.
    let store = RwSignal::new(TaskStore::with_seed_tasks());
    let (selected_task, set_selected_task) = signal::<Option<u32>>(None);

    let create_task = create_task_handler(store);
    let dialog = use_task_dialog(store, selected_task, set_selected_task);

    view! {
        <div class="kanban-screen">
            <TaskForm on_create=create_task />
            <KanbanBoard>
                {move || {
                    let columns = store.with(|s| partition_by_status(s.tasks()));
                    TaskStatus::all()
                        .into_iter()
                        .map(|status| {
                            let tasks = columns.for_status(status).to_vec();
                            let on_select = Rc::new(move |task: Task| {
                                set_selected_task.set(Some(task.id));
                            }) as Rc<dyn Fn(Task) + 'static>;
                            view! { <TaskColumn status=status tasks=tasks on_select=on_select /> }
                        })
                        .collect::<Vec<_>>()
                }}
            </KanbanBoard>
            {dialog}
        </div>
    }
}
