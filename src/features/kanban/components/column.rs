use leptos::prelude::*;
use std::rc::Rc;
use crate::features::kanban::components::TaskCard;
use crate::models::{Task, TaskStatus};

#[component]
pub fn TaskColumn(
    status: TaskStatus,
    tasks: Vec<Task>,
    on_select: Rc<dyn Fn(Task) + 'static>,
) -> impl IntoView {
    let count = tasks.len();
    view! {
        <div class=format!("kanban-column status-{}", status.css_class())>
            <div class="column-header">
                <h3>{status.column_label()}</h3>
                <span class="task-count">{count}</span>
            </div>
            <div class="column-content">
                {tasks
                    .into_iter()
                    .map(|task| {
                        let on_select = on_select.clone();
                        view! { <TaskCard task=task on_select=on_select /> }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
