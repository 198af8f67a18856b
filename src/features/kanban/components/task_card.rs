use leptos::prelude::*;
use std::rc::Rc;
use crate::models::Task;

#[component]
pub fn TaskCard(task: Task, on_select: Rc<dyn Fn(Task) + 'static>) -> impl IntoView {
    let task_for_click = task.clone();
    view! {
        <div
            class=format!("task-card clickable status-{}", task.status.css_class())
            on:click=move |_| {
                on_select(task_for_click.clone());
            }
        >
            <h4 class="task-title">{task.title.clone()}</h4>
            <p class="task-deadline">{format!("Deadline: {}", task.deadline)}</p>
        </div>
    }
}
