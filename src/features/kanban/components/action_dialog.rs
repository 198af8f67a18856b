use leptos::prelude::*;
use std::rc::Rc;
use crate::models::{Task, TaskStatus};

/// What the user picked in the five-way task dialog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TaskAction {
    MoveTo(TaskStatus),
    Delete,
    Cancel,
}

#[component]
pub fn ActionDialog(
    #[prop(into)] task: Task,
    on_action: Rc<dyn Fn(TaskAction) + 'static>,
) -> impl IntoView {
    let dismiss = {
        let on_action = on_action.clone();
        move |_| on_action(TaskAction::Cancel)
    };

    view! {
        <div class="dialog-overlay" on:click=dismiss>
            <div class="dialog" on:click=move |e| e.stop_propagation()>
                <h3 class="dialog-title">"Move Task"</h3>
                <p class="dialog-message">
                    "Select the status you want to move the task to or delete the task:"
                </p>
                <p class="dialog-task-title">{task.title.clone()}</p>
                {TaskStatus::all()
                    .into_iter()
                    .map(|status| {
                        let on_action = on_action.clone();
                        view! {
                            <button
                                class="dialog-option"
                                on:click=move |_| on_action(TaskAction::MoveTo(status))
                            >
                                {status.as_str()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
                <button
                    class="dialog-option destructive"
                    on:click={
                        let on_action = on_action.clone();
                        move |_| on_action(TaskAction::Delete)
                    }
                >
                    "Delete Task"
                </button>
                <button
                    class="dialog-option cancel"
                    on:click={
                        let on_action = on_action.clone();
                        move |_| on_action(TaskAction::Cancel)
                    }
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
