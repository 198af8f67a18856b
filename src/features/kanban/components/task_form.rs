use leptos::prelude::*;
use leptos::ev;

/// Presence check for the two draft fields. An empty-string test, not a
/// trim; whitespace input is accepted and stored verbatim.
fn can_add(title: &str, deadline: &str) -> bool {
    !title.is_empty() && !deadline.is_empty()
}

#[component]
pub fn TaskForm(on_create: Box<dyn Fn(String, String) + 'static>) -> impl IntoView {
    let (title, set_title) = signal(String::new());
    let (deadline, set_deadline) = signal(String::new());

    let handle_submit = move |ev: ev::SubmitEvent| {
        // Prevent the default form submission behavior (page reload)
        ev.prevent_default();

        let draft_title = title.get_untracked();
        let draft_deadline = deadline.get_untracked();
        if !can_add(&draft_title, &draft_deadline) {
            return;
        }

        on_create(draft_title, draft_deadline);

        // Reset both drafts after a successful add
        set_title.set(String::new());
        set_deadline.set(String::new());
    };

    view! {
        <form class="task-form" on:submit=handle_submit>
            <input
                type="text"
                class="task-input"
                placeholder="Enter new task"
                on:input=move |ev| set_title.set(event_target_value(&ev))
                prop:value=move || title.get()
            />
            <input
                type="text"
                class="task-input"
                placeholder="Enter deadline (YYYY-MM-DD)"
                on:input=move |ev| set_deadline.set(event_target_value(&ev))
                prop:value=move || deadline.get()
            />
            <button
                type="submit"
                class="btn-primary add-task-btn"
                prop:disabled=move || !can_add(&title.get(), &deadline.get())
            >
                "Add Task"
            </button>
        </form>
    }
}
