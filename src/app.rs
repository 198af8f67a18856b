use leptos::prelude::*;
use crate::features::kanban::KanbanPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <KanbanPage />
        </main>
    }
}
