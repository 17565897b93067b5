//! Header Component
//!
//! Page title and list summary.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let store = use_app_store();

    let summary = move || {
        store.list().with(|list| {
            let done = list.todos().iter().filter(|todo| todo.is_completed).count();
            format!("{} todos, {} done", list.len(), done)
        })
    };

    view! {
        <header class="page-header">
            <h1>"全家動員計劃 to-do list"</h1>
            <p class="todo-count">{summary}</p>
        </header>
    }
}
