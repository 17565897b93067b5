//! New Todo Form Component
//!
//! Draft text input, party selector and add button.

use leptos::prelude::*;

use crate::components::AssigneeSelect;
use crate::store::{
    store_set_draft_assignee, store_set_draft_text, store_submit_draft, use_app_store,
    AppStateStoreFields,
};

/// Form for creating new todos; Enter in the text field submits
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let store = use_app_store();

    let draft_text = move || store.list().with(|list| list.draft_text().to_string());
    let draft_assignee =
        Signal::derive(move || store.list().with(|list| list.draft_assignee().to_string()));

    // Rejected drafts stay in the inputs for correction
    let add_todo = move || {
        if let Some(todo) = store_submit_draft(&store) {
            log::debug!("[FORM] created {} for {:?}", todo.id, todo.assigned_to);
        }
    };

    view! {
        <div class="new-todo-form">
            <input
                type="text"
                class="new-todo-input"
                prop:value=draft_text
                on:input=move |ev| store_set_draft_text(&store, event_target_value(&ev))
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        add_todo();
                    }
                }
            />
            <AssigneeSelect
                value=draft_assignee
                placeholder="Select a party"
                on_change=move |party| store_set_draft_assignee(&store, party)
            />
            <button class="add-todo-btn" on:click=move |_| add_todo()>"Add Todo"</button>
        </div>
    }
}
