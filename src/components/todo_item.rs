//! Todo Item Component
//!
//! One row: completion checkbox, text, assignee selector, delete button.

use leptos::prelude::*;

use crate::components::AssigneeSelect;
use crate::models::TodoRecord;
use crate::store::{store_assign_todo, store_delete_todo, store_toggle_todo, use_app_store};

#[component]
pub fn TodoItemRow(todo: TodoRecord, has_border: bool) -> impl IntoView {
    let store = use_app_store();

    let id = StoredValue::new(todo.id.clone());
    let completed = todo.is_completed;
    let assignee = todo.assignee().unwrap_or_default().to_string();

    let mut row_class = String::from("todo-row");
    if completed { row_class.push_str(" completed"); }
    if has_border { row_class.push_str(" bordered"); }

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| id.with_value(|id| store_toggle_todo(&store, id))
            />

            <span class="todo-text">{todo.text}</span>

            // Empty selection clears the assignee
            <AssigneeSelect
                value=Signal::derive(move || assignee.clone())
                placeholder="unassigned"
                on_change=move |person: String| {
                    id.with_value(|id| store_assign_todo(&store, id, Some(person.as_str())))
                }
            />

            <button
                class="delete-btn"
                on:click=move |_| id.with_value(|id| store_delete_todo(&store, id))
            >
                "×"
            </button>
        </div>
    }
}
