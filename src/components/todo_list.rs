//! Todo List Component
//!
//! Renders the collection in insertion order; hidden while empty.

use leptos::prelude::*;

use crate::components::TodoItemRow;
use crate::models::TodoRecord;
use crate::store::{use_app_store, AppStateStoreFields};

/// Pair each todo with whether it gets a bottom border (all but the last)
pub fn rows_with_borders(todos: &[TodoRecord]) -> Vec<(TodoRecord, bool)> {
    let last = todos.len().saturating_sub(1);
    todos
        .iter()
        .enumerate()
        .map(|(index, todo)| (todo.clone(), index != last))
        .collect()
}

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_app_store();

    let rows = move || store.list().with(|list| rows_with_borders(list.todos()));
    let has_todos = move || store.list().with(|list| !list.is_empty());

    view! {
        <Show when=has_todos>
            <div class="todo-list">
                <For
                    each=rows
                    // Every displayed field is part of the key so edits re-render the row
                    key=|(todo, has_border)| (todo.clone(), *has_border)
                    children=move |(todo, has_border)| {
                        view! { <TodoItemRow todo=todo has_border=has_border /> }
                    }
                />
            </div>
        </Show>
    }
}
