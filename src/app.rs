//! Family Todo App
//!
//! Root component: owns the store and exposes it to the assistant bridge.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::bridge;
use crate::components::{Header, NewTodoForm, TodoList};
use crate::config;
use crate::state::TodoListState;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState { list: TodoListState::new() });
    provide_context(store);

    let config = config::load();
    if let Err(e) = bridge::install(store, &config) {
        log::error!("[APP] assistant bridge unavailable: {:?}", e);
    }

    view! {
        <div class="app-layout">
            <main class="main-content">
                <Header />
                <NewTodoForm />
                <TodoList />
            </main>
        </div>
    }
}
