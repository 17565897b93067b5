//! Global Application State Store
//!
//! Uses Leptos reactive_stores; every list mutation goes through
//! [`TodoListState`] so the UI and the assistant share one code path.

use leptos::prelude::*;
use reactive_stores::Store;
use serde_json::Value;

use crate::actions::{self, ActionError, ReadableContext};
use crate::models::TodoRecord;
use crate::state::TodoListState;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Todo list and create-form drafts
    pub list: TodoListState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_draft_text(store: &AppStore, text: String) {
    store.list().write().set_draft_text(text);
}

pub fn store_set_draft_assignee(store: &AppStore, assignee: String) {
    store.list().write().set_draft_assignee(assignee);
}

/// Create a todo from the drafts; `None` when the drafts were rejected
pub fn store_submit_draft(store: &AppStore) -> Option<TodoRecord> {
    store.list().write().submit_draft()
}

pub fn store_toggle_todo(store: &AppStore, id: &str) {
    store.list().write().toggle_complete(id);
}

pub fn store_delete_todo(store: &AppStore, id: &str) {
    store.list().write().delete(id);
}

pub fn store_assign_todo(store: &AppStore, id: &str, person: Option<&str>) {
    store.list().write().assign(id, person);
}

/// Run an assistant action against the store
pub fn store_dispatch(store: &AppStore, name: &str, args: Value) -> Result<(), ActionError> {
    actions::dispatch(&mut store.list().write(), name, args)
}

/// Snapshot for the assistant; does not subscribe the caller
pub fn store_readable(store: &AppStore, description: &str) -> ReadableContext {
    store.list().with_untracked(|list| ReadableContext::capture(description, list))
}
