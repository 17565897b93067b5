//! Todo List State
//!
//! Owned, framework-free model of the list and the pending input fields.
//! Every operation is a synchronous transform; operations addressing an
//! unknown id leave the list untouched and report nothing.

use log::{debug, info};
use uuid::Uuid;

use crate::models::TodoRecord;

/// The todo collection (display order = insertion order) plus the draft
/// text and assignee typed into the create form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoListState {
    todos: Vec<TodoRecord>,
    draft_text: String,
    draft_assignee: String,
}

/// Fresh record id
pub fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}

impl TodoListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing collection (drafts empty)
    pub fn with_todos(todos: Vec<TodoRecord>) -> Self {
        Self {
            todos,
            ..Default::default()
        }
    }

    pub fn todos(&self) -> &[TodoRecord] {
        &self.todos
    }

    /// Owned copy of the collection, detached from later mutations
    pub fn snapshot(&self) -> Vec<TodoRecord> {
        self.todos.clone()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TodoRecord> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    // ========================
    // Draft fields
    // ========================

    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    pub fn draft_assignee(&self) -> &str {
        &self.draft_assignee
    }

    pub fn set_draft_text(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    pub fn set_draft_assignee(&mut self, assignee: impl Into<String>) {
        self.draft_assignee = assignee.into();
    }

    /// Create a record from the current draft fields
    pub fn submit_draft(&mut self) -> Option<TodoRecord> {
        let text = self.draft_text.clone();
        let assignee = self.draft_assignee.clone();
        self.create(&text, &assignee)
    }

    // ========================
    // Local mutations
    // ========================

    /// Append a new open record.
    ///
    /// Rejected (returns `None`, drafts kept) when `text` is blank after
    /// trimming or `assignee` is empty. On success the drafts are cleared.
    pub fn create(&mut self, text: &str, assignee: &str) -> Option<TodoRecord> {
        self.create_with(text, assignee, new_id)
    }

    fn create_with(
        &mut self,
        text: &str,
        assignee: &str,
        mut next_id: impl FnMut() -> String,
    ) -> Option<TodoRecord> {
        let text = text.trim();
        if text.is_empty() || assignee.is_empty() {
            debug!("create rejected: text={:?} assignee={:?}", text, assignee);
            return None;
        }

        let mut id = next_id();
        while self.contains(&id) {
            id = next_id();
        }

        let record = TodoRecord::new(id, text, Some(assignee.to_string()));
        self.todos.push(record.clone());
        self.draft_text.clear();
        self.draft_assignee.clear();
        Some(record)
    }

    /// Flip the completion flag of the record with `id`
    pub fn toggle_complete(&mut self, id: &str) {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => todo.is_completed = !todo.is_completed,
            None => debug!("toggle_complete: no todo {}", id),
        }
    }

    /// Remove the record with `id`, keeping the order of the rest
    pub fn delete(&mut self, id: &str) {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        if self.todos.len() == before {
            debug!("delete: no todo {}", id);
        }
    }

    /// Set or clear (`None` or empty name) the assignee of the record with `id`
    pub fn assign(&mut self, id: &str, person: Option<&str>) {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                todo.assigned_to = person.filter(|p| !p.is_empty()).map(str::to_string);
            }
            None => debug!("assign: no todo {}", id),
        }
    }

    // ========================
    // External (assistant) entry points
    // ========================

    /// Fold a batch of records into the list, one item at a time.
    ///
    /// An item whose id is already present replaces that record wholesale at
    /// its position; otherwise it is appended. Matching runs against the list
    /// as it evolves, so a repeated id within one batch replaces the copy
    /// appended earlier in the same batch. Content is not validated.
    pub fn apply_upsert_batch(&mut self, items: impl IntoIterator<Item = TodoRecord>) {
        let (mut replaced, mut appended) = (0usize, 0usize);
        for item in items {
            match self.todos.iter().position(|todo| todo.id == item.id) {
                Some(index) => {
                    self.todos[index] = item;
                    replaced += 1;
                }
                None => {
                    self.todos.push(item);
                    appended += 1;
                }
            }
        }
        info!("upsert batch: {} replaced, {} appended", replaced, appended);
    }

    /// Externally invoked delete; same semantics as [`Self::delete`]
    pub fn delete_by_id(&mut self, id: &str) {
        info!("delete by id: {}", id);
        self.delete(id);
    }
}
