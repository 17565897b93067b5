//! Assistant Actions
//!
//! The contract offered to the conversational assistant: two mutating
//! actions (`updateTodoList`, `deleteTodo`) described by name, description
//! and parameter shape, plus a read-only snapshot of the list.

use log::{info, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::TodoRecord;
use crate::state::TodoListState;

pub const UPDATE_TODO_LIST: &str = "updateTodoList";
pub const DELETE_TODO: &str = "deleteTodo";

/// Failures at the assistant boundary. List operations themselves never fail.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Invalid arguments for {action}: {source}")]
    InvalidArguments {
        action: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

// ========================
// Action Definitions
// ========================

/// One declared parameter (or attribute of an object parameter)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionParameter {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<ActionParameter>,
}

impl ActionParameter {
    fn new(name: &'static str, kind: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            attributes: Vec::new(),
        }
    }

    fn required(mut self) -> Self {
        self.required = true;
        self
    }

    fn with_attributes(mut self, attributes: Vec<ActionParameter>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Declarative description of an action the assistant may call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: Vec<ActionParameter>,
    /// Status line shown while the action runs
    pub render: &'static str,
}

/// All actions, in registration order
pub fn definitions() -> Vec<ActionDefinition> {
    vec![
        ActionDefinition {
            name: UPDATE_TODO_LIST,
            description: "Update the users todo list",
            parameters: vec![ActionParameter::new(
                "items",
                "object[]",
                "The new and updated todo list items.",
            )
            .with_attributes(vec![
                ActionParameter::new(
                    "id",
                    "string",
                    "The id of the todo item. When creating a new todo item, just make up a new id.",
                ),
                ActionParameter::new("text", "string", "The text of the todo item."),
                ActionParameter::new(
                    "isCompleted",
                    "boolean",
                    "The completion status of the todo item.",
                ),
                ActionParameter::new(
                    "assignedTo",
                    "string",
                    "The person assigned to the todo item. If you don't know, assign it to 'YOU'.",
                )
                .required(),
            ])],
            render: "Updating the todo list...",
        },
        ActionDefinition {
            name: DELETE_TODO,
            description: "Delete a todo item",
            parameters: vec![ActionParameter::new(
                "id",
                "string",
                "The id of the todo item to delete.",
            )],
            render: "Deleting a todo item...",
        },
    ]
}

// ========================
// Argument Structs
// ========================

#[derive(Debug, Deserialize)]
pub struct UpdateTodoListArgs {
    pub items: Vec<TodoRecord>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteTodoArgs {
    #[serde(deserialize_with = "crate::models::string_or_number")]
    pub id: String,
}

fn parse_args<T: for<'de> Deserialize<'de>>(
    action: &'static str,
    args: Value,
) -> Result<T, ActionError> {
    serde_json::from_value(args).map_err(|source| ActionError::InvalidArguments { action, source })
}

/// Run the named action against `state`
pub fn dispatch(state: &mut TodoListState, name: &str, args: Value) -> Result<(), ActionError> {
    let result = match name {
        UPDATE_TODO_LIST => parse_args::<UpdateTodoListArgs>(UPDATE_TODO_LIST, args)
            .map(|UpdateTodoListArgs { items }| {
                info!("[ACTION] {} with {} items", name, items.len());
                state.apply_upsert_batch(items);
            }),
        DELETE_TODO => parse_args::<DeleteTodoArgs>(DELETE_TODO, args).map(|DeleteTodoArgs { id }| {
            info!("[ACTION] {} {}", name, id);
            state.delete_by_id(&id);
        }),
        other => Err(ActionError::UnknownAction(other.to_string())),
    };
    if let Err(e) = &result {
        warn!("[ACTION] {}", e);
    }
    result
}

// ========================
// Readable Context
// ========================

/// Read-only view of the list handed to the assistant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadableContext {
    pub description: String,
    pub value: Vec<TodoRecord>,
}

impl ReadableContext {
    pub fn capture(description: impl Into<String>, state: &TodoListState) -> Self {
        Self {
            description: description.into(),
            value: state.snapshot(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn seeded() -> TodoListState {
        TodoListState::with_todos(vec![
            TodoRecord::new("1", "Groceries", Some("Mother".to_string())),
            TodoRecord::new("2", "Laundry", None),
        ])
    }

    #[test]
    fn test_definitions_shape() {
        let defs = definitions();
        let names: Vec<_> = defs.iter().map(|d| d.name).collect();
        assert_eq!(names, vec![UPDATE_TODO_LIST, DELETE_TODO]);

        let json = serde_json::to_value(&defs).unwrap();
        let items = &json[0]["parameters"][0];
        assert_eq!(items["type"], "object[]");
        assert_eq!(items["attributes"][3]["name"], "assignedTo");
        assert_eq!(items["attributes"][3]["required"], true);
        assert!(items["attributes"][0].get("required").is_none());
        assert!(json[1]["parameters"][0].get("attributes").is_none());
    }

    #[test]
    fn test_dispatch_update_upserts() {
        let mut state = seeded();
        dispatch(
            &mut state,
            UPDATE_TODO_LIST,
            json!({"items": [
                {"id": "2", "text": "Fold laundry", "isCompleted": true, "assignedTo": "Children"},
                {"id": "3", "text": "Call grandma", "isCompleted": false, "assignedTo": "YOU"},
            ]}),
        )
        .unwrap();

        let ids: Vec<_> = state.todos().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        let laundry = state.get("2").unwrap();
        assert_eq!(laundry.text, "Fold laundry");
        assert!(laundry.is_completed);
        assert_eq!(laundry.assigned_to.as_deref(), Some("Children"));
    }

    #[test]
    fn test_dispatch_update_accepts_partial_items() {
        let mut state = seeded();
        dispatch(&mut state, UPDATE_TODO_LIST, json!({"items": [{"id": "1"}]})).unwrap();

        let groceries = state.get("1").unwrap();
        assert_eq!(groceries.text, "");
        assert_eq!(groceries.assigned_to, None);
    }

    #[test]
    fn test_dispatch_update_tolerates_null_fields() {
        let mut state = TodoListState::new();
        dispatch(
            &mut state,
            UPDATE_TODO_LIST,
            json!({"items": [
                {"id": "a", "text": "ok", "isCompleted": false, "assignedTo": "YOU"},
                {"id": "b", "text": null, "isCompleted": null, "assignedTo": null},
                {"id": 3, "text": "numbered", "isCompleted": true, "assignedTo": "Father"},
            ]}),
        )
        .unwrap();

        let ids: Vec<_> = state.todos().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "3"]);
        assert_eq!(state.get("a").unwrap().text, "ok");
        let blank = state.get("b").unwrap();
        assert_eq!(blank.text, "");
        assert!(!blank.is_completed);
        assert_eq!(blank.assigned_to, None);
        assert!(state.get("3").unwrap().is_completed);
    }

    #[test]
    fn test_dispatch_delete() {
        let mut state = seeded();
        dispatch(&mut state, DELETE_TODO, json!({"id": "1"})).unwrap();
        assert_eq!(state.len(), 1);
        assert!(!state.contains("1"));

        dispatch(&mut state, DELETE_TODO, json!({"id": "1"})).unwrap();
        assert_eq!(state.len(), 1);

        dispatch(&mut state, DELETE_TODO, json!({"id": 2})).unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn test_dispatch_unknown_action() {
        let mut state = seeded();
        let err = dispatch(&mut state, "renameTodo", json!({})).unwrap_err();
        assert!(matches!(err, ActionError::UnknownAction(name) if name == "renameTodo"));
        assert_eq!(state, seeded());
    }

    #[test]
    fn test_dispatch_invalid_arguments() {
        let mut state = seeded();
        let err = dispatch(&mut state, DELETE_TODO, json!({"todoId": "1"})).unwrap_err();
        assert!(matches!(err, ActionError::InvalidArguments { action: DELETE_TODO, .. }));

        let err = dispatch(&mut state, UPDATE_TODO_LIST, json!({"items": [{"text": "no id"}]}))
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid arguments for updateTodoList"));
        assert_eq!(state, seeded());
    }

    #[test]
    fn test_readable_is_snapshot() {
        let mut state = seeded();
        let readable = ReadableContext::capture("The current to-do list.", &state);
        state.delete("1");

        assert_eq!(readable.value.len(), 2);
        let json = serde_json::to_value(&readable).unwrap();
        assert_eq!(json["description"], "The current to-do list.");
        assert_eq!(json["value"][0]["assignedTo"], "Mother");
    }
}
