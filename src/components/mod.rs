//! UI Components
//!
//! Reusable Leptos components.

mod assignee_select;
mod header;
mod new_todo_form;
mod todo_item;
mod todo_list;

pub use assignee_select::AssigneeSelect;
pub use header::Header;
pub use new_todo_form::NewTodoForm;
pub use todo_item::TodoItemRow;
pub use todo_list::TodoList;
