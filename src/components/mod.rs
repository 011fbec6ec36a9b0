//! UI Components
//!
//! Leptos components projecting the view store.

mod auth_tabs;
mod credentials_form;
mod logout_button;
mod status_message;
mod todo_form;
mod todo_list;

pub use auth_tabs::AuthTabs;
pub use credentials_form::CredentialsForm;
pub use logout_button::LogoutButton;
pub use status_message::StatusMessage;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
