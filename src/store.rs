//! View-Model Store
//!
//! Everything the page shows, as one typed state. Components subscribe to
//! individual fields through reactive_stores; the gateway mutates it through
//! [`ViewSink`] so the same logic runs against a plain value in tests.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::error::UnknownForm;
use crate::models::{AuthForm, Task};

#[derive(Clone, Debug, Default, Store)]
pub struct ViewState {
    /// Projection of the session token's presence
    pub authenticated: bool,
    /// Active auth form; its tab is active with it
    pub active_form: AuthForm,
    /// Last fetched task collection, in server order
    pub tasks: Vec<Task>,
    /// Single status line, last write wins
    pub message: String,
}

impl ViewState {
    pub fn display_message(&mut self, text: impl Into<String>) {
        self.message = text.into();
    }

    pub fn set_authenticated(&mut self, authenticated: bool) {
        self.authenticated = authenticated;
    }

    /// Hidden state of `.requires-auth` regions
    pub fn requires_auth_hidden(&self) -> bool {
        !self.authenticated
    }

    /// Hidden state of `.requires-unauth` regions
    pub fn requires_unauth_hidden(&self) -> bool {
        self.authenticated
    }

    /// Activate the form and tab called `name`. Unknown names leave the state
    /// untouched, message included.
    pub fn toggle_form(&mut self, name: &str) -> Result<(), UnknownForm> {
        let form = name.parse::<AuthForm>()?;
        self.message.clear();
        self.active_form = form;
        Ok(())
    }

    pub fn is_form_active(&self, form: AuthForm) -> bool {
        self.active_form == form
    }

    /// Replace the displayed list wholesale
    pub fn display_todos(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Drop the row for `id`. Returns false when no such row is shown.
    pub fn remove_task(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }
}

/// Type alias for the store
pub type AppStore = Store<ViewState>;

/// Write access to the view-model
pub trait ViewSink {
    fn apply(&self, f: impl FnOnce(&mut ViewState));
}

impl ViewSink for AppStore {
    fn apply(&self, f: impl FnOnce(&mut ViewState)) {
        self.update(f);
    }
}

#[cfg(test)]
impl ViewSink for std::cell::RefCell<ViewState> {
    fn apply(&self, f: impl FnOnce(&mut ViewState)) {
        f(&mut self.borrow_mut());
    }
}
