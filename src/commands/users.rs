//! User Commands
//!
//! Account creation and session lifecycle.

use reqwest::{Method, StatusCode};

use super::{show_message, ApiRequest, TodoApi, TodoGateway, LOGIN_PATH, USERS_PATH};
use crate::error::ApiError;
use crate::models::{ApiMessage, FormFields, LoginResponse};
use crate::session::TokenStore;
use crate::store::ViewSink;

pub const LOGGED_OUT_MESSAGE: &str = "Logged out successfully";

impl<A: TodoApi, S: TokenStore> TodoGateway<A, S> {
    /// POST /users/ with the sign-up fields. The message is shown whatever the
    /// status; the parsed payload is handed back.
    pub async fn create_user<V: ViewSink>(&self, fields: &FormFields, view: &V) -> Result<ApiMessage, ApiError> {
        let request = ApiRequest::new(Method::POST, USERS_PATH).with_json(fields)?;
        let data: ApiMessage = self.api.send(request).await?.parse()?;
        show_message(view, data.message.clone());
        Ok(data)
    }

    /// POST /users/login. On 200 the token is stored, the auth regions flip
    /// and the task list is loaded before the login message is shown.
    pub async fn login<V: ViewSink>(&self, credentials: &FormFields, view: &V) -> Result<(), ApiError> {
        let request = ApiRequest::new(Method::POST, LOGIN_PATH).with_json(credentials)?;
        let reply = self.api.send(request).await?;
        let status = reply.status;
        let data: LoginResponse = reply.parse()?;

        if status == StatusCode::OK {
            match data.token.as_deref() {
                Some(token) => {
                    self.session.begin(token)?;
                    self.handle_interface_auth(view);
                    if let Err(err) = self.fetch_todos(view).await {
                        log::error!("loading todos after login failed: {err}");
                    }
                }
                None => log::warn!("login answered 200 without a token"),
            }
        }

        // Shown after the task fetch so the login outcome is what stays on screen
        show_message(view, data.message);
        Ok(())
    }

    /// Forget the token. If storage refuses, the page stays signed in and no
    /// success message is shown.
    pub fn logout<V: ViewSink>(&self, view: &V) -> Result<(), ApiError> {
        let cleared = self.session.end();
        self.handle_interface_auth(view);
        cleared?;
        view.apply(|state| state.display_message(LOGGED_OUT_MESSAGE));
        Ok(())
    }

    /// Project the session onto the `.requires-auth` / `.requires-unauth` regions
    pub fn handle_interface_auth<V: ViewSink>(&self, view: &V) {
        let authenticated = self.session.is_authenticated();
        view.apply(|state| state.set_authenticated(authenticated));
    }
}
