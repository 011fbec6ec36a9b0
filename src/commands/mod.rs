//! Todo API Commands
//!
//! Frontend bindings to the remote todo service, organized by domain.
//! Every call is a single JSON request with no retry and no timeout.

mod users;
mod todos;


use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::{Session, TokenStore};
use crate::store::ViewSink;

pub use todos::EMPTY_TASK_MESSAGE;
pub use users::LOGGED_OUT_MESSAGE;

const USERS_PATH: &str = "/users/";
const LOGIN_PATH: &str = "/users/login";
const TODOS_PATH: &str = "/todos/";

// ========================
// Transport
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub bearer: Option<String>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), bearer: None, body: None }
    }

    pub fn with_bearer(mut self, token: Option<String>) -> Self {
        self.bearer = token;
        self
    }

    pub fn with_json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    pub status: StatusCode,
    pub body: Value,
}

impl ApiReply {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn parse<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        Ok(serde_json::from_value(self.body)?)
    }
}

/// Sends one request and returns the status with the decoded JSON body
pub trait TodoApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, ApiError>;
}

/// reqwest-backed transport (browser `fetch` on wasm32)
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self { client: reqwest::Client::new(), config: config.clone() }
    }
}

impl TodoApi for HttpApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiReply, ApiError> {
        let url = self.config.endpoint(&request.path);
        let mut builder = self
            .client
            .request(request.method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = &request.bearer {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        let body = response.json::<Value>().await?;
        Ok(ApiReply::new(status, body))
    }
}

// ========================
// Gateway
// ========================

/// The session plus a transport. Operations live in `users` and `todos`.
#[derive(Debug, Clone)]
pub struct TodoGateway<A, S> {
    api: A,
    session: Session<S>,
}

impl<A: TodoApi, S: TokenStore> TodoGateway<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, session: Session::new(store) }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    #[cfg(test)]
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Request carrying the current token, when there is one
    fn authorized(&self, method: Method, path: impl Into<String>) -> ApiRequest {
        ApiRequest::new(method, path).with_bearer(self.session.token())
    }

    /// Page-load step: project the stored session, then load its tasks
    pub async fn restore_session<V: ViewSink>(&self, view: &V) -> Result<(), ApiError> {
        self.handle_interface_auth(view);
        if self.session.is_authenticated() {
            self.fetch_todos(view).await?;
        }
        Ok(())
    }
}

/// Surface a server message. Responses without one leave the region alone.
fn show_message<V: ViewSink>(view: &V, message: Option<String>) {
    if let Some(message) = message {
        view.apply(|state| state.display_message(message));
    }
}
