//! Todo Commands
//!
//! Authenticated task operations. The list shown is only ever what the
//! server last returned; nothing is inserted locally.

use reqwest::{Method, StatusCode};
use serde_json::json;

use super::{show_message, TodoApi, TodoGateway, TODOS_PATH};
use crate::error::ApiError;
use crate::models::{ApiMessage, NewTask, TodosResponse};
use crate::session::TokenStore;
use crate::store::ViewSink;

pub const EMPTY_TASK_MESSAGE: &str = "Impossible de poster un todo vide.";

impl<A: TodoApi, S: TokenStore> TodoGateway<A, S> {
    /// GET /todos/ and replace the displayed list on 200
    pub async fn fetch_todos<V: ViewSink>(&self, view: &V) -> Result<(), ApiError> {
        let reply = self.api.send(self.authorized(Method::GET, TODOS_PATH)).await?;
        let status = reply.status;
        let data: TodosResponse = reply.parse()?;
        log::debug!("fetched todos: {data:?}");

        if status == StatusCode::OK {
            match data.todos {
                Some(tasks) => view.apply(|state| state.display_todos(tasks)),
                None => log::warn!("todo listing answered 200 without `todos`"),
            }
        }

        show_message(view, data.message);
        Ok(())
    }

    /// POST /todos/, then reload the whole list on 201.
    /// An empty body never reaches the network.
    pub async fn create_todo<V: ViewSink>(&self, task: &NewTask, view: &V) -> Result<(), ApiError> {
        if task.is_empty() {
            view.apply(|state| state.display_message(EMPTY_TASK_MESSAGE));
            return Ok(());
        }

        let request = self.authorized(Method::POST, TODOS_PATH).with_json(task)?;
        let reply = self.api.send(request).await?;
        let status = reply.status;
        let data: ApiMessage = reply.parse()?;

        if status == StatusCode::CREATED {
            if let Err(err) = self.fetch_todos(view).await {
                log::error!("reloading todos after create failed: {err}");
            }
        }

        // Shown after the reload so the create outcome is what stays on screen
        show_message(view, data.message);
        Ok(())
    }

    /// DELETE /todos/{id}, dropping the row on 200
    pub async fn delete_todo<V: ViewSink>(&self, id: &str, view: &V) -> Result<(), ApiError> {
        let request = self
            .authorized(Method::DELETE, format!("{TODOS_PATH}{id}"))
            .with_json(&json!({ "body": null }))?;
        let reply = self.api.send(request).await?;
        let status = reply.status;
        let data: ApiMessage = reply.parse()?;

        show_message(view, data.message);

        if status == StatusCode::OK {
            view.apply(|state| {
                if !state.remove_task(id) {
                    log::debug!("todo {id} was already gone from the list");
                }
            });
        }
        Ok(())
    }
}
