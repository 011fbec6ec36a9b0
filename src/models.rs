//! Frontend Models
//!
//! Data structures matching the todo API payloads.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::UnknownForm;

/// Server-assigned task identifier, opaque to the client. Numeric ids are
/// kept as their decimal text.
pub type TaskId = String;

/// Raw `name -> value` pairs of a submitted form, sent to the API as-is
pub type FormFields = BTreeMap<String, String>;

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    #[serde(deserialize_with = "json_text")]
    pub id: TaskId,
    pub body: String,
    #[serde(default)]
    pub tags: Option<String>,
}

/// Payload of the task creation form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub body: String,
    #[serde(default)]
    pub tags: String,
}

impl NewTask {
    pub fn from_fields(fields: &FormFields) -> Self {
        Self {
            body: fields.get("body").cloned().unwrap_or_default(),
            tags: fields.get("tags").cloned().unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Generic response body. Every endpoint answers with at least a `message`;
/// anything else the server adds is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ApiMessage {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TodosResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub message: Option<String>,
    #[serde(default)]
    pub todos: Option<Vec<Task>>,
}

/// Strings as-is, any other JSON value as its JSON text
fn json_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// Like [`json_text`], with `null` meaning absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

/// The two authentication forms, each paired with a tab of the same name
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthForm {
    #[default]
    SignUp,
    Login,
}

impl AuthForm {
    pub const ALL: [AuthForm; 2] = [AuthForm::SignUp, AuthForm::Login];

    /// Form `name` and tab `id`
    pub fn name(self) -> &'static str {
        match self {
            AuthForm::SignUp => "signup",
            AuthForm::Login => "login",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AuthForm::SignUp => "Sign up",
            AuthForm::Login => "Log in",
        }
    }
}

impl FromStr for AuthForm {
    type Err = UnknownForm;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        AuthForm::ALL
            .into_iter()
            .find(|form| form.name() == name)
            .ok_or_else(|| UnknownForm(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_auth_form_names() {
        for form in AuthForm::ALL {
            assert_eq!(form.name().parse::<AuthForm>(), Ok(form));
        }
        assert_eq!("todo".parse::<AuthForm>(), Err(UnknownForm("todo".to_string())));
    }

    #[test]
    fn test_todos_response_with_missing_tags() {
        let data: TodosResponse = serde_json::from_value(json!({
            "message": "ok",
            "todos": [
                { "id": 1, "body": "buy milk", "tags": "home" },
                { "id": 2, "body": "call mom" }
            ]
        }))
        .unwrap();

        let todos = data.todos.unwrap();
        assert_eq!(todos[0].id, "1");
        assert_eq!(todos[0].tags.as_deref(), Some("home"));
        assert_eq!(todos[1].tags, None);
    }

    #[test]
    fn test_string_ids_and_odd_messages() {
        let data: TodosResponse = serde_json::from_value(json!({
            "message": { "code": 7 },
            "todos": [{ "id": "65a1f0c2", "body": "buy milk" }]
        }))
        .unwrap();
        assert_eq!(data.todos.unwrap()[0].id, "65a1f0c2");
        assert_eq!(data.message.as_deref(), Some(r#"{"code":7}"#));

        let data: LoginResponse = serde_json::from_value(json!({ "message": null, "token": "abc" })).unwrap();
        assert_eq!(data.message, None);
        let data: ApiMessage = serde_json::from_value(json!({ "message": 42 })).unwrap();
        assert_eq!(data.message.as_deref(), Some("42"));
    }

    #[test]
    fn test_api_message_keeps_extra_fields() {
        let data: ApiMessage = serde_json::from_value(json!({ "message": "created", "user": { "id": 4 } })).unwrap();
        assert_eq!(data.message.as_deref(), Some("created"));
        assert_eq!(data.extra["user"]["id"], 4);
    }

    #[test]
    fn test_new_task_from_fields() {
        let mut fields = FormFields::new();
        fields.insert("body".to_string(), "water plants".to_string());
        let task = NewTask::from_fields(&fields);
        assert_eq!(task, NewTask { body: "water plants".to_string(), tags: String::new() });
        assert!(!task.is_empty());
        assert!(NewTask::from_fields(&FormFields::new()).is_empty());
    }
}
