//! Client Errors

use thiserror::Error;

/// Failure of a remote operation. Server-side refusals are not errors: they
/// come back as a status code plus a message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("token storage unavailable: {0}")]
    Storage(String),
}

/// Tab click on a name that has no matching form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no form or tab named `{0}`")]
pub struct UnknownForm(pub String);
