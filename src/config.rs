//! Client Configuration
//!
//! Settings are baked in at build time (`option_env!`) since the bundle has
//! no environment of its own once it runs in the browser.

use log::Level;

const DEFAULT_API_URL: &str = "https://progweb-todo-api.onrender.com";
const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the todo API, without trailing slash
    pub api_url: String,
    /// localStorage key holding the session token
    pub token_key: String,
    pub log_level: Level,
}

impl ClientConfig {
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("TODO_API_URL"),
            option_env!("TODO_TOKEN_KEY"),
            option_env!("TODO_LOG_LEVEL"),
        )
    }

    fn from_values(api_url: Option<&str>, token_key: Option<&str>, log_level: Option<&str>) -> Self {
        let api_url = api_url
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
            .trim_end_matches('/')
            .to_string();
        let token_key = token_key
            .filter(|key| !key.is_empty())
            .unwrap_or(DEFAULT_TOKEN_KEY)
            .to_string();
        let log_level = log_level
            .and_then(|level| level.parse().ok())
            .unwrap_or(Level::Info);

        Self { api_url, token_key, log_level }
    }

    /// Absolute URL for an API path such as `/todos/`
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.api_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}
