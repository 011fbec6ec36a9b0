//! Application Context
//!
//! Gateway and view store, provided once via Leptos Context API.

use leptos::prelude::*;

use crate::commands::{HttpApi, TodoGateway};
use crate::session::LocalTokenStore;
use crate::store::AppStore;

/// Gateway wired to the real network and localStorage
pub type AppGateway = TodoGateway<HttpApi, LocalTokenStore>;

#[derive(Clone)]
pub struct AppContext {
    gateway: AppGateway,
    /// View-model every component renders from
    pub store: AppStore,
}

impl AppContext {
    pub fn new(gateway: AppGateway, store: AppStore) -> Self {
        Self { gateway, store }
    }

    /// Owned handle for moving into a spawned request
    pub fn gateway(&self) -> AppGateway {
        self.gateway.clone()
    }
}
