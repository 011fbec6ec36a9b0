//! Todo Frontend App
//!
//! Root component: auth forms for visitors, task list for signed-in users.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::{HttpApi, TodoGateway};
use crate::components::{AuthTabs, CredentialsForm, LogoutButton, StatusMessage, TodoForm, TodoList};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::events;
use crate::models::AuthForm;
use crate::session::LocalTokenStore;
use crate::store::ViewState;

#[component]
pub fn App() -> impl IntoView {
    let config = ClientConfig::from_env();
    log::info!("todo api at {}", config.api_url);

    let store = Store::new(ViewState::default());
    let gateway = TodoGateway::new(HttpApi::new(&config), LocalTokenStore::new(config.token_key.clone()));
    let ctx = AppContext::new(gateway, store);

    // Provide context to all children
    provide_context(ctx.clone());

    events::page_load(&ctx);

    view! {
        <main class="app-layout">
            <h1>"Todo"</h1>

            <section
                class="requires-unauth"
                class:hidden=move || store.with(|state| state.requires_unauth_hidden())
            >
                <AuthTabs />
                <CredentialsForm kind=AuthForm::SignUp />
                <CredentialsForm kind=AuthForm::Login />
            </section>

            <StatusMessage />

            <section
                class="requires-auth"
                class:hidden=move || store.with(|state| state.requires_auth_hidden())
            >
                <LogoutButton />
                <TodoForm />
                <TodoList />
            </section>
        </main>
    }
}
