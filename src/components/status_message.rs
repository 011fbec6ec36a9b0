//! Status Message Component
//!
//! The single message line shared by every operation.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::ViewStateStoreFields;

#[component]
pub fn StatusMessage() -> impl IntoView {
    let store = use_context::<AppContext>().expect("AppContext should be provided").store;

    view! {
        <p class="message">{move || store.message().get()}</p>
    }
}
