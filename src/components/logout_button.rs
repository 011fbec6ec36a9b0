use leptos::prelude::*;

use crate::context::AppContext;
use crate::events;

#[component]
pub fn LogoutButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <button name="logout" on:click=move |_| events::click_logout(&ctx)>
            "Log out"
        </button>
    }
}
