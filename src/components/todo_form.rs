//! New Todo Form Component
//!
//! Body and tags inputs. Empty bodies are caught by the gateway, not here,
//! so the user gets the same message either way.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::events;

#[component]
pub fn TodoForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = form_ref.get() {
            events::submit_todo(&ctx, &form);
        }
    };

    view! {
        <form name="todo" class="new-todo-form" node_ref=form_ref on:submit=on_submit>
            <input type="text" name="body" placeholder="What needs doing?" />
            <input type="text" name="tags" placeholder="Tags" />
            <button type="submit">"Add"</button>
        </form>
    }
}
