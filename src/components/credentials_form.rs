//! Credentials Form Component
//!
//! Sign-up and login forms. Fields are sent to the API as typed.

use leptos::html;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::events;
use crate::models::AuthForm;

#[component]
pub fn CredentialsForm(kind: AuthForm) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;
    let form_ref = NodeRef::<html::Form>::new();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = form_ref.get() {
            events::submit_credentials(&ctx, kind, &form);
        }
    };

    view! {
        <form
            name=kind.name()
            class:active=move || store.with(|state| state.is_form_active(kind))
            node_ref=form_ref
            on:submit=on_submit
        >
            {(kind == AuthForm::SignUp).then(|| view! {
                <input type="text" name="username" placeholder="Username" required />
            })}
            <input type="email" name="email" placeholder="Email" required />
            <input type="password" name="password" placeholder="Password" required />
            <button type="submit">{kind.label()}</button>
        </form>
    }
}
