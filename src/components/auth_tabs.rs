//! Auth Tab Bar Component
//!
//! Tabs switching between the sign-up and login forms.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::context::AppContext;
use crate::events;
use crate::models::AuthForm;
use crate::store::ViewStateStoreFields;

/// One tab per auth form, its `id` being the form name
#[component]
pub fn AuthTabs() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = ctx.store;

    // Single delegated handler for the whole container
    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        events::click_tab(&ctx, &target);
    };

    view! {
        <div class="tab-container" on:click=on_click>
            {AuthForm::ALL.into_iter().map(|form| {
                let is_active = move || store.active_form().get() == form;
                view! {
                    <div class="tab" id=form.name() class:active=is_active>
                        {form.label()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
