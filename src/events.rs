//! Event Wiring
//!
//! DOM events to gateway calls. Requests run on the local executor; a failed
//! request is only reported to the console and the page stays as it was.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, FormData, HtmlFormElement};

use crate::context::AppContext;
use crate::error::ApiError;
use crate::models::{AuthForm, FormFields, NewTask, TaskId};

fn report<T>(operation: &str, result: Result<T, ApiError>) {
    if let Err(err) = result {
        log::error!("{operation} failed: {err}");
    }
}

/// Read every string entry of a form
fn collect_fields(form: &HtmlFormElement) -> Result<FormFields, JsValue> {
    let data = FormData::new_with_form(form)?;
    let entries = js_sys::try_iter(&data)?.ok_or_else(|| JsValue::from_str("FormData is not iterable"))?;

    let mut fields = FormFields::new();
    for entry in entries {
        let pair: js_sys::Array = entry?.dyn_into()?;
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.insert(name, value);
        }
    }
    Ok(fields)
}

/// Collect then reset, as the page did before any answer arrives
fn take_fields(form: &HtmlFormElement) -> Option<FormFields> {
    match collect_fields(form) {
        Ok(fields) => {
            form.reset();
            Some(fields)
        }
        Err(err) => {
            log::error!("reading form `{}` failed: {err:?}", form.name());
            None
        }
    }
}

pub fn page_load(ctx: &AppContext) {
    let gateway = ctx.gateway();
    let store = ctx.store;
    spawn_local(async move {
        report("session restore", gateway.restore_session(&store).await);
    });
}

/// Delegated click on the tab container; only `.tab` targets count
pub fn click_tab(ctx: &AppContext, target: &Element) {
    if !target.class_list().contains("tab") {
        return;
    }
    let name = target.id();
    ctx.store.update(|state| {
        if let Err(err) = state.toggle_form(&name) {
            log::warn!("{err}");
        }
    });
}

pub fn submit_credentials(ctx: &AppContext, kind: AuthForm, form: &HtmlFormElement) {
    let Some(fields) = take_fields(form) else {
        return;
    };
    let gateway = ctx.gateway();
    let store = ctx.store;
    spawn_local(async move {
        match kind {
            AuthForm::SignUp => report("sign up", gateway.create_user(&fields, &store).await),
            AuthForm::Login => report("login", gateway.login(&fields, &store).await),
        }
    });
}

pub fn submit_todo(ctx: &AppContext, form: &HtmlFormElement) {
    let Some(fields) = take_fields(form) else {
        return;
    };
    let task = NewTask::from_fields(&fields);
    let gateway = ctx.gateway();
    let store = ctx.store;
    spawn_local(async move {
        report("create todo", gateway.create_todo(&task, &store).await);
    });
}

pub fn click_logout(ctx: &AppContext) {
    report("logout", ctx.gateway().logout(&ctx.store));
}

pub fn click_delete(ctx: &AppContext, id: TaskId) {
    let gateway = ctx.gateway();
    let store = ctx.store;
    spawn_local(async move {
        report("delete todo", gateway.delete_todo(&id, &store).await);
    });
}
