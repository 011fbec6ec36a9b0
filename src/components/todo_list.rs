//! Todo List Component
//!
//! Renders the last fetched task collection in server order.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::events;
use crate::models::Task;
use crate::store::ViewStateStoreFields;

#[component]
pub fn TodoList() -> impl IntoView {
    let store = use_context::<AppContext>().expect("AppContext should be provided").store;

    view! {
        <ul class="todo-list">
            <For
                each=move || store.tasks().get()
                // Whole task as key so a re-fetched edit re-renders its row
                key=|task| task.clone()
                children=move |task| view! { <TodoRow task=task /> }
            />
        </ul>
    }
}

/// A single `<li>`; its `id` attribute is the task id
#[component]
fn TodoRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let id = task.id.clone();

    view! {
        <li id=task.id>
            <p class="body">{task.body}</p>
            <p class="tags">{task.tags.unwrap_or_default()}</p>
            <div class="delete" title="Delete" on:click=move |_| events::click_delete(&ctx, id.clone())></div>
        </li>
    }
}
