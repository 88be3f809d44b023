use leptos::prelude::*;

use crate::api;
use crate::components::prompt_input::start_submission;
use crate::config::AppConfig;
use crate::models::{use_graph_store, FormState};

/// Send button that turns into a stop button while a submission is in flight.
#[component]
pub fn ActionButton() -> impl IntoView {
    let form = use_context::<FormState>().expect("FormState context missing");
    let store = use_graph_store();
    let config = use_context::<AppConfig>().expect("AppConfig context missing");

    let on_click = move |_| {
        if form.is_busy() {
            api::cancel(form);
        } else {
            start_submission(form, store, config.clone());
        }
    };

    view! {
        <button
            type="button"
            class="action-button"
            class:busy=move || form.busy.get()
            title=move || action_label(form.busy.get())
            aria-label=move || action_label(form.busy.get())
            on:click=on_click
        >
            {move || if form.busy.get() { "■" } else { "↑" }}
        </button>
    }
}

/// Accessible label for the current affordance
const fn action_label(busy: bool) -> &'static str {
    if busy {
        "Stop generation"
    } else {
        "Send message"
    }
}
