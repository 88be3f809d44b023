use leptos::prelude::*;

use crate::error::SubmitError;
use crate::models::FormState;

/// Visible, dismissible report of the last failed submission.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let form = use_context::<FormState>().expect("FormState context missing");

    view! {
        <Show when=move || form.last_error.get().is_some()>
            <div class="error-banner" role="alert">
                <span class="error-message">
                    {move || form.last_error.get().map(|e| banner_text(&e)).unwrap_or_default()}
                </span>
                <button
                    type="button"
                    class="error-dismiss"
                    aria-label="Dismiss"
                    on:click=move |_| form.dismiss_error()
                >
                    "×"
                </button>
            </div>
        </Show>
    }
}

/// Banner text, with a retry hint for failures worth retrying
fn banner_text(error: &SubmitError) -> String {
    if error.is_retryable() {
        format!("{} Your input was kept, try again.", error.user_message())
    } else {
        error.user_message()
    }
}
