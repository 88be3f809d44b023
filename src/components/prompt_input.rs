use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};

use crate::api::{self, FetchTransport, SubmitOutcome};
use crate::components::{ActionButton, AttachmentList, ErrorBanner};
use crate::config::AppConfig;
use crate::models::{use_graph_store, Attachment, FormState, GraphStore};

/// What a key press in the textarea does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyAction {
    Submit,
    Stop,
    Type,
}

/// Enter sends, Shift+Enter inserts a newline, Escape stops while busy
fn key_action(key: &str, shift: bool, busy: bool) -> KeyAction {
    match key {
        "Enter" if !shift => KeyAction::Submit,
        "Escape" if busy => KeyAction::Stop,
        _ => KeyAction::Type,
    }
}

/// Text entry, attachment list and send/stop action for one submission.
///
/// Each instance owns its draft unless `form` is handed in by the caller.
#[component]
pub fn PromptInput(#[prop(optional)] form: Option<FormState>) -> impl IntoView {
    let store = use_graph_store();
    let config = use_context::<AppConfig>().expect("AppConfig context missing");

    // One draft per form instance, shared with the sub-components below
    let form = form.unwrap_or_default();
    provide_context(form);

    let textarea_ref = NodeRef::<leptos::html::Textarea>::new();
    let upload_ref = NodeRef::<leptos::html::Input>::new();

    // Auto-focus the textarea on mount
    Effect::new(move |_| {
        if let Some(textarea) = textarea_ref.get() {
            let element: &HtmlTextAreaElement = &textarea;
            let _ = element.focus();
        }
    });

    let on_submit = move || start_submission(form, store, config.clone());

    let on_input = move |ev: leptos::ev::Event| {
        form.set_text(event_target_value(&ev));
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        match key_action(&ev.key(), ev.shift_key(), form.is_busy()) {
            KeyAction::Submit => {
                ev.prevent_default();
                on_submit();
            }
            KeyAction::Stop => {
                ev.prevent_default();
                api::cancel(form);
            }
            KeyAction::Type => {}
        }
    };

    // Picks accumulate; they never replace earlier attachments
    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(list) = input.files() {
            form.add_files(Attachment::from_file_list(&list));
        }
    };

    view! {
        <div class="prompt-input">
            <ErrorBanner />
            <AttachmentList upload_ref=upload_ref />
            <textarea
                class="prompt-textarea"
                node_ref=textarea_ref
                rows="3"
                placeholder="Ask me anything..."
                prop:value=move || form.text()
                on:input=on_input
                on:keydown=on_keydown
            ></textarea>
            <div class="prompt-actions">
                <label for="file-upload" class="attach-button" title="Attach files">
                    <input
                        type="file"
                        multiple=true
                        id="file-upload"
                        class="hidden"
                        node_ref=upload_ref
                        on:change=on_file_change
                    />
                    "Attach"
                </label>
                <ActionButton />
            </div>
        </div>
    }
}

/// Spawn the submission for the current draft
pub(crate) fn start_submission(form: FormState, store: GraphStore, config: AppConfig) {
    spawn_local(async move {
        let outcome = api::submit(form, store, &FetchTransport, &config).await;
        if let SubmitOutcome::Failed(e) = &outcome {
            tracing::debug!(error = %e, retryable = e.is_retryable(), "Submission ended with failure");
        }
    });
}
