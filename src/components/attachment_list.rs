use leptos::html::Input;
use leptos::prelude::*;

use crate::models::{Attachment, FormState};

/// Chips for the attached files, each with a remove button.
#[component]
pub fn AttachmentList(upload_ref: NodeRef<Input>) -> impl IntoView {
    let form = use_context::<FormState>().expect("FormState context missing");

    let remove = move |index: usize| {
        form.remove_file(index);
        // Reset the picker so the same file can be picked again right away
        if let Some(input) = upload_ref.get() {
            input.set_value("");
        }
    };

    view! {
        <Show when=move || !form.files().is_empty()>
            <div class="attachment-list">
                <For
                    each=move || form.files().into_iter().enumerate()
                    key=|(index, attachment)| attachment_key(*index, attachment)
                    children=move |(index, attachment)| {
                        view! {
                            <div class="attachment-chip" title=attachment.display_size()>
                                <span class="attachment-name">{attachment.name().to_string()}</span>
                                <button
                                    type="button"
                                    class="attachment-remove"
                                    aria-label="Remove file"
                                    on:click=move |_| remove(index)
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

/// Positions shift on removal, so the key includes both index and name
fn attachment_key(index: usize, attachment: &Attachment) -> String {
    format!("{index}_{}", attachment.name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_names_get_distinct_keys() {
        let a = Attachment::new("notes.txt", 1, "text/plain");
        assert_ne!(attachment_key(0, &a), attachment_key(1, &a));
    }
}
