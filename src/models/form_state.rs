use leptos::prelude::*;

use crate::api::AbortHandle;
use crate::error::SubmitError;
use crate::models::{Attachment, SubmissionDraft};

/// Reactive state of one submission form instance.
/// Provided to the form's sub-components via `use_context()`.
#[derive(Clone, Copy)]
pub struct FormState {
    /// Text and attachments not yet sent
    pub draft: RwSignal<SubmissionDraft>,
    /// Is a submission in flight?
    pub busy: RwSignal<bool>,
    /// Failure of the last submission, until dismissed or retried
    pub last_error: RwSignal<Option<SubmitError>>,
    /// Sequence number of the most recent submission
    generation: StoredValue<u64>,
    /// Cancellation handle of the submission in flight
    in_flight: StoredValue<Option<AbortHandle>>,
}

impl FormState {
    /// Create an idle form with an empty draft
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(SubmissionDraft::default()),
            busy: RwSignal::new(false),
            last_error: RwSignal::new(None),
            generation: StoredValue::new(0),
            in_flight: StoredValue::new(None),
        }
    }

    /// Current draft text (tracked)
    pub fn text(&self) -> String {
        self.draft.with(|d| d.text.clone())
    }

    /// Replace the draft text
    pub fn set_text(&self, text: String) {
        self.draft.update(|d| d.text = text);
    }

    /// Current attachments (tracked)
    pub fn files(&self) -> Vec<Attachment> {
        self.draft.with(|d| d.files.clone())
    }

    /// Append newly picked files
    pub fn add_files(&self, files: Vec<Attachment>) {
        if files.is_empty() {
            return;
        }
        self.draft.update(|d| d.add_files(files));
    }

    /// Remove one attachment by position
    pub fn remove_file(&self, index: usize) -> Option<Attachment> {
        self.draft.try_update(|d| d.remove_file(index)).flatten()
    }

    /// Copy of the draft for building a request
    pub fn draft_snapshot(&self) -> SubmissionDraft {
        self.draft.get_untracked()
    }

    /// Clear text and attachments after a successful submission
    pub fn clear_draft(&self) {
        self.draft.update(SubmissionDraft::clear);
    }

    /// Is a submission in flight? (untracked)
    pub fn is_busy(&self) -> bool {
        self.busy.get_untracked()
    }

    /// Mark a new submission as started and return its generation and
    /// cancellation handle.
    pub fn begin_submission(&self) -> (u64, AbortHandle) {
        self.generation.update_value(|g| *g += 1);
        let generation = self.generation.get_value();
        let handle = AbortHandle::new();

        self.in_flight.set_value(Some(handle.clone()));
        self.last_error.set(None);
        self.busy.set(true);

        (generation, handle)
    }

    /// True while `generation` is still the latest submission and has not
    /// been stopped.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.get_value() == generation
    }

    /// Sequence number of the most recent submission
    pub fn generation(&self) -> u64 {
        self.generation.get_value()
    }

    /// Return to idle. Ignored for submissions that have been superseded.
    pub fn finish_submission(&self, generation: u64) {
        if !self.is_current(generation) {
            return;
        }
        self.in_flight.set_value(None);
        self.busy.set(false);
    }

    /// Record a failure for the error banner
    pub fn report_error(&self, error: SubmitError) {
        self.last_error.set(Some(error));
    }

    /// Hide the error banner
    pub fn dismiss_error(&self) {
        self.last_error.set(None);
    }

    /// Stop the submission in flight. Returns false when idle.
    ///
    /// Bumping the generation guarantees a late response is discarded even if
    /// the transport could not actually abort the request.
    pub fn cancel(&self) -> bool {
        if !self.is_busy() {
            return false;
        }

        self.generation.update_value(|g| *g += 1);
        if let Some(handle) = self.in_flight.get_value() {
            handle.abort();
        }
        self.in_flight.set_value(None);
        self.busy.set(false);

        true
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
