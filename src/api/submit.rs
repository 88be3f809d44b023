use tracing::{debug, error, info, warn};

use crate::api::{AbortHandle, SubmitRequest, Transport};
use crate::config::{AppConfig, BackendMode};
use crate::error::SubmitError;
use crate::models::graph_document::{parse_documents, render_documents_html};
use crate::models::{FormState, GraphStore};

/// How a call to [`submit`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing to send, or a submission was already in flight
    Skipped,
    /// The result was written to the shared store
    Published,
    /// The submission was stopped or superseded; its result was dropped
    Stale,
    /// The submission failed; shared state and draft are untouched
    Failed(SubmitError),
}

/// Send the form's draft and publish the result.
///
/// State machine per form: `Idle -> Busy -> Idle`. On success the payload is
/// replaced and the draft cleared; on failure the error is recorded on the
/// form and everything else is left as it was so the user can retry.
#[allow(clippy::future_not_send)]
pub async fn submit<T: Transport>(
    form: FormState,
    store: GraphStore,
    transport: &T,
    config: &AppConfig,
) -> SubmitOutcome {
    let draft = form.draft_snapshot();

    // Don't submit empty drafts
    if !draft.is_submittable() {
        return SubmitOutcome::Skipped;
    }

    if form.is_busy() {
        debug!("submission already in flight, ignoring submit");
        return SubmitOutcome::Skipped;
    }

    let (generation, abort) = form.begin_submission();
    let request = SubmitRequest::from_draft(config, &draft);

    info!(
        generation,
        url = %request.url,
        attachments = draft.files.len(),
        "Submitting analysis request"
    );

    let result = execute(transport, &request, &abort, config.mode).await;

    // A stop or a newer submission owns the form now
    if !form.is_current(generation) {
        warn!(generation, "Discarding result of stopped submission");
        return SubmitOutcome::Stale;
    }

    let outcome = match result {
        Ok(payload) => {
            store.set_payload(payload);
            form.clear_draft();
            info!(generation, "Published analysis result");
            SubmitOutcome::Published
        }
        Err(SubmitError::Cancelled) => {
            warn!(generation, "Submission cancelled");
            SubmitOutcome::Failed(SubmitError::Cancelled)
        }
        Err(e) => {
            error!(generation, error = %e, "Failed to generate graph");
            form.report_error(e.clone());
            SubmitOutcome::Failed(e)
        }
    };

    form.finish_submission(generation);
    outcome
}

/// Stop the submission in flight, if any.
pub fn cancel(form: FormState) -> bool {
    let stopped = form.cancel();
    if stopped {
        info!(generation = form.generation(), "Submission stopped by user");
    }
    stopped
}

#[allow(clippy::future_not_send)]
async fn execute<T: Transport>(
    transport: &T,
    request: &SubmitRequest,
    abort: &AbortHandle,
    mode: BackendMode,
) -> Result<String, SubmitError> {
    let response = transport.send(request, abort).await?;

    if !response.is_success() {
        error!(
            status = response.status,
            body = %response.body,
            "Server responded with an error"
        );
        return Err(SubmitError::Status {
            status: response.status,
            body: response.body,
        });
    }

    decode(mode, response.body)
}

/// Turn a successful response body into the HTML payload for the page.
pub fn decode(mode: BackendMode, body: String) -> Result<String, SubmitError> {
    match mode {
        BackendMode::Generate => {
            let preview: String = body.chars().take(100).collect();
            debug!(bytes = body.len(), %preview, "Received HTML response");
            Ok(body)
        }
        BackendMode::GraphJson => {
            let documents =
                parse_documents(&body).map_err(|e| SubmitError::Decode(e.to_string()))?;
            debug!(documents = documents.len(), "Received graph documents");
            Ok(render_documents_html(&documents))
        }
    }
}
