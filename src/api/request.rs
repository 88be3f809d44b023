use serde::Serialize;

use crate::config::{AppConfig, BackendMode};
use crate::models::{Attachment, SubmissionDraft};

/// Body of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// `multipart/form-data` with optional `text` and `file` fields
    Multipart {
        text: Option<String>,
        file: Option<Attachment>,
    },
    /// `{"text": "..."}`
    Json { text: String },
}

#[derive(Serialize)]
struct JsonBody<'a> {
    text: &'a str,
}

impl RequestBody {
    /// Serialized JSON body, `None` for multipart bodies.
    pub fn to_json(&self) -> Option<Result<String, serde_json::Error>> {
        match self {
            Self::Json { text } => Some(serde_json::to_string(&JsonBody { text })),
            Self::Multipart { .. } => None,
        }
    }
}

/// A fully described request, independent of the browser fetch API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub url: String,
    pub accept: &'static str,
    pub content_type: Option<&'static str>,
    /// Send cookies with the cross-origin request
    pub include_credentials: bool,
    pub body: RequestBody,
}

impl SubmitRequest {
    /// Build the request for `draft` according to the configured backend mode.
    ///
    /// Multipart carries the trimmed text only when it is non-empty, and only
    /// the first attachment. JSON carries the trimmed text and no files.
    pub fn from_draft(config: &AppConfig, draft: &SubmissionDraft) -> Self {
        let text = draft.trimmed_text();

        let (body, content_type) = match config.mode {
            BackendMode::Generate => (
                RequestBody::Multipart {
                    text: (!text.is_empty()).then(|| text.to_string()),
                    file: draft.first_file().cloned(),
                },
                // The browser sets the multipart boundary itself
                None,
            ),
            BackendMode::GraphJson => (
                RequestBody::Json {
                    text: text.to_string(),
                },
                Some("application/json"),
            ),
        };

        Self {
            url: config.endpoint(),
            accept: config.mode.accept(),
            content_type,
            include_credentials: true,
            body,
        }
    }
}
