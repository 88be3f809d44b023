use thiserror::Error;

/// Classified failure of a single submission.
///
/// Returned to the form so it can render a visible error instead of
/// swallowing the failure after logging it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never produced a response (offline, DNS, CORS rejection).
    #[error("network request failed: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status. `body` holds the diagnostic text.
    #[error("request failed with status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected representation.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The request body could not be built.
    #[error("could not encode request: {0}")]
    Encode(String),

    /// The user stopped the request before it completed.
    #[error("request cancelled")]
    Cancelled,

    /// A browser API needed for the request is unavailable.
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

impl SubmitError {
    /// Whether sending the same draft again may succeed.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Status { status, .. } => *status >= 500 || matches!(*status, 408 | 429),
            Self::Decode(_) | Self::Encode(_) | Self::Cancelled | Self::Browser(_) => false,
        }
    }

    /// Short text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            Self::Transport(_) => "Could not reach the analysis service.".to_string(),
            Self::Status { status, .. } if *status >= 500 => {
                format!("The analysis service failed (status {status}).")
            }
            Self::Status { status, .. } => {
                format!("The analysis service rejected the request (status {status}).")
            }
            Self::Decode(_) => "The analysis service returned an unreadable response.".to_string(),
            Self::Encode(_) => "The request could not be prepared.".to_string(),
            Self::Cancelled => "Request cancelled.".to_string(),
            Self::Browser(_) => "This browser could not send the request.".to_string(),
        }
    }
}

/// Failures of the shared UI state plumbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("GraphStore context missing: component must be nested inside GraphStoreProvider")]
    ProviderMissing,
}

/// Failures while reading stored configuration overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid stored configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_are_retryable() {
        assert!(SubmitError::Transport("offline".to_string()).is_retryable());
    }

    #[test]
    fn test_status_retryability() {
        let status = |status| SubmitError::Status {
            status,
            body: String::new(),
        };

        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
        assert!(status(429).is_retryable());
        assert!(status(408).is_retryable());
        assert!(!status(400).is_retryable());
        assert!(!status(422).is_retryable());
    }

    #[test]
    fn test_terminal_errors_are_not_retryable() {
        assert!(!SubmitError::Decode("bad json".to_string()).is_retryable());
        assert!(!SubmitError::Cancelled.is_retryable());
        assert!(!SubmitError::Browser("no window".to_string()).is_retryable());
    }

    #[test]
    fn test_user_message_mentions_status() {
        let err = SubmitError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(err.user_message(), "The analysis service failed (status 502).");

        let err = SubmitError::Status {
            status: 413,
            body: String::new(),
        };
        assert!(err.user_message().contains("rejected"));
    }

    #[test]
    fn test_display_does_not_leak_body() {
        let err = SubmitError::Status {
            status: 500,
            body: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "request failed with status 500");
    }
}
