use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use send_wrapper::SendWrapper;

use crate::api::SubmitRequest;
use crate::error::SubmitError;

/// Status and body text of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// Sends a [`SubmitRequest`] to the analysis service.
///
/// Implementations must honour `abort`: once it fires, the returned future
/// should resolve to [`SubmitError::Cancelled`] as soon as possible.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(
        &self,
        request: &SubmitRequest,
        abort: &AbortHandle,
    ) -> Result<RawResponse, SubmitError>;
}

/// Cancellation token for one submission.
///
/// In the browser it owns an `AbortController` whose signal is handed to
/// `fetch`, so stopping really tears down the request.
#[derive(Debug, Clone, Default)]
pub struct AbortHandle {
    aborted: Arc<AtomicBool>,
    controller: Option<SendWrapper<web_sys::AbortController>>,
}

impl AbortHandle {
    pub fn new() -> Self {
        Self {
            aborted: Arc::new(AtomicBool::new(false)),
            controller: browser_controller(),
        }
    }

    pub fn abort(&self) {
        self.aborted.store(true, Ordering::SeqCst);
        if let Some(controller) = &self.controller {
            controller.abort();
        }
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted.load(Ordering::SeqCst)
    }

    /// Signal to pass to `fetch`, when running in a browser
    pub fn signal(&self) -> Option<web_sys::AbortSignal> {
        self.controller.as_ref().map(|controller| controller.signal())
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_controller() -> Option<SendWrapper<web_sys::AbortController>> {
    web_sys::AbortController::new().ok().map(SendWrapper::new)
}

#[cfg(not(target_arch = "wasm32"))]
const fn browser_controller() -> Option<SendWrapper<web_sys::AbortController>> {
    None
}
