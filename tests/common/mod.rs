//! Shared helpers for the submission flow tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use leptos::prelude::Owner;
use tracing_subscriber::fmt::MakeWriter;

use xfiles_ui::api::{AbortHandle, RawResponse, SubmitRequest, Transport};
use xfiles_ui::SubmitError;

/// Transport that replays canned responses and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<RawResponse, SubmitError>>>,
    requests: RefCell<Vec<SubmitRequest>>,
    on_send: RefCell<Option<Box<dyn Fn()>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.responses
            .borrow_mut()
            .push_back(Ok(RawResponse::new(status, body)));
        self
    }

    pub fn fail(self, error: SubmitError) -> Self {
        self.responses.borrow_mut().push_back(Err(error));
        self
    }

    /// Run `hook` while the request is "in flight"
    pub fn during_send(self, hook: impl Fn() + 'static) -> Self {
        *self.on_send.borrow_mut() = Some(Box::new(hook));
        self
    }

    pub fn requests(&self) -> Vec<SubmitRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(
        &self,
        request: &SubmitRequest,
        _abort: &AbortHandle,
    ) -> Result<RawResponse, SubmitError> {
        self.requests.borrow_mut().push(request.clone());

        if let Some(hook) = self.on_send.borrow().as_ref() {
            hook();
        }

        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SubmitError::Transport("no canned response".to_string())))
    }
}

/// In-memory log sink for asserting on `tracing` output.
#[derive(Clone, Default)]
pub struct LogSink(Arc<Mutex<Vec<u8>>>);

impl LogSink {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Install a capturing subscriber for the current thread.
pub fn capture_logs() -> (LogSink, tracing::subscriber::DefaultGuard) {
    let sink = LogSink::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(sink.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (sink, guard)
}

/// Reactive owner for signals created by the test.
pub fn reactive_owner() -> Owner {
    let owner = Owner::new();
    owner.set();
    owner
}
