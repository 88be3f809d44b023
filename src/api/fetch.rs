use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::api::{AbortHandle, RawResponse, RequestBody, SubmitRequest, Transport};
use crate::error::SubmitError;

/// [`Transport`] backed by the browser `fetch` API.
///
/// Builds on every target so the crate's native tests link, but it needs a
/// browser `window` at runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn send(
        &self,
        request: &SubmitRequest,
        abort: &AbortHandle,
    ) -> Result<RawResponse, SubmitError> {
        let window =
            web_sys::window().ok_or_else(|| SubmitError::Browser("no window object".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        if request.include_credentials {
            opts.set_credentials(RequestCredentials::Include);
        }
        if let Some(signal) = abort.signal() {
            opts.set_signal(Some(&signal));
        }
        opts.set_body(&build_body(&request.body)?);

        let fetch_request =
            Request::new_with_str_and_init(&request.url, &opts).map_err(browser_error)?;
        let headers = fetch_request.headers();
        headers
            .set("Accept", request.accept)
            .map_err(browser_error)?;
        if let Some(content_type) = request.content_type {
            headers
                .set("Content-Type", content_type)
                .map_err(browser_error)?;
        }

        let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request))
            .await
            .map_err(|e| fetch_error(&e, abort))?;
        let response: Response = resp_value
            .dyn_into()
            .map_err(|_| SubmitError::Browser("fetch did not resolve to a Response".to_string()))?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(browser_error)?)
            .await
            .map_err(|e| fetch_error(&e, abort))?;
        let body = text
            .as_string()
            .ok_or_else(|| SubmitError::Decode("response body is not text".to_string()))?;

        Ok(RawResponse { status, body })
    }
}

fn build_body(body: &RequestBody) -> Result<JsValue, SubmitError> {
    match body {
        RequestBody::Multipart { text, file } => {
            let form = FormData::new().map_err(browser_error)?;
            if let Some(text) = text {
                form.append_with_str("text", text).map_err(browser_error)?;
            }
            if let Some(file) = file.as_ref().and_then(|a| a.file()) {
                form.append_with_blob_and_filename("file", file, &file.name())
                    .map_err(browser_error)?;
            }
            Ok(form.into())
        }
        RequestBody::Json { .. } => {
            let json = body
                .to_json()
                .transpose()
                .map_err(|e| SubmitError::Encode(e.to_string()))?
                .unwrap_or_default();
            Ok(JsValue::from_str(&json))
        }
    }
}

/// Describe a rejected JS promise
fn js_error_message(e: &JsValue) -> String {
    e.as_string()
        .or_else(|| e.dyn_ref::<js_sys::Error>().map(|err| String::from(err.message())))
        .unwrap_or_else(|| format!("{e:?}"))
}

fn browser_error(e: JsValue) -> SubmitError {
    SubmitError::Browser(js_error_message(&e))
}

/// Map a rejected `fetch` (or body read) to a transport failure, or to a
/// cancellation when our own abort signal caused it.
fn fetch_error(e: &JsValue, abort: &AbortHandle) -> SubmitError {
    let aborted_by_signal = e
        .dyn_ref::<web_sys::DomException>()
        .is_some_and(|ex| ex.name() == "AbortError");

    if aborted_by_signal || abort.is_aborted() {
        SubmitError::Cancelled
    } else {
        SubmitError::Transport(js_error_message(e))
    }
}
