pub mod fetch;
pub mod request;
pub mod submit;
pub mod transport;

pub use fetch::FetchTransport;
pub use request::{RequestBody, SubmitRequest};
pub use submit::{cancel, submit, SubmitOutcome};
pub use transport::{AbortHandle, RawResponse, Transport};
