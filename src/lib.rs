//! Browser front end for the X-Files analysis service.
//!
//! The user submits text or a file, the analysis service returns a rendered
//! graph, and the page swaps its splash for that result.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;

pub use app::App;
pub use config::{AppConfig, BackendMode};
pub use error::SubmitError;
