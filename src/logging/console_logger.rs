use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::AppConfig;

/// Setup `tracing` output to the browser devtools console.
///
/// Off the browser (native test runs) events go to stderr instead.
///
/// # Errors
/// Returns an error if the filter directive is invalid or a global subscriber
/// is already installed.
pub fn setup_logging(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let filter = build_filter(&config.log_filter)?;

    #[cfg(target_arch = "wasm32")]
    let layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_report_logs_in_timings(false)
            .build(),
    );

    #[cfg(not(target_arch = "wasm32"))]
    let layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()?;

    tracing::info!(filter = %config.log_filter, "Logging initialized");

    Ok(())
}

/// Parse a filter directive such as `xfiles_ui=debug,warn`.
///
/// `EnvFilter::from_default_env` is useless in the browser, so the directive
/// always comes from configuration.
pub fn build_filter(directive: &str) -> Result<EnvFilter, ParseError> {
    EnvFilter::try_new(directive)
}
