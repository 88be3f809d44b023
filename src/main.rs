use leptos::prelude::*;

use xfiles_ui::logging::setup_logging;
use xfiles_ui::{App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load();

    // Initialize logging before mounting
    if let Err(e) = setup_logging(&config) {
        web_sys::console::warn_1(&format!("Warning: Failed to setup logging: {e}").into());
    }

    tracing::info!(endpoint = %config.endpoint(), "Starting X-Files UI");

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
