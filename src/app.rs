use leptos::prelude::*;

use crate::components::Page;
use crate::config::AppConfig;
use crate::models::GraphStoreProvider;

/// Root application component that provides global context and mounts the Page.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // Provide context to all child components
    provide_context(config);

    view! {
        <GraphStoreProvider>
            <Page />
        </GraphStoreProvider>
    }
}
