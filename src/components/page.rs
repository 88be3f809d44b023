use leptos::prelude::*;

use crate::components::{PromptInput, Splash};
use crate::models::use_graph_store;

/// What the page body shows for a given shared payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageContent {
    /// No result yet
    Splash,
    /// Server-rendered markup to inject
    Graph(String),
}

impl PageContent {
    pub fn from_payload(payload: &str) -> Self {
        if payload.is_empty() {
            Self::Splash
        } else {
            Self::Graph(payload.to_string())
        }
    }
}

/// Main page: splash or the latest result, with the form always beneath.
///
/// The payload is injected as raw HTML. The analysis service is operated
/// alongside this front end and trusted to return safe markup; put a
/// sanitizer here before pointing the app at any other backend.
#[component]
pub fn Page() -> impl IntoView {
    let store = use_graph_store();

    view! {
        <main class="page">
            <nav class="brand">"X-Files"</nav>
            <div class="page-body">
                {move || match store.with_payload(PageContent::from_payload) {
                    PageContent::Splash => view! { <Splash /> }.into_any(),
                    PageContent::Graph(html) => {
                        view! { <div class="graph-frame" inner_html=html></div> }.into_any()
                    }
                }}
            </div>
            <PromptInput />
        </main>
    }
}
