use leptos::prelude::*;

use crate::error::StateError;

/// Most recently received rendering payload, shared across the page.
///
/// An empty payload means no result has arrived yet. Replacement is total;
/// nothing in the app ever clears it back to empty.
#[derive(Clone, Copy)]
pub struct GraphStore {
    payload: RwSignal<String>,
}

impl GraphStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            payload: RwSignal::new(String::new()),
        }
    }

    /// Current payload (tracked)
    pub fn payload(&self) -> String {
        self.payload.get()
    }

    /// Read a projection of the payload without cloning it (tracked)
    pub fn with_payload<T>(&self, selector: impl FnOnce(&str) -> T) -> T {
        self.payload.with(|payload| selector(payload.as_str()))
    }

    /// Replace the payload entirely
    pub fn set_payload(&self, payload: impl Into<String>) {
        self.payload.set(payload.into());
    }

    /// True once a result has been published
    pub fn has_result(&self) -> bool {
        self.with_payload(|payload| !payload.is_empty())
    }

    /// Untracked read for async code running outside the reactive graph
    pub fn payload_untracked(&self) -> String {
        self.payload.get_untracked()
    }
}

impl Default for GraphStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the store for this subtree and provide it through context.
pub fn provide_graph_store() -> GraphStore {
    let store = GraphStore::new();
    provide_context(store);
    store
}

/// Look up the store provided by an enclosing [`GraphStoreProvider`].
pub fn try_use_graph_store() -> Result<GraphStore, StateError> {
    use_context::<GraphStore>().ok_or(StateError::ProviderMissing)
}

/// Like [`try_use_graph_store`] but fails fast when no provider is present.
pub fn use_graph_store() -> GraphStore {
    match try_use_graph_store() {
        Ok(store) => store,
        Err(e) => panic!("{e}"),
    }
}

/// Owns one [`GraphStore`] for the lifetime of its mount point.
///
/// The component body runs once per mount, so re-renders of the children
/// never recreate the store.
#[component]
pub fn GraphStoreProvider(children: Children) -> impl IntoView {
    provide_graph_store();
    children()
}
