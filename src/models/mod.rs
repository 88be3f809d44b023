pub mod attachment;
pub mod draft;
pub mod form_state;
pub mod graph_document;
pub mod graph_store;

pub use attachment::Attachment;
pub use draft::SubmissionDraft;
pub use form_state::FormState;
pub use graph_document::{GraphDocument, GraphNode, GraphRelationship};
pub use graph_store::{
    provide_graph_store, try_use_graph_store, use_graph_store, GraphStore, GraphStoreProvider,
};
