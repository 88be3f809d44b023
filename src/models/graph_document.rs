use std::fmt::Write;

use html_escape::encode_text;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An entity extracted by the analysis service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// A typed edge between two nodes, referenced by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphRelationship {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// One document of the `/graph/json` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: Vec<GraphNode>,
    #[serde(default)]
    pub relationships: Vec<GraphRelationship>,
}

/// Parse a `/graph/json` response body.
pub fn parse_documents(body: &str) -> Result<Vec<GraphDocument>, serde_json::Error> {
    serde_json::from_str(body)
}

/// Render graph documents as an HTML fragment for the payload slot.
/// Every label is escaped; the output never carries server-provided markup.
pub fn render_documents_html(documents: &[GraphDocument]) -> String {
    let mut html = String::from(r#"<section class="graph-documents">"#);

    if documents.iter().all(|d| d.nodes.is_empty() && d.relationships.is_empty()) {
        html.push_str(r#"<p class="graph-empty">No entities found.</p>"#);
    }

    for (index, document) in documents.iter().enumerate() {
        if document.nodes.is_empty() && document.relationships.is_empty() {
            continue;
        }

        let _ = write!(html, r#"<article class="graph-document" data-index="{index}">"#);

        if !document.nodes.is_empty() {
            html.push_str(r#"<h3>Entities</h3><ul class="graph-nodes">"#);
            for node in &document.nodes {
                let _ = write!(
                    html,
                    r#"<li><span class="node-id">{}</span> <span class="node-type">{}</span></li>"#,
                    encode_text(&node.id),
                    encode_text(&node.kind),
                );
            }
            html.push_str("</ul>");
        }

        if !document.relationships.is_empty() {
            html.push_str(r#"<h3>Relationships</h3><ul class="graph-relationships">"#);
            for rel in &document.relationships {
                let _ = write!(
                    html,
                    r#"<li>{} <span class="rel-type">{}</span> {}</li>"#,
                    encode_text(&rel.source),
                    encode_text(&rel.kind),
                    encode_text(&rel.target),
                );
            }
            html.push_str("</ul>");
        }

        html.push_str("</article>");
    }

    html.push_str("</section>");
    html
}
