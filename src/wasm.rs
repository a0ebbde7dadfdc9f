//! WASM bindings for the orrery-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! Everything crosses the boundary as JSON strings; failures come back as an
//! `error` field on the output, never as a panic.

use std::sync::Once;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::graph::{Graph, NodeId};
use crate::interact::{self, InteractionState};
use crate::layout::{LayoutConfig, layout_artifact};
use crate::payload::{self, ArtifactPayload};
use crate::render;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console, js_name = error)]
    pub fn console_error(s: &str);
}

static INIT_LOG: Once = Once::new();

// Route `log` records (layout degradation warnings) to the browser console.
fn ensure_logging() {
    INIT_LOG.call_once(|| {
        let _ = console_log::init_with_level(log::Level::Warn);
    });
}

#[derive(Debug, Clone, Serialize)]
struct ErrorInfo {
    message: String,
}

/// Envelope sent to the host: the graph, or an error, never both.
#[derive(Debug, Serialize)]
struct GraphOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    graph: Option<&'a Graph>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorInfo>,
}

fn build(payload_json: &str, cfg: &LayoutConfig) -> Result<Graph, String> {
    let payload: ArtifactPayload =
        serde_json::from_str(payload_json).map_err(|e| format!("bad payload: {e}"))?;
    // Sanitized host data cannot trip the strict abbreviation errors; blank
    // titles fall back to the default and blank entries are dropped.
    let artifact = payload::sanitize(payload::normalize(&payload));
    layout_artifact(&artifact, cfg).map_err(|e| e.to_string())
}

#[wasm_bindgen]
pub fn build_graph(payload_json: &str) -> String {
    ensure_logging();
    match build(payload_json, &LayoutConfig::default()) {
        Ok(graph) => serde_json::to_string(&GraphOutput {
            graph: Some(&graph),
            error: None,
        })
        .unwrap(),
        Err(message) => {
            console_error(&format!("Error building graph: {message}"));
            serde_json::to_string(&GraphOutput {
                graph: None,
                error: Some(ErrorInfo { message }),
            })
            .unwrap()
        }
    }
}

/// Stateful handle for the host view: owns the current graph and its
/// interaction state. The graph is rebuilt wholesale on every payload change
/// and the interaction state resets with it.
#[wasm_bindgen]
pub struct GraphView {
    graph: Graph,
    state: InteractionState,
    cfg: LayoutConfig,
}

#[wasm_bindgen]
impl GraphView {
    #[wasm_bindgen(constructor)]
    pub fn new(payload_json: &str) -> GraphView {
        ensure_logging();
        let cfg = LayoutConfig::default();
        let graph = build(payload_json, &cfg).unwrap_or_else(|message| {
            console_error(&format!("Error building graph: {message}"));
            Graph::empty()
        });
        GraphView {
            graph,
            state: InteractionState::new(),
            cfg,
        }
    }

    /// Swap in a new payload.
    pub fn set_payload(&mut self, payload_json: &str) {
        self.graph = match build(payload_json, &self.cfg) {
            Ok(graph) => graph,
            Err(message) => {
                console_error(&format!("Error building graph: {message}"));
                Graph::empty()
            }
        };
        self.state.reset();
    }

    pub fn pointer_enter(&mut self, node_id: &str, x: f64, y: f64) {
        self.state.pointer_enter(NodeId(node_id.to_string()), x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.state.pointer_move(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.state.pointer_leave();
    }

    /// An empty `node_id` means the click hit no node.
    pub fn click(&mut self, node_id: &str, x: f64, y: f64) {
        let target = if node_id.is_empty() {
            None
        } else {
            Some(NodeId(node_id.to_string()))
        };
        self.state.click(target, x, y);
    }

    /// Id of the topmost node under the pointer, or the empty string.
    pub fn node_at(&self, x: f64, y: f64) -> String {
        interact::node_at(&self.graph, x, y)
            .map(|n| n.id.0.clone())
            .unwrap_or_default()
    }

    /// Current graph as JSON (same envelope as `build_graph`).
    pub fn graph_json(&self) -> String {
        serde_json::to_string(&GraphOutput {
            graph: Some(&self.graph),
            error: None,
        })
        .unwrap()
    }

    /// Current draw list as JSON; call after every pointer event.
    pub fn scene(&self) -> String {
        serde_json::to_string(&render::render(&self.graph, &self.state)).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    #[test]
    fn test_build_applies_host_fallbacks() {
        let graph = build(
            r#"{"title": "  ", "authors": ["Jane Doe", ""]}"#,
            &LayoutConfig::default(),
        )
        .unwrap();

        let center = graph.node(&NodeId::center()).unwrap();
        assert_eq!(center.full_label, "Research Paper");
        assert_eq!(graph.count_of(NodeKind::Author), 1);
    }

    #[test]
    fn test_build_rejects_malformed_json() {
        assert!(build("not json", &LayoutConfig::default()).is_err());
    }
}
