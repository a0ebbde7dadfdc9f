//! Radial knowledge-graph layout for research artifacts: one center node,
//! an optional category, capped author/keyword rings, deterministic angular
//! placement with collision resolution, plus the hover/pin interaction model
//! and the draw list the host view renders from.

pub mod abbrev;
pub mod graph;
pub mod interact;
pub mod layout;
pub mod payload;
pub mod render;
pub mod wasm;

pub use abbrev::{InvalidInput, category_code, initials, truncate_title};
pub use graph::{Edge, Graph, Node, NodeId, NodeKind, Overflow, PointF};
pub use interact::{Focus, InteractionState, node_at};
pub use layout::{LayoutConfig, Resolution, layout_artifact};
pub use payload::{Artifact, ArtifactPayload, normalize, sanitize};
pub use render::{Scene, render};
