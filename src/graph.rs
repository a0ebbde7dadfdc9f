// Graph data model.
//
// A graph is one center node, at most one category node, and two capped rings
// (authors, keywords), every peripheral node connected to the center by
// exactly one edge. Node kind is decided once, here, at construction time;
// nothing downstream re-derives it from id strings.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct PointF {
    pub x: f64,
    pub y: f64,
}

impl PointF {
    pub fn dist(self, other: PointF) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Center,
    Category,
    Author,
    Keyword,
}

impl NodeKind {
    /// Visual circle radius, fixed per kind.
    pub fn radius(self) -> f64 {
        match self {
            NodeKind::Center => 60.0,
            NodeKind::Category => 45.0,
            NodeKind::Author => 32.0,
            NodeKind::Keyword => 30.0,
        }
    }

    /// Font size of the label drawn inside the circle.
    pub fn font_size(self) -> f64 {
        match self {
            NodeKind::Center => 8.0,
            _ => 10.0,
        }
    }
}

/// Stable node identifier, unique within one graph instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn center() -> Self {
        NodeId("title".to_string())
    }

    pub fn category() -> Self {
        NodeId("category".to_string())
    }

    pub fn author(index: usize) -> Self {
        NodeId(format!("author-{index}"))
    }

    pub fn keyword(index: usize) -> Self {
        NodeId(format!("keyword-{index}"))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Abbreviated text drawn inside the circle.
    pub short_label: String,
    /// Untruncated text shown in the tooltip.
    pub full_label: String,
    pub pos: PointF,
    pub radius: f64,
}

impl Node {
    pub fn new(
        id: NodeId,
        kind: NodeKind,
        short_label: impl Into<String>,
        full_label: impl Into<String>,
        pos: PointF,
    ) -> Self {
        Self {
            id,
            kind,
            short_label: short_label.into(),
            full_label: full_label.into(),
            pos,
            radius: kind.radius(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Edge {
    pub source: NodeId,
    pub target: NodeId,
}

/// Shown/total counts for a ring whose input exceeded its cap.
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Overflow {
    pub kind: NodeKind,
    pub shown: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    /// Ids whose collision resolution ran out of attempts (best-effort layout).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub degraded: Vec<NodeId>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overflow: Vec<Overflow>,
}

impl Graph {
    /// Placeholder used by the boundary when a payload cannot be built.
    pub fn empty() -> Self {
        Graph {
            nodes: Vec::new(),
            edges: Vec::new(),
            degraded: Vec::new(),
            overflow: Vec::new(),
        }
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.nodes.iter().filter(|n| n.kind == kind).count()
    }
}
