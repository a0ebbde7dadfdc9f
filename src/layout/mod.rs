// Deterministic radial layouter for a research artifact.
//
// Goals:
// - Deterministic: no randomness, input order fixes angular order
// - Small and bounded: one center, one category, two capped rings
// - Collision-aware: every peripheral node is separation-checked against
//   everything already placed before it is inserted
//
// Submodules:
// - rings: angular placement math
// - collision: minimum-separation resolver
//
// Output:
// - Graph with final positions, one center edge per peripheral node, and the
//   ids whose resolution ran out of attempts.

use std::f64::consts::PI;

use log::warn;

use crate::abbrev::{self, InvalidInput};
use crate::graph::{Edge, Graph, Node, NodeId, NodeKind, Overflow, PointF};
use crate::payload::Artifact;

mod collision;
mod rings;

pub use collision::{Resolution, resolve};

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Drawing surface size; the center node sits at its midpoint.
    pub canvas_w: f64,
    pub canvas_h: f64,
    /// X offset of the category node from the center.
    pub category_offset: f64,
    /// Ring radius for author nodes.
    pub author_ring: f64,
    /// Ring radius for keyword nodes.
    pub keyword_ring: f64,
    /// Hard cap on author nodes, independent of input length.
    pub max_authors: usize,
    /// Hard cap on keyword nodes.
    pub max_keywords: usize,
    /// Minimum separation between an author node and anything already placed.
    pub author_min_distance: f64,
    /// Minimum separation for keyword nodes (the denser outer ring gets a
    /// larger budget).
    pub keyword_min_distance: f64,
    /// Angular band around the category direction that author slots avoid.
    pub guard_band: f64,
    /// Angle added to a slot that falls inside the guard band.
    pub guard_nudge: f64,
    /// Radial step per collision-resolution attempt.
    pub collision_step: f64,
    /// Attempt budget for collision resolution.
    pub collision_attempts: usize,
    /// Maximum length of the center label before truncation.
    pub title_max_len: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_w: 900.0,
            canvas_h: 600.0,
            category_offset: 250.0,
            author_ring: 160.0,
            keyword_ring: 250.0,
            max_authors: 12,
            max_keywords: 10,
            author_min_distance: 80.0,
            keyword_min_distance: 90.0,
            guard_band: PI / 6.0,
            guard_nudge: PI / 3.0,
            collision_step: 20.0,
            collision_attempts: 10,
            title_max_len: abbrev::TITLE_MAX_LEN,
        }
    }
}

impl LayoutConfig {
    pub fn center(&self) -> PointF {
        PointF {
            x: self.canvas_w / 2.0,
            y: self.canvas_h / 2.0,
        }
    }
}

/// Build the full graph for one artifact. Rebuilt wholesale on every payload
/// change; there is no incremental update.
pub fn layout_artifact(artifact: &Artifact, cfg: &LayoutConfig) -> Result<Graph, InvalidInput> {
    let center = cfg.center();
    let mut nodes: Vec<Node> = Vec::new();
    let mut edges: Vec<Edge> = Vec::new();
    let mut degraded: Vec<NodeId> = Vec::new();
    let mut overflow: Vec<Overflow> = Vec::new();

    nodes.push(Node::new(
        NodeId::center(),
        NodeKind::Center,
        abbrev::truncate_title(&artifact.title, cfg.title_max_len),
        artifact.title.clone(),
        center,
    ));

    // Direction of the category offset from the center; author slots steer
    // around it.
    let category_angle = artifact
        .category
        .as_ref()
        .map(|_| 0.0f64.atan2(cfg.category_offset));

    if let Some(category) = &artifact.category {
        let code = abbrev::category_code(category)?;
        nodes.push(Node::new(
            NodeId::category(),
            NodeKind::Category,
            code,
            category.clone(),
            PointF {
                x: center.x + cfg.category_offset,
                y: center.y,
            },
        ));
        edges.push(Edge {
            source: NodeId::center(),
            target: NodeId::category(),
        });
    }

    let author_count = artifact.authors.len().min(cfg.max_authors);
    if author_count < artifact.authors.len() {
        overflow.push(Overflow {
            kind: NodeKind::Author,
            shown: author_count,
            total: artifact.authors.len(),
        });
    }
    for (index, name) in artifact.authors.iter().take(author_count).enumerate() {
        let mut angle = rings::ring_angle(index, author_count);
        if let Some(category_angle) = category_angle {
            angle = rings::avoid_guard_band(angle, category_angle, cfg.guard_band, cfg.guard_nudge);
        }
        let candidate = rings::on_ring(center, cfg.author_ring, angle);
        let resolved = collision::resolve(candidate, &nodes, cfg.author_min_distance, center, cfg);

        let id = NodeId::author(index);
        if resolved.is_degraded() {
            warn!(
                "layout degraded: {id} still collides after {} attempts",
                cfg.collision_attempts
            );
            degraded.push(id.clone());
        }
        nodes.push(Node::new(
            id.clone(),
            NodeKind::Author,
            abbrev::initials(name)?,
            name.clone(),
            resolved.pos(),
        ));
        edges.push(Edge {
            source: NodeId::center(),
            target: id,
        });
    }

    let keyword_count = artifact.keywords.len().min(cfg.max_keywords);
    if keyword_count < artifact.keywords.len() {
        overflow.push(Overflow {
            kind: NodeKind::Keyword,
            shown: keyword_count,
            total: artifact.keywords.len(),
        });
    }
    for (index, term) in artifact.keywords.iter().take(keyword_count).enumerate() {
        // Half-slot phase shift keeps the outer ring off the author spokes.
        let angle = rings::offset_ring_angle(index, keyword_count);
        let candidate = rings::on_ring(center, cfg.keyword_ring, angle);
        let resolved = collision::resolve(candidate, &nodes, cfg.keyword_min_distance, center, cfg);

        let id = NodeId::keyword(index);
        if resolved.is_degraded() {
            warn!(
                "layout degraded: {id} still collides after {} attempts",
                cfg.collision_attempts
            );
            degraded.push(id.clone());
        }
        nodes.push(Node::new(
            id.clone(),
            NodeKind::Keyword,
            abbrev::initials(term)?,
            term.clone(),
            resolved.pos(),
        ));
        edges.push(Edge {
            source: NodeId::center(),
            target: id,
        });
    }

    Ok(Graph {
        nodes,
        edges,
        degraded,
        overflow,
    })
}
