// Scene assembly for the host renderer.
//
// Pure mapping from (graph, interaction state) to a draw list the host
// replays onto whatever surface it owns (SVG in practice). No layout or
// interaction decisions happen here. Order matters: edge lines under node
// circles under labels, tooltip last so it stays on top.

use serde::Serialize;

use crate::graph::{Graph, NodeKind};
use crate::interact::InteractionState;

const EDGE_STROKE: &str = "#06b6d4";
const EDGE_WIDTH: f64 = 2.0;
const EDGE_OPACITY: f64 = 0.6;

const NODE_STROKE_WIDTH: f64 = 2.0;
const FOCUS_STROKE_WIDTH: f64 = 4.0;
const LABEL_FILL: &str = "white";

const TOOLTIP_FILL: &str = "rgba(0, 0, 0, 0.95)";
const TOOLTIP_STROKE: &str = "#3b82f6";
const TOOLTIP_CORNER_RADIUS: f64 = 8.0;
const TOOLTIP_HEIGHT: f64 = 25.0;
const TOOLTIP_MIN_WIDTH: f64 = 100.0;
const TOOLTIP_CHAR_WIDTH: f64 = 8.0;
const TOOLTIP_PAD: f64 = 20.0;
const TOOLTIP_TEXT_X: f64 = 12.0;
const TOOLTIP_TEXT_Y: f64 = 20.0;
const TOOLTIP_FONT_SIZE: f64 = 14.0;

/// Fill and stroke per node kind.
fn palette(kind: NodeKind) -> (&'static str, &'static str) {
    match kind {
        NodeKind::Center => ("#1e40af", "#3b82f6"),
        NodeKind::Category => ("#7c3aed", "#8b5cf6"),
        NodeKind::Author => ("#059669", "#10b981"),
        NodeKind::Keyword => ("#dc2626", "#ef4444"),
    }
}

fn legend_label(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Center => "Title (Center)",
        NodeKind::Category => "Category (Right)",
        NodeKind::Author => "Authors (Inner Ring)",
        NodeKind::Keyword => "Keywords (Outer Ring)",
    }
}

fn ring_name(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Author => "authors",
        NodeKind::Keyword => "keywords",
        _ => "nodes",
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LineCmd {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: &'static str,
    pub width: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CircleCmd {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TextCmd {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub size: f64,
    pub fill: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct TooltipCmd {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    pub corner_radius: f64,
    pub fill: &'static str,
    pub stroke: &'static str,
    pub text: String,
    pub text_x: f64,
    pub text_y: f64,
    pub font_size: f64,
}

/// Pointer binding region for one node; the host wires its enter/leave/click
/// handlers through these.
#[derive(Debug, Clone, Serialize)]
pub struct HitArea {
    pub id: String,
    pub cx: f64,
    pub cy: f64,
    pub r: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// The combined draw list sent to the host view.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    pub lines: Vec<LineCmd>,
    pub circles: Vec<CircleCmd>,
    pub labels: Vec<TextCmd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipCmd>,
    pub hit_areas: Vec<HitArea>,
    pub legend: Vec<LegendEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notices: Vec<String>,
}

pub fn render(graph: &Graph, state: &InteractionState) -> Scene {
    let lines = graph
        .edges
        .iter()
        .filter_map(|edge| {
            let source = graph.node(&edge.source)?;
            let target = graph.node(&edge.target)?;
            Some(LineCmd {
                x1: source.pos.x,
                y1: source.pos.y,
                x2: target.pos.x,
                y2: target.pos.y,
                stroke: EDGE_STROKE,
                width: EDGE_WIDTH,
                opacity: EDGE_OPACITY,
            })
        })
        .collect();

    let mut circles = Vec::with_capacity(graph.nodes.len());
    let mut labels = Vec::with_capacity(graph.nodes.len());
    let mut hit_areas = Vec::with_capacity(graph.nodes.len());

    for node in &graph.nodes {
        let (fill, stroke) = palette(node.kind);
        let focused = state.hovered.as_ref() == Some(&node.id)
            || state.pinned.as_ref() == Some(&node.id);

        circles.push(CircleCmd {
            id: node.id.0.clone(),
            cx: node.pos.x,
            cy: node.pos.y,
            r: node.radius,
            fill,
            stroke,
            stroke_width: if focused {
                FOCUS_STROKE_WIDTH
            } else {
                NODE_STROKE_WIDTH
            },
        });
        labels.push(TextCmd {
            x: node.pos.x,
            y: node.pos.y,
            text: node.short_label.clone(),
            size: node.kind.font_size(),
            fill: LABEL_FILL,
        });
        hit_areas.push(HitArea {
            id: node.id.0.clone(),
            cx: node.pos.x,
            cy: node.pos.y,
            r: node.radius,
        });
    }

    let legend = [
        NodeKind::Center,
        NodeKind::Category,
        NodeKind::Author,
        NodeKind::Keyword,
    ]
    .into_iter()
    .filter_map(|kind| {
        let count = graph.count_of(kind);
        (count > 0).then(|| LegendEntry {
            label: legend_label(kind),
            color: palette(kind).0,
            count,
        })
    })
    .collect();

    let mut notices: Vec<String> = graph
        .overflow
        .iter()
        .map(|o| format!("Showing first {} of {} {}", o.shown, o.total, ring_name(o.kind)))
        .collect();
    if graph.count_of(NodeKind::Author) == 0 && graph.count_of(NodeKind::Keyword) == 0 {
        notices.push("No additional data available for visualization".to_string());
    }

    Scene {
        lines,
        circles,
        labels,
        tooltip: tooltip(graph, state),
        hit_areas,
        legend,
        notices,
    }
}

/// Zero or one tooltip. A stale node id or a missing pointer renders nothing;
/// neither is an error.
fn tooltip(graph: &Graph, state: &InteractionState) -> Option<TooltipCmd> {
    let target = state.tooltip_target(graph)?;
    let anchor = state.tooltip_anchor()?;

    let chars = target.full_label.chars().count() as f64;
    let w = (chars * TOOLTIP_CHAR_WIDTH + TOOLTIP_PAD).max(TOOLTIP_MIN_WIDTH);

    Some(TooltipCmd {
        x: anchor.x,
        y: anchor.y,
        w,
        h: TOOLTIP_HEIGHT,
        corner_radius: TOOLTIP_CORNER_RADIUS,
        fill: TOOLTIP_FILL,
        stroke: TOOLTIP_STROKE,
        text: target.full_label.clone(),
        text_x: TOOLTIP_TEXT_X,
        text_y: TOOLTIP_TEXT_Y,
        font_size: TOOLTIP_FONT_SIZE,
    })
}
