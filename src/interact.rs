// Hover / pin interaction state.
//
// Three states govern the tooltip: Idle, Hovering while the pointer sits on a
// node, and Pinned after a click. A pin survives hovering other nodes and is
// dropped by clicking its node again (or clicking empty space). The tooltip
// anchor derives from the pointer at event time, never from the node's graph
// position: it follows the cursor during hover and freezes where the pin
// click happened.
//
// The host owns one of these per displayed graph and must reset it whenever
// the payload (and therefore the graph) changes.

use crate::graph::{Graph, Node, NodeId, PointF};

/// Margin between the pointer and the tooltip box, so the box never sits
/// under the cursor.
pub const TOOLTIP_DX: f64 = 15.0;
pub const TOOLTIP_DY: f64 = -50.0;

/// Observable state of the interaction machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Focus {
    Idle,
    Hovering(NodeId),
    Pinned(NodeId),
}

#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    pub hovered: Option<NodeId>,
    pub pinned: Option<NodeId>,
    pub pointer: Option<PointF>,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to Idle. Called on payload change: a rebuilt graph invalidates
    /// every id this state may hold.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Pinned wins over hovered.
    pub fn focus(&self) -> Focus {
        if let Some(id) = &self.pinned {
            Focus::Pinned(id.clone())
        } else if let Some(id) = &self.hovered {
            Focus::Hovering(id.clone())
        } else {
            Focus::Idle
        }
    }

    pub fn pointer_enter(&mut self, id: NodeId, x: f64, y: f64) {
        self.hovered = Some(id);
        self.track(x, y);
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.track(x, y);
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = None;
        if self.pinned.is_none() {
            self.pointer = None;
        }
    }

    /// A click on a node pins it; re-clicking the pinned node toggles the pin
    /// off, and a click that hits nothing closes it.
    pub fn click(&mut self, target: Option<NodeId>, x: f64, y: f64) {
        match target {
            Some(id) if self.pinned.as_ref() == Some(&id) => self.reset(),
            Some(id) => {
                self.pinned = Some(id);
                self.pointer = Some(PointF { x, y });
            }
            None => {
                if self.pinned.is_some() {
                    self.reset();
                }
            }
        }
    }

    /// Node whose full label the tooltip shows. A stale id (graph rebuilt
    /// under live interaction state) yields no target rather than an error.
    pub fn tooltip_target<'g>(&self, graph: &'g Graph) -> Option<&'g Node> {
        let id = self.pinned.as_ref().or(self.hovered.as_ref())?;
        graph.node(id)
    }

    pub fn tooltip_anchor(&self) -> Option<PointF> {
        let p = self.pointer?;
        Some(PointF {
            x: p.x + TOOLTIP_DX,
            y: p.y + TOOLTIP_DY,
        })
    }

    // While pinned the anchor stays where the pin click happened.
    fn track(&mut self, x: f64, y: f64) {
        if self.pinned.is_none() {
            self.pointer = Some(PointF { x, y });
        }
    }
}

/// Topmost node under the pointer. Later nodes draw on top of earlier ones,
/// so the last hit wins.
pub fn node_at(graph: &Graph, x: f64, y: f64) -> Option<&Node> {
    let p = PointF { x, y };
    let mut found = None;
    for node in &graph.nodes {
        if p.dist(node.pos) <= node.radius {
            found = Some(node);
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::NodeKind;

    fn make_graph() -> Graph {
        let mut graph = Graph::empty();
        graph.nodes.push(Node::new(
            NodeId::center(),
            NodeKind::Center,
            "T",
            "The Full Title",
            PointF { x: 450.0, y: 300.0 },
        ));
        graph.nodes.push(Node::new(
            NodeId::author(0),
            NodeKind::Author,
            "JD",
            "Jane Doe",
            PointF { x: 450.0, y: 140.0 },
        ));
        graph
    }

    fn a() -> NodeId {
        NodeId::author(0)
    }

    fn b() -> NodeId {
        NodeId::center()
    }

    #[test]
    fn test_hover_cycle() {
        let mut state = InteractionState::new();
        assert_eq!(state.focus(), Focus::Idle);

        state.pointer_enter(a(), 100.0, 100.0);
        assert_eq!(state.focus(), Focus::Hovering(a()));

        state.pointer_leave();
        assert_eq!(state.focus(), Focus::Idle);
        assert_eq!(state.pointer, None);
    }

    #[test]
    fn test_pin_toggles_off_to_idle() {
        let mut state = InteractionState::new();
        state.pointer_enter(a(), 100.0, 100.0);
        state.click(Some(a()), 100.0, 100.0);
        assert_eq!(state.focus(), Focus::Pinned(a()));

        state.click(Some(a()), 100.0, 100.0);
        assert_eq!(state.focus(), Focus::Idle);
    }

    #[test]
    fn test_click_other_repins_directly() {
        let mut state = InteractionState::new();
        state.click(Some(a()), 100.0, 100.0);
        state.click(Some(b()), 200.0, 200.0);
        assert_eq!(state.focus(), Focus::Pinned(b()));
    }

    #[test]
    fn test_pin_survives_hovering_other_nodes() {
        let graph = make_graph();
        let mut state = InteractionState::new();
        state.click(Some(a()), 100.0, 100.0);

        state.pointer_enter(b(), 300.0, 300.0);
        assert_eq!(state.focus(), Focus::Pinned(a()));
        assert_eq!(state.tooltip_target(&graph).unwrap().full_label, "Jane Doe");

        state.pointer_leave();
        assert_eq!(state.focus(), Focus::Pinned(a()));
    }

    #[test]
    fn test_anchor_tracks_then_freezes() {
        let mut state = InteractionState::new();
        state.pointer_enter(a(), 100.0, 100.0);
        state.pointer_move(120.0, 110.0);
        let anchor = state.tooltip_anchor().unwrap();
        assert_eq!((anchor.x, anchor.y), (120.0 + TOOLTIP_DX, 110.0 + TOOLTIP_DY));

        state.click(Some(a()), 130.0, 115.0);
        state.pointer_move(400.0, 400.0);
        let anchor = state.tooltip_anchor().unwrap();
        assert_eq!((anchor.x, anchor.y), (130.0 + TOOLTIP_DX, 115.0 + TOOLTIP_DY));
    }

    #[test]
    fn test_click_empty_space_closes_pin() {
        let mut state = InteractionState::new();
        state.click(Some(a()), 100.0, 100.0);
        state.click(None, 50.0, 50.0);
        assert_eq!(state.focus(), Focus::Idle);

        // Without a pin, empty clicks are inert.
        state.pointer_enter(a(), 10.0, 10.0);
        state.click(None, 50.0, 50.0);
        assert_eq!(state.focus(), Focus::Hovering(a()));
    }

    #[test]
    fn test_tooltip_target_prefers_pinned() {
        let graph = make_graph();
        let mut state = InteractionState::new();
        state.pointer_enter(b(), 10.0, 10.0);
        assert_eq!(
            state.tooltip_target(&graph).unwrap().full_label,
            "The Full Title"
        );

        state.click(Some(a()), 10.0, 10.0);
        assert_eq!(state.tooltip_target(&graph).unwrap().full_label, "Jane Doe");
    }

    #[test]
    fn test_stale_id_yields_no_target() {
        let graph = make_graph();
        let mut state = InteractionState::new();
        state.click(Some(NodeId::keyword(7)), 10.0, 10.0);
        assert!(state.tooltip_target(&graph).is_none());
    }

    #[test]
    fn test_node_at_prefers_topmost() {
        let mut graph = make_graph();
        // A keyword drawn after the center, overlapping it.
        graph.nodes.push(Node::new(
            NodeId::keyword(0),
            NodeKind::Keyword,
            "B",
            "bone",
            PointF { x: 470.0, y: 300.0 },
        ));

        // A point covered by both circles resolves to the later-drawn node.
        assert_eq!(node_at(&graph, 460.0, 300.0).unwrap().id, NodeId::keyword(0));
        assert_eq!(node_at(&graph, 400.0, 300.0).unwrap().id, b());
        assert_eq!(node_at(&graph, 450.0, 170.0).unwrap().id, a());
        assert!(node_at(&graph, 0.0, 0.0).is_none());
    }
}
