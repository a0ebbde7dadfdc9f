// Minimum-separation resolver.
//
// A candidate that lands too close to an already-placed node is pushed
// outward along its own ray from the layout origin, one fixed radial step per
// attempt. The attempt budget is a heuristic bound, not a convergence proof:
// exhausting it returns the last position as-is and the caller records the
// node as degraded instead of aborting the layout.

use crate::graph::{Node, PointF};

use super::LayoutConfig;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Resolution {
    /// Position satisfies the separation constraint.
    Clear(PointF),
    /// Attempt budget exhausted; the position may still collide.
    Degraded(PointF),
}

impl Resolution {
    pub fn pos(self) -> PointF {
        match self {
            Resolution::Clear(p) | Resolution::Degraded(p) => p,
        }
    }

    pub fn is_degraded(self) -> bool {
        matches!(self, Resolution::Degraded(_))
    }
}

/// Resolve `candidate` against every node in `placed`.
pub fn resolve(
    candidate: PointF,
    placed: &[Node],
    min_distance: f64,
    origin: PointF,
    cfg: &LayoutConfig,
) -> Resolution {
    let mut pos = candidate;
    for _ in 0..cfg.collision_attempts {
        if separated(pos, placed, min_distance) {
            return Resolution::Clear(pos);
        }
        let angle = (pos.y - origin.y).atan2(pos.x - origin.x);
        let radius = pos.dist(origin) + cfg.collision_step;
        pos = PointF {
            x: origin.x + radius * angle.cos(),
            y: origin.y + radius * angle.sin(),
        };
    }

    // The last nudge may have resolved the collision; classify honestly.
    if separated(pos, placed, min_distance) {
        Resolution::Clear(pos)
    } else {
        Resolution::Degraded(pos)
    }
}

fn separated(pos: PointF, placed: &[Node], min_distance: f64) -> bool {
    placed.iter().all(|n| pos.dist(n.pos) >= min_distance)
}
