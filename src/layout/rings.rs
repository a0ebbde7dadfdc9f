// Angular placement math for ring nodes.
//
// Angles are in radians, screen coordinates (y grows downward). Slot 0 sits
// at 12 o'clock (-pi/2) and slots advance clockwise. The keyword ring is
// phase-shifted by half a slot so the two rings do not line up spoke-on-spoke.

use std::f64::consts::PI;

use crate::graph::PointF;

/// Evenly spaced ring angle for slot `index` of `count`.
pub fn ring_angle(index: usize, count: usize) -> f64 {
    index as f64 * (2.0 * PI / count as f64) - PI / 2.0
}

/// Ring angle with the half-slot phase shift used by the keyword ring.
pub fn offset_ring_angle(index: usize, count: usize) -> f64 {
    ring_angle(index, count) + PI / count as f64
}

/// Advance an angle out of the guard band around the category direction.
/// The band and nudge widths are tuning constants, not derived values.
pub fn avoid_guard_band(angle: f64, category_angle: f64, band: f64, nudge: f64) -> f64 {
    if (angle - category_angle).abs() < band {
        angle + nudge
    } else {
        angle
    }
}

/// Point at `angle` on the ring of `radius` around `origin`.
pub fn on_ring(origin: PointF, radius: f64, angle: f64) -> PointF {
    PointF {
        x: origin.x + radius * angle.cos(),
        y: origin.y + radius * angle.sin(),
    }
}
