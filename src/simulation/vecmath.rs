//! Small 2D vector helpers used by the gravity terms

use super::states::NVec2;

/// Vector pointing from `from` to `to`
pub fn displacement(from: &NVec2, to: &NVec2) -> NVec2 {
    to - from
}

/// Euclidean distance between two points
pub fn distance(from: &NVec2, to: &NVec2) -> f64 {
    displacement(from, to).norm()
}

/// Unit vector from `from` toward `to`, or `None` when the points coincide
pub fn unit_direction(from: &NVec2, to: &NVec2) -> Option<NVec2> {
    let d = displacement(from, to);
    let r = d.norm();
    if r > 0.0 {
        Some(d / r)
    } else {
        None
    }
}

/// Newtonian attraction felt by the body at `from` due to the body at `to`
///
/// F = G * m_from * m_to / r^2, directed from `from` toward `to`.
/// Coincident points contribute nothing.
pub fn pair_force(g: f64, m_from: f64, m_to: f64, from: &NVec2, to: &NVec2) -> NVec2 {
    let d = displacement(from, to);
    let r = d.norm();
    if r == 0.0 {
        return NVec2::zeros();
    }
    let f = g * m_from * m_to / (r * r);
    // f * (dx / r, dy / r)
    NVec2::new(f * (d.x / r), f * (d.y / r))
}
