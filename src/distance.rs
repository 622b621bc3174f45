use crate::point::{Coordinate, DemandPoint};

/// Euclidean distance between two plane points
///
/// Inputs must be finite; NaN or infinite coordinates are a caller error and
/// propagate into the result unchecked.
#[inline]
pub fn distance(a: &Coordinate, b: &Coordinate) -> f64 {
    a.distance_to(b)
}

/// Total weighted transport cost of serving every point from `center`
///
/// Computes `Σ distance(center, p) * p.weight`. An empty point set costs 0, and
/// a point sitting on the center contributes 0.
pub fn total_cost(center: &Coordinate, points: &[DemandPoint]) -> f64 {
    points
        .iter()
        .map(|p| distance(center, &p.coordinate) * p.weight)
        .sum()
}

/// Signed per-axis displacement between two successive centroids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub dx: f64,
    pub dy: f64,
}

impl Movement {
    pub fn between(previous: &Coordinate, next: &Coordinate) -> Self {
        Self {
            dx: next.x - previous.x,
            dy: next.y - previous.y,
        }
    }

    /// True iff both axis components are strictly below `threshold` in magnitude
    #[inline]
    pub fn is_within(&self, threshold: f64) -> bool {
        self.dx.abs() < threshold && self.dy.abs() < threshold
    }

    /// Straight-line length of the displacement
    pub fn magnitude(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

/// Per-axis convergence test between two successive centroids.
///
/// Each axis is tested on its own against `threshold`; the displacement is not
/// combined into a radial distance. A diagonal move of just under
/// `threshold` on each axis still counts as converged.
pub fn has_converged(previous: &Coordinate, next: &Coordinate, threshold: f64) -> bool {
    Movement::between(previous, next).is_within(threshold)
}
