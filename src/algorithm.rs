use crate::config::ZERO_DISTANCE_EPSILON;
use crate::distance::{distance, total_cost};
use crate::error::SolverError;
use crate::point::{Coordinate, DemandPoint};

/// Contribution of one demand point to a centroid update
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    /// Id of the demand point
    pub id: String,
    /// Multiplier applied to the point's coordinates: its weight for the
    /// initial estimate, `weight / distance` for an iterative step
    pub factor: f64,
}

/// Numerator and denominator sums behind a centroid.
///
/// The denominators of both axes are equal for every step kind, but are kept
/// separately so a display can render each axis as its own fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceTerms {
    pub numerator_x: f64,
    pub denominator_x: f64,
    pub numerator_y: f64,
    pub denominator_y: f64,
    pub components: Vec<Component>,
}

/// How a step's centroid was derived. Kept for display only.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculationTrace {
    /// Plain weighted average of the point coordinates
    Initial(TraceTerms),
    /// Weight-over-distance update from the previous centroid
    Iterative(TraceTerms),
}

impl CalculationTrace {
    pub fn terms(&self) -> &TraceTerms {
        match self {
            CalculationTrace::Initial(terms) | CalculationTrace::Iterative(terms) => terms,
        }
    }

    /// Formula for the x axis; the y axis is analogous
    pub fn formula(&self) -> &'static str {
        match self {
            CalculationTrace::Initial(_) => "X = Σ(Wi·Xi) / ΣWi",
            CalculationTrace::Iterative(_) => "X = Σ(Wi·Xi/di) / Σ(Wi/di)",
        }
    }
}

/// Result of a single solver step
#[derive(Debug, Clone, PartialEq)]
pub struct IterationStep {
    index: usize,
    centroid: Coordinate,
    total_cost: f64,
    trace: CalculationTrace,
}

impl IterationStep {
    /// Step number: 0 for the initial estimate
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn centroid(&self) -> Coordinate {
        self.centroid
    }

    /// Weighted distance cost at this step's centroid.
    ///
    /// Always 0 for step 0: the initial estimate is reported as not yet
    /// evaluated, and display code keys on that.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn trace(&self) -> &CalculationTrace {
        &self.trace
    }

    pub fn is_initial(&self) -> bool {
        matches!(self.trace, CalculationTrace::Initial(_))
    }
}

fn validate(points: &[DemandPoint]) -> Result<(), SolverError> {
    if points.is_empty() {
        return Err(SolverError::EmptyPointSet);
    }

    let total_weight: f64 = points.iter().map(|p| p.weight).sum();
    if total_weight <= 0.0 {
        return Err(SolverError::ZeroTotalWeight);
    }

    Ok(())
}

/// Divide the accumulated sums, rejecting sums that underflowed to zero or
/// overflowed to infinity.
fn centroid_from_sums(
    numerator_x: f64,
    numerator_y: f64,
    denominator: f64,
) -> Result<Coordinate, SolverError> {
    if denominator == 0.0 {
        return Err(SolverError::ZeroTotalWeight);
    }

    let centroid = Coordinate::new(numerator_x / denominator, numerator_y / denominator);
    if !denominator.is_finite() || !centroid.x.is_finite() || !centroid.y.is_finite() {
        return Err(SolverError::InvalidWeight(format!(
            "weighted sums are not finite (numerator = ({}, {}), denominator = {})",
            numerator_x, numerator_y, denominator
        )));
    }

    Ok(centroid)
}

/// Compute the initial centroid estimate (step 0)
///
/// Formula: `X = Σ(Wi·Xi) / ΣWi`, `Y` analogous.
///
/// # Errors
///
/// Returns [`SolverError::EmptyPointSet`] for an empty slice and
/// [`SolverError::ZeroTotalWeight`] if every weight is zero. Weights so large
/// that the sums overflow give [`SolverError::InvalidWeight`].
pub fn initialize(points: &[DemandPoint]) -> Result<IterationStep, SolverError> {
    validate(points)?;

    let mut numerator_x = 0.0;
    let mut numerator_y = 0.0;
    let mut denominator = 0.0;
    let mut components = Vec::with_capacity(points.len());

    for point in points {
        numerator_x += point.weight * point.coordinate.x;
        numerator_y += point.weight * point.coordinate.y;
        denominator += point.weight;
        components.push(Component {
            id: point.id.clone(),
            factor: point.weight,
        });
    }

    let centroid = centroid_from_sums(numerator_x, numerator_y, denominator)?;

    Ok(IterationStep {
        index: 0,
        centroid,
        total_cost: 0.0,
        trace: CalculationTrace::Initial(TraceTerms {
            numerator_x,
            denominator_x: denominator,
            numerator_y,
            denominator_y: denominator,
            components,
        }),
    })
}

/// Compute the next centroid from `current` (one Weiszfeld-style iteration)
///
/// Each point pulls with factor `Wi / di`, where `di` is its distance to
/// `current`. A point lying exactly on `current` has its distance replaced by
/// [`ZERO_DISTANCE_EPSILON`], so it pulls very hard instead of infinitely.
///
/// # Errors
///
/// Same conditions as [`initialize`]. Weights so small that every
/// `Wi / di` underflows to zero also give [`SolverError::ZeroTotalWeight`].
pub fn step(
    current: &Coordinate,
    points: &[DemandPoint],
    index: usize,
) -> Result<IterationStep, SolverError> {
    validate(points)?;

    let mut numerator_x = 0.0;
    let mut numerator_y = 0.0;
    let mut denominator = 0.0;
    let mut components = Vec::with_capacity(points.len());

    for point in points {
        let mut d = distance(current, &point.coordinate);
        if d == 0.0 {
            tracing::debug!(
                point = %point.id,
                step = index,
                epsilon = ZERO_DISTANCE_EPSILON,
                "point coincides with current center, substituting epsilon distance"
            );
            d = ZERO_DISTANCE_EPSILON;
        }

        let factor = point.weight / d;
        numerator_x += factor * point.coordinate.x;
        numerator_y += factor * point.coordinate.y;
        denominator += factor;
        components.push(Component {
            id: point.id.clone(),
            factor,
        });
    }

    let centroid = centroid_from_sums(numerator_x, numerator_y, denominator)?;
    let cost = total_cost(&centroid, points);

    Ok(IterationStep {
        index,
        centroid,
        total_cost: cost,
        trace: CalculationTrace::Iterative(TraceTerms {
            numerator_x,
            denominator_x: denominator,
            numerator_y,
            denominator_y: denominator,
            components,
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn point(id: &str, x: f64, y: f64, weight: f64) -> DemandPoint {
        DemandPoint::new(id, (x, y), weight).unwrap()
    }

    fn symmetric_pair() -> Vec<DemandPoint> {
        vec![point("A", 0.0, 0.0, 10.0), point("B", 10.0, 0.0, 10.0)]
    }

    #[test]
    fn test_initialize_symmetric_pair() {
        let init = initialize(&symmetric_pair()).unwrap();

        assert_eq!(init.index(), 0);
        assert_eq!(init.centroid(), Coordinate::new(5.0, 0.0));
        assert_eq!(init.total_cost(), 0.0);
        assert!(init.is_initial());

        let terms = init.trace().terms();
        assert_eq!(terms.numerator_x, 100.0);
        assert_eq!(terms.numerator_y, 0.0);
        assert_eq!(terms.denominator_x, 20.0);
        assert_eq!(terms.denominator_y, 20.0);
        assert_eq!(terms.components.len(), 2);
    }

    #[test]
    fn test_step_symmetric_pair_is_fixed() {
        let points = symmetric_pair();
        let next = step(&Coordinate::new(5.0, 0.0), &points, 1).unwrap();

        assert_eq!(next.index(), 1);
        assert_eq!(next.centroid(), Coordinate::new(5.0, 0.0));
        assert_relative_eq!(next.total_cost(), 100.0, epsilon = 1e-12);
        assert!(!next.is_initial());

        let terms = next.trace().terms();
        assert_relative_eq!(terms.denominator_x, 4.0);
        assert_relative_eq!(terms.numerator_x, 20.0);
    }

    #[test]
    fn test_initialize_weighted_average() {
        let points = vec![point("a", 0.0, 0.0, 1.0), point("b", 4.0, 8.0, 3.0)];
        let init = initialize(&points).unwrap();
        assert_relative_eq!(init.centroid().x, 3.0);
        assert_relative_eq!(init.centroid().y, 6.0);
    }

    #[test]
    fn test_initialize_empty() {
        assert_eq!(initialize(&[]), Err(SolverError::EmptyPointSet));
    }

    #[test]
    fn test_initialize_zero_weight() {
        let points = vec![point("a", 0.0, 0.0, 0.0), point("b", 1.0, 1.0, 0.0)];
        assert_eq!(initialize(&points), Err(SolverError::ZeroTotalWeight));
    }

    #[test]
    fn test_step_zero_weight() {
        let points = vec![point("a", 0.0, 0.0, 0.0), point("b", 1.0, 1.0, 0.0)];
        let result = step(&Coordinate::new(0.5, 0.5), &points, 1);
        assert_eq!(result, Err(SolverError::ZeroTotalWeight));
    }

    #[test]
    fn test_step_empty() {
        let result = step(&Coordinate::new(0.0, 0.0), &[], 1);
        assert_eq!(result, Err(SolverError::EmptyPointSet));
    }

    #[test]
    fn test_zero_weight_point_is_ignored() {
        let points = vec![
            point("a", 0.0, 0.0, 5.0),
            point("b", 2.0, 0.0, 5.0),
            point("ghost", 100.0, 100.0, 0.0),
        ];
        let init = initialize(&points).unwrap();
        assert_relative_eq!(init.centroid().x, 1.0);
        assert_relative_eq!(init.centroid().y, 0.0);

        let next = step(&init.centroid(), &points, 1).unwrap();
        assert_relative_eq!(next.centroid().x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(next.centroid().y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_step_coincident_point_uses_epsilon() {
        // Current center sits exactly on point "a"
        let points = vec![point("a", 0.0, 0.0, 1.0), point("b", 10.0, 0.0, 1.0)];
        let next = step(&Coordinate::new(0.0, 0.0), &points, 3).unwrap();

        let terms = next.trace().terms();
        assert_relative_eq!(terms.components[0].factor, 1.0 / ZERO_DISTANCE_EPSILON);
        assert_relative_eq!(terms.components[1].factor, 0.1);

        // The coincident point dominates but the result stays finite
        assert!(next.centroid().x.is_finite());
        assert!(next.centroid().x > 0.0 && next.centroid().x < 1e-3);
        assert_eq!(next.index(), 3);
    }

    #[test]
    fn test_step_underflowing_factors() {
        // Smallest subnormal weights: the initial average survives, but each
        // weight / distance underflows to zero
        let tiny = f64::from_bits(1);
        let points = vec![point("A", 0.0, 0.0, tiny), point("B", 10.0, 0.0, tiny)];

        let init = initialize(&points).unwrap();
        assert_eq!(init.centroid(), Coordinate::new(5.0, 0.0));

        let result = step(&init.centroid(), &points, 1);
        assert_eq!(result, Err(SolverError::ZeroTotalWeight));
    }

    #[test]
    fn test_initialize_overflowing_weights() {
        let points = vec![
            point("A", 0.0, 0.0, f64::MAX),
            point("B", 10.0, 0.0, f64::MAX),
        ];

        assert!(matches!(
            initialize(&points),
            Err(SolverError::InvalidWeight(_))
        ));
    }

    #[test]
    fn test_formula_by_kind() {
        let points = symmetric_pair();
        let init = initialize(&points).unwrap();
        let next = step(&init.centroid(), &points, 1).unwrap();

        assert_eq!(init.trace().formula(), "X = Σ(Wi·Xi) / ΣWi");
        assert_eq!(next.trace().formula(), "X = Σ(Wi·Xi/di) / Σ(Wi/di)");
    }
}
