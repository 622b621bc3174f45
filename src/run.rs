use crate::algorithm::{initialize, step, IterationStep};
use crate::config::SolverConfig;
use crate::distance::{has_converged, Movement};
use crate::error::SolverError;
use crate::point::{Coordinate, DemandPoint};
use ndarray::Array2;
use std::collections::HashSet;

/// Final report of a run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    /// Number of iterative steps taken after the initial estimate
    pub iterations: usize,
    /// Whether the last step satisfied the convergence test
    pub converged: bool,
    /// Centroid of the last step
    pub location: Coordinate,
    /// Total cost reported by the last step
    pub total_cost: f64,
}

/// A center-of-gravity run over a fixed set of demand points.
///
/// Owns the point set and the ordered step history. The run starts in the
/// running state holding only the initial estimate and becomes converged the
/// first time a new step lies within the threshold of its predecessor on both
/// axes. A converged run refuses to advance until it is [`reset`](Self::reset).
///
/// # Example
///
/// ```
/// use center_of_gravity_rs::{DemandPoint, SimulationRun, SolverConfig};
///
/// let points = vec![
///     DemandPoint::new("A", (0.0, 0.0), 10.0).unwrap(),
///     DemandPoint::new("B", (10.0, 0.0), 10.0).unwrap(),
/// ];
///
/// let mut run = SimulationRun::new(points, SolverConfig::default()).unwrap();
/// run.advance().unwrap();
/// assert!(run.is_converged());
/// assert!(!run.can_advance());
/// ```
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Run configuration
    config: SolverConfig,

    /// Demand points, read-only for the lifetime of the run
    points: Vec<DemandPoint>,

    /// Steps in production order; index 0 is the initial estimate
    history: Vec<IterationStep>,

    converged: bool,
}

impl SimulationRun {
    /// Start a run by computing the initial estimate.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, two points share an
    /// id, or the point set is empty or carries no positive weight.
    pub fn new(points: Vec<DemandPoint>, config: SolverConfig) -> Result<Self, SolverError> {
        config.validate()?;

        {
            let mut seen = HashSet::with_capacity(points.len());
            if let Some(dup) = points.iter().find(|p| !seen.insert(p.id())) {
                return Err(SolverError::DuplicateId(dup.id().to_string()));
            }
        }

        let initial = initialize(&points)?;

        tracing::debug!(
            points = points.len(),
            threshold = config.threshold,
            x = initial.centroid().x,
            y = initial.centroid().y,
            "initial center of gravity computed"
        );

        Ok(Self {
            config,
            points,
            history: vec![initial],
            converged: false,
        })
    }

    /// Whether another step may be requested
    pub fn can_advance(&self) -> bool {
        !self.converged
    }

    /// Compute, record and return the next step.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::AlreadyConverged`] if the run is already converged.
    pub fn advance(&mut self) -> Result<&IterationStep, SolverError> {
        if self.converged {
            return Err(SolverError::AlreadyConverged {
                step: self.current_iteration(),
            });
        }

        let current = self.current();
        let previous_center = current.centroid();
        let next = step(&previous_center, &self.points, current.index() + 1)?;

        let movement = Movement::between(&previous_center, &next.centroid());
        self.converged = has_converged(&previous_center, &next.centroid(), self.config.threshold);

        if self.config.verbose {
            tracing::info!(
                step = next.index(),
                x = %format!("{:.4}", next.centroid().x),
                y = %format!("{:.4}", next.centroid().y),
                dx = %format!("{:.4}", movement.dx),
                dy = %format!("{:.4}", movement.dy),
                shift = %format!("{:.4}", movement.magnitude()),
                cost = %format!("{:.2}", next.total_cost()),
                "iteration"
            );
        } else {
            tracing::debug!(
                step = next.index(),
                x = next.centroid().x,
                y = next.centroid().y,
                dx = movement.dx,
                dy = movement.dy,
                shift = movement.magnitude(),
                cost = next.total_cost(),
                "iteration"
            );
        }

        if self.converged {
            tracing::info!(
                step = next.index(),
                threshold = self.config.threshold,
                "converged"
            );
        }

        self.history.push(next);
        Ok(self.current())
    }

    /// Advance until converged or `max_iters` iterative steps exist.
    ///
    /// Returns immediately with the current summary if the run is already converged.
    pub fn run_to_convergence(&mut self) -> Result<RunSummary, SolverError> {
        while self.can_advance() && self.current_iteration() < self.config.max_iters {
            self.advance()?;
        }

        if !self.converged {
            tracing::warn!(
                max_iters = self.config.max_iters,
                threshold = self.config.threshold,
                "stopped without converging"
            );
        }

        Ok(self.summary())
    }

    /// Drop every step after the initial estimate and clear the convergence flag
    pub fn reset(&mut self) {
        self.history.truncate(1);
        self.converged = false;
    }

    /// Report of the latest step
    pub fn summary(&self) -> RunSummary {
        let current = self.current();
        RunSummary {
            iterations: current.index(),
            converged: self.converged,
            location: current.centroid(),
            total_cost: current.total_cost(),
        }
    }

    /// Latest step
    pub fn current(&self) -> &IterationStep {
        // history always holds at least the initial estimate
        &self.history[self.history.len() - 1]
    }

    /// Step before the latest one, if any
    pub fn previous(&self) -> Option<&IterationStep> {
        self.history.len().checked_sub(2).map(|i| &self.history[i])
    }

    /// Displacement produced by the latest step, if any
    pub fn last_movement(&self) -> Option<Movement> {
        self.previous()
            .map(|prev| Movement::between(&prev.centroid(), &self.current().centroid()))
    }

    /// Index of the latest step
    pub fn current_iteration(&self) -> usize {
        self.current().index()
    }

    pub fn history(&self) -> &[IterationStep] {
        &self.history
    }

    pub fn is_converged(&self) -> bool {
        self.converged
    }

    pub fn points(&self) -> &[DemandPoint] {
        &self.points
    }

    pub fn threshold(&self) -> f64 {
        self.config.threshold
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }
}

/// Export a step history as rows of `[index, x, y, total_cost]`
pub fn history_to_array(history: &[IterationStep]) -> Array2<f64> {
    let mut out = Array2::zeros((history.len(), 4));
    for (mut row, s) in out.outer_iter_mut().zip(history) {
        row[0] = s.index() as f64;
        row[1] = s.centroid().x;
        row[2] = s.centroid().y;
        row[3] = s.total_cost();
    }
    out
}
