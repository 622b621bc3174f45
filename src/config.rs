use crate::error::SolverError;

/// Substitute for a zero point-to-center distance in the iterative update.
///
/// A point lying exactly on the current center would otherwise contribute an
/// infinite `weight / distance` factor. Replacing the distance with this value
/// gives that point a very large but finite pull, which biases the next
/// centroid towards it.
pub const ZERO_DISTANCE_EPSILON: f64 = 1e-4;

/// Configuration for a center-of-gravity run
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Per-axis convergence threshold, in the same units as point coordinates.
    /// A run converges once both `|dx|` and `|dy|` fall below this value.
    pub threshold: f64,

    /// Maximum number of iterative steps produced by `run_to_convergence`
    pub max_iters: usize,

    /// Log every step at INFO level instead of DEBUG
    pub verbose: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            max_iters: 100,
            verbose: false,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with the given convergence threshold
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not a finite positive number.
    pub fn new(threshold: f64) -> Self {
        Self::default().with_threshold(threshold)
    }

    /// Set the convergence threshold
    ///
    /// # Panics
    ///
    /// Panics if `threshold` is not a finite positive number.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        assert!(
            valid_threshold(threshold),
            "threshold must be a finite positive number"
        );
        self.threshold = threshold;
        self
    }

    /// Check a configuration whose fields were set directly.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidConfig`] if the threshold is not a finite
    /// positive number. Such a threshold would never report convergence.
    pub fn validate(&self) -> Result<(), SolverError> {
        if !valid_threshold(self.threshold) {
            return Err(SolverError::InvalidConfig(format!(
                "threshold must be a finite positive number, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Set the maximum number of iterations
    pub fn with_max_iters(mut self, max_iters: usize) -> Self {
        self.max_iters = max_iters;
        self
    }

    /// Set verbose mode
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

fn valid_threshold(threshold: f64) -> bool {
    threshold.is_finite() && threshold > 0.0
}
