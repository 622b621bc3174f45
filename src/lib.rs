//! # center-of-gravity-rs
//!
//! Iterative center-of-gravity solver for single-facility location.
//!
//! Given a fixed set of weighted demand points in the plane, find the facility
//! position minimizing the total weighted distance `Σ dᵢ·Wᵢ`.
//!
//! ## Method
//!
//! - **Initial estimate**: the plain weighted average of the point coordinates,
//!   `X = Σ(Wᵢ·Xᵢ) / ΣWᵢ`
//! - **Iteration**: each point pulls with factor `Wᵢ / dᵢ`, giving
//!   `X = Σ(Wᵢ·Xᵢ/dᵢ) / Σ(Wᵢ/dᵢ)` (Weiszfeld's update)
//! - **Convergence**: successive centroids differ by less than the threshold
//!   on *both* axes independently
//!
//! The free functions [`initialize`], [`step`] and [`has_converged`] are pure.
//! [`SimulationRun`] keeps the step history and enforces that a converged run
//! is not advanced further.
//!
//! ## Example
//!
//! ```rust
//! use center_of_gravity_rs::{sample, SimulationRun, SolverConfig};
//!
//! let mut run = SimulationRun::new(sample::four_markets(), SolverConfig::default()).unwrap();
//! let summary = run.run_to_convergence().unwrap();
//!
//! assert!(summary.converged);
//! println!(
//!     "facility at ({:.2}, {:.2}), cost {:.0}",
//!     summary.location.x, summary.location.y, summary.total_cost
//! );
//! ```
//!
//! ## Stepping manually
//!
//! ```rust
//! use center_of_gravity_rs::{has_converged, initialize, step, DemandPoint};
//!
//! let points = vec![
//!     DemandPoint::new("A", (0.0, 0.0), 10.0).unwrap(),
//!     DemandPoint::new("B", (10.0, 0.0), 10.0).unwrap(),
//! ];
//!
//! let start = initialize(&points).unwrap();
//! let next = step(&start.centroid(), &points, 1).unwrap();
//! assert!(has_converged(&start.centroid(), &next.centroid(), 0.1));
//! ```

mod algorithm;
mod config;
mod distance;
mod error;
mod point;
mod run;
pub mod sample;

pub use algorithm::{initialize, step, CalculationTrace, Component, IterationStep, TraceTerms};
pub use config::{SolverConfig, ZERO_DISTANCE_EPSILON};
pub use distance::{distance, has_converged, total_cost, Movement};
pub use error::SolverError;
pub use point::{points_from_array, Coordinate, DemandPoint, PointKind};
pub use run::{history_to_array, RunSummary, SimulationRun};
