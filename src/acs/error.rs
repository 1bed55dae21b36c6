//! Errors raised by the ACS solver.
//!
//! Infeasible constructions and solutions rejected by scoring are routine
//! outcomes of stochastic search and never surface here. Every variant
//! below means either the configuration or the problem model broke its
//! contract, so the run is aborted.

use thiserror::Error;

/// Failure of an ACS run or of solver construction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum AcsError {
    /// A configuration parameter is outside its valid range.
    #[error("invalid AcsConfig: {0}")]
    InvalidConfig(String),

    /// The problem model enumerated no components.
    #[error("problem model enumerated no components")]
    EmptyComponentSet,

    /// A component was offered that is not a key of the pheromone table.
    #[error("component {0} was not part of the initial component enumeration")]
    UnknownComponent(String),

    /// A heuristic value was negative, NaN or infinite.
    #[error("invalid heuristic value {value} for component {component}")]
    InvalidHeuristic {
        /// `Debug` rendering of the offending component.
        component: String,
        /// The rejected heuristic value.
        value: f64,
    },

    /// The cursor offered nothing before any component was chosen.
    #[error("construction offered no admissible choice on its first step")]
    EmptyFirstStep,

    /// Every candidate in the exploration branch had zero weight.
    #[error("total selection weight is zero or not finite")]
    ZeroTotalWeight,

    /// The scoring function returned a non-finite value.
    #[error("score must be finite, got {0}")]
    InvalidScore(f64),

    /// The retry cap was exhausted while producing a single valid sample.
    #[error("no valid solution after {attempts} consecutive construction attempts")]
    ConstructionStalled {
        /// Number of attempts made for the sample.
        attempts: usize,
    },
}
