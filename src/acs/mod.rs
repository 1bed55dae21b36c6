//! Ant Colony System (ACS).
//!
//! A constructive metaheuristic in which artificial ants build solutions
//! one component at a time, biased by a shared pheromone memory and a
//! problem-specific heuristic. Each chosen component is decayed immediately
//! (local update) and, once per iteration, the components of the best
//! solution found so far are reinforced (global update).
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative Learning
//!   Approach to the Traveling Salesman Problem"
//! - Dorigo & Stützle (2004), "Ant Colony Optimization", Chapter 3.4.1

mod config;
mod error;
mod pheromone;
mod selection;
mod solver;
mod types;

pub use config::AcsConfig;
pub use error::AcsError;
pub use pheromone::PheromoneTable;
pub use selection::{select, weight};
pub use solver::{AcsResult, AcsSolver};
pub use types::{AcsProblem, Choice, ConstructionCursor};
