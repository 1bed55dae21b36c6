//! Domain-agnostic Ant Colony System optimization.
//!
//! Provides a generic implementation of **Ant Colony System (ACS)**, a
//! pheromone-guided constructive metaheuristic:
//!
//! - **Pheromone table**: one level per solution component, seeded uniformly.
//! - **Pseudo-random proportional rule**: greedy exploitation with
//!   probability `q0`, weighted roulette exploration otherwise.
//! - **Local evaporation**: decay applied the moment an ant picks a component.
//! - **Global reinforcement**: per-iteration boost along the all-time best.
//!
//! # Architecture
//!
//! The solver knows nothing about what a component represents. Consumers
//! implement [`acs::AcsProblem`] (component enumeration, scoring) and
//! [`acs::ConstructionCursor`] (step-by-step construction) for their domain:
//! tour edges, schedule assignments, subset memberships and so on.

pub mod acs;
