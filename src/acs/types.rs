//! Core traits for Ant Colony System.

use std::fmt::Debug;
use std::hash::Hash;

/// One admissible next step offered during construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice<C> {
    /// The component that would be appended.
    pub component: C,

    /// Heuristic desirability (eta), must be finite and non-negative.
    ///
    /// Must not depend on pheromone levels. A zero heuristic gives the
    /// candidate zero weight unless `beta == 0`.
    pub heuristic: f64,
}

impl<C> Choice<C> {
    pub fn new(component: C, heuristic: f64) -> Self {
        Self {
            component,
            heuristic,
        }
    }
}

/// Incremental construction state for one ant.
///
/// Created by [`AcsProblem::build`]. The solver loops:
///
/// 1. stop and discard the attempt if [`is_aborted`](Self::is_aborted);
/// 2. stop and score if [`is_complete`](Self::is_complete) or
///    [`choices`](Self::choices) is empty;
/// 3. otherwise pick one choice and report it through
///    [`advance`](Self::advance).
pub trait ConstructionCursor {
    /// The solution component type.
    type Component;

    /// Currently admissible next choices.
    ///
    /// Returning an empty vector is equivalent to reporting completion.
    fn choices(&self) -> Vec<Choice<Self::Component>>;

    /// Applies the chosen component, which is always one returned by
    /// the latest call to [`choices`](Self::choices).
    fn advance(&mut self, component: &Self::Component);

    /// Whether construction has reached a scorable end-state.
    fn is_complete(&self) -> bool;

    /// Whether no completion is reachable from the current state.
    fn is_aborted(&self) -> bool {
        false
    }
}

/// Defines an Ant Colony System problem.
///
/// The user implements component enumeration, construction and scoring.
/// The ACS framework handles pheromone memory, the selection rule and
/// the iteration loop.
///
/// # Maximization
///
/// ACS maximizes the score. For minimization, negate the cost.
///
/// # Examples
///
/// ```ignore
/// struct PathProblem { distances: Vec<Vec<f64>> }
///
/// struct PathCursor<'a> { distances: &'a [Vec<f64>], path: Vec<usize> }
///
/// impl ConstructionCursor for PathCursor<'_> {
///     type Component = (usize, usize);
///
///     fn choices(&self) -> Vec<Choice<(usize, usize)>> {
///         let last = *self.path.last().unwrap();
///         (0..self.distances.len())
///             .filter(|j| !self.path.contains(j))
///             .map(|j| Choice::new((last, j), 1.0 / self.distances[last][j]))
///             .collect()
///     }
///
///     fn advance(&mut self, edge: &(usize, usize)) {
///         self.path.push(edge.1);
///     }
///
///     fn is_complete(&self) -> bool {
///         self.path.len() == self.distances.len()
///     }
/// }
///
/// impl AcsProblem for PathProblem {
///     type Component = (usize, usize);
///     type Cursor<'a> = PathCursor<'a>;
///
///     fn components(&self) -> Vec<(usize, usize)> {
///         let n = self.distances.len();
///         (0..n).flat_map(|i| (0..n).filter(move |&j| j != i).map(move |j| (i, j))).collect()
///     }
///
///     fn build(&self) -> PathCursor<'_> {
///         PathCursor { distances: &self.distances, path: vec![0] }
///     }
///
///     fn score(&self, edges: &[(usize, usize)]) -> Option<f64> {
///         Some(-edges.iter().map(|&(i, j)| self.distances[i][j]).sum::<f64>())
///     }
/// }
/// ```
///
/// # References
///
/// Dorigo & Gambardella (1997), Dorigo & Stützle (2004)
pub trait AcsProblem {
    /// Atomic decision variable (edge, assignment, ...).
    type Component: Clone + Eq + Hash + Debug;

    /// Construction state produced by [`build`](Self::build).
    type Cursor<'a>: ConstructionCursor<Component = Self::Component>
    where
        Self: 'a;

    /// Every component that may ever be offered during construction.
    ///
    /// Called once, when the solver is created, to seed the pheromone table.
    fn components(&self) -> Vec<Self::Component>;

    /// Starts a fresh construction pass.
    fn build(&self) -> Self::Cursor<'_>;

    /// Scores a completed sequence. Higher is better.
    ///
    /// Returns `None` if the sequence is not a valid solution; the solver
    /// then discards it and constructs another.
    fn score(&self, sequence: &[Self::Component]) -> Option<f64>;
}
