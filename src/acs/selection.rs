//! Pseudo-random proportional rule.
//!
//! # References
//!
//! Dorigo & Gambardella (1997), Equations (1) and (3)

use super::error::AcsError;
use super::pheromone::PheromoneTable;
use super::types::Choice;
use rand::Rng;
use std::fmt::Debug;
use std::hash::Hash;

/// Selection weight `tau^alpha * eta^beta`.
///
/// `0^0` evaluates to 1, so a zero heuristic only zeroes the weight
/// when `beta > 0`.
pub fn weight(tau: f64, eta: f64, alpha: f64, beta: f64) -> f64 {
    tau.powf(alpha) * eta.powf(beta)
}

/// Picks one of `choices` and returns its index.
///
/// Draws `r` uniformly from [0, 1). If `r < q0` the candidate with the
/// strictly largest weight wins (first one on ties). Otherwise a second
/// draw selects a candidate with probability proportional to its weight,
/// scanning cumulative weights in input order; zero-weight candidates are
/// never returned.
///
/// Weights are compared relative to the largest one, so very large
/// pheromone or heuristic values do not overflow the total.
///
/// # Errors
/// - [`AcsError::UnknownComponent`] if a component has no pheromone entry.
/// - [`AcsError::InvalidHeuristic`] for a negative or non-finite heuristic.
/// - [`AcsError::ZeroTotalWeight`] if every candidate has zero weight,
///   whichever branch the draw picks.
///
/// # Panics
/// Panics if `choices` is empty.
pub fn select<C, R>(
    choices: &[Choice<C>],
    pheromones: &PheromoneTable<C>,
    alpha: f64,
    beta: f64,
    q0: f64,
    rng: &mut R,
) -> Result<usize, AcsError>
where
    C: Eq + Hash + Debug,
    R: Rng,
{
    assert!(!choices.is_empty(), "cannot select from empty choice set");

    let log_weights = choices
        .iter()
        .map(|choice| {
            if !choice.heuristic.is_finite() || choice.heuristic < 0.0 {
                return Err(AcsError::InvalidHeuristic {
                    component: format!("{:?}", choice.component),
                    value: choice.heuristic,
                });
            }
            let tau = pheromones.get(&choice.component)?;
            Ok(log_weight(tau, choice.heuristic, alpha, beta))
        })
        .collect::<Result<Vec<f64>, AcsError>>()?;

    let max = log_weights.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if max == f64::NEG_INFINITY {
        return Err(AcsError::ZeroTotalWeight);
    }
    // Largest relative weight is exactly 1, the total is at most `len`.
    let weights: Vec<f64> = log_weights.iter().map(|lw| (lw - max).exp()).collect();

    let r: f64 = rng.random();
    if r < q0 {
        Ok(argmax(&weights))
    } else {
        Ok(roulette(&weights, rng))
    }
}

/// `ln(tau^alpha * eta^beta)`, with `x^0 = 1` for every `x` including 0.
fn log_weight(tau: f64, eta: f64, alpha: f64, beta: f64) -> f64 {
    let term = |x: f64, e: f64| if e == 0.0 { 0.0 } else { e * x.ln() };
    term(tau, alpha) + term(eta, beta)
}

/// Index of the strictly largest weight, first-encountered on ties.
fn argmax(weights: &[f64]) -> usize {
    let mut best = 0;
    for (i, &w) in weights.iter().enumerate().skip(1) {
        if w > weights[best] {
            best = i;
        }
    }
    best
}

/// Roulette wheel over weights with at least one positive entry.
fn roulette<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let total: f64 = weights.iter().sum();
    let threshold = rng.random::<f64>() * total;
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if cumulative >= threshold {
            return i;
        }
    }
    // Rounding can leave the final cumulative sum just below the threshold.
    last_positive
}
