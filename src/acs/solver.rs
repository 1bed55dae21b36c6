//! ACS execution loop.

use super::config::AcsConfig;
use super::error::AcsError;
use super::pheromone::PheromoneTable;
use super::selection::select;
use super::types::{AcsProblem, ConstructionCursor};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// Result of an ACS optimization run.
#[derive(Debug, Clone)]
pub struct AcsResult<C> {
    /// The best sequence found, `None` if no valid solution was produced.
    pub best: Option<Vec<C>>,

    /// Score of the best sequence, `f64::NEG_INFINITY` when `best` is `None`.
    pub best_score: f64,

    /// Number of iterations completed.
    pub iterations: usize,

    /// Number of valid samples scored.
    pub samples: usize,

    /// Construction attempts discarded (aborted or rejected by scoring).
    pub discarded: usize,

    /// Incumbent score after each iteration.
    pub score_history: Vec<f64>,
}

impl<C> AcsResult<C> {
    /// Whether a valid solution was found.
    pub fn is_solved(&self) -> bool {
        self.best.is_some()
    }
}

/// Outcome of a single construction attempt.
enum Attempt<C> {
    Scored(Vec<C>, f64),
    Aborted,
    Rejected,
}

/// Ant Colony System solver bound to one problem instance.
///
/// Owns the pheromone table and the incumbent best; both persist across
/// calls to [`optimize`](Self::optimize).
pub struct AcsSolver<'p, P: AcsProblem, R = StdRng> {
    problem: &'p P,
    config: AcsConfig,
    pheromones: PheromoneTable<P::Component>,
    best: Option<Vec<P::Component>>,
    best_score: f64,
    rng: R,
}

impl<'p, P: AcsProblem> AcsSolver<'p, P, StdRng> {
    /// Creates a solver seeded from `config.seed` (or entropy if unset).
    ///
    /// # Errors
    /// [`AcsError::InvalidConfig`] or [`AcsError::EmptyComponentSet`].
    pub fn new(problem: &'p P, config: AcsConfig) -> Result<Self, AcsError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Self::with_rng(problem, config, rng)
    }
}

impl<'p, P: AcsProblem, R: Rng> AcsSolver<'p, P, R> {
    /// Creates a solver drawing from the given random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(problem: &'p P, config: AcsConfig, rng: R) -> Result<Self, AcsError> {
        config.validate()?;
        let pheromones = PheromoneTable::new(problem.components(), config.initial_pheromone)?;
        Ok(Self {
            problem,
            config,
            pheromones,
            best: None,
            best_score: f64::NEG_INFINITY,
            rng,
        })
    }

    pub fn config(&self) -> &AcsConfig {
        &self.config
    }

    pub fn pheromones(&self) -> &PheromoneTable<P::Component> {
        &self.pheromones
    }

    /// The best sequence and score found so far, if any.
    pub fn incumbent(&self) -> Option<(&[P::Component], f64)> {
        self.best.as_deref().map(|seq| (seq, self.best_score))
    }

    /// Runs `n_iters` iterations and returns the incumbent.
    ///
    /// Each iteration constructs `samples_per_iteration` valid samples,
    /// keeps the highest-scoring one (first on ties), replaces the
    /// incumbent on strict improvement and then reinforces the incumbent's
    /// components.
    ///
    /// # Errors
    /// Any contract violation by the problem model, or
    /// [`AcsError::ConstructionStalled`] when the retry cap is hit. The
    /// incumbent found before the error remains available through
    /// [`incumbent`](Self::incumbent).
    pub fn optimize(&mut self, n_iters: usize) -> Result<AcsResult<P::Component>, AcsError> {
        debug!(
            n_iters,
            samples_per_iteration = self.config.samples_per_iteration,
            components = self.pheromones.len(),
            "starting ACS run"
        );

        let mut samples = 0usize;
        let mut discarded = 0usize;
        let mut score_history = Vec::with_capacity(n_iters);

        for iteration in 0..n_iters {
            let mut winner: Option<(Vec<P::Component>, f64)> = None;

            for _ in 0..self.config.samples_per_iteration {
                let (sequence, score) = self.sample(&mut discarded)?;
                samples += 1;
                if winner.as_ref().is_none_or(|(_, best)| score > *best) {
                    winner = Some((sequence, score));
                }
            }

            if let Some((sequence, score)) = winner {
                if score > self.best_score {
                    debug!(iteration, score, "new incumbent");
                    self.best = Some(sequence);
                    self.best_score = score;
                }
            }

            if let Some(best) = &self.best {
                self.pheromones
                    .global_update(best, self.config.global_reinforcement)?;
            }

            score_history.push(self.best_score);
        }

        debug!(
            best_score = self.best_score,
            samples, discarded, "ACS run finished"
        );

        Ok(AcsResult {
            best: self.best.clone(),
            best_score: self.best_score,
            iterations: n_iters,
            samples,
            discarded,
            score_history,
        })
    }

    /// Constructs until one valid, scored sequence is obtained.
    fn sample(
        &mut self,
        discarded: &mut usize,
    ) -> Result<(Vec<P::Component>, f64), AcsError> {
        let cap = self.config.max_attempts_per_sample;
        let mut attempts = 0usize;
        loop {
            if cap > 0 && attempts >= cap {
                return Err(AcsError::ConstructionStalled { attempts });
            }
            attempts += 1;

            match self.construct()? {
                Attempt::Scored(sequence, score) => return Ok((sequence, score)),
                Attempt::Aborted => {
                    trace!(attempts, "construction aborted, retrying");
                    *discarded += 1;
                }
                Attempt::Rejected => {
                    trace!(attempts, "solution rejected by scoring, retrying");
                    *discarded += 1;
                }
            }
        }
    }

    /// One ant: build a sequence step by step, decaying each pick.
    fn construct(&mut self) -> Result<Attempt<P::Component>, AcsError> {
        let problem = self.problem;
        let mut cursor = problem.build();
        let mut sequence = Vec::new();

        loop {
            if cursor.is_aborted() {
                return Ok(Attempt::Aborted);
            }
            let mut choices = if cursor.is_complete() {
                Vec::new()
            } else {
                cursor.choices()
            };
            if choices.is_empty() {
                if sequence.is_empty() {
                    return Err(AcsError::EmptyFirstStep);
                }
                break;
            }

            let idx = select(
                &choices,
                &self.pheromones,
                self.config.alpha,
                self.config.beta,
                self.config.greedy_probability,
                &mut self.rng,
            )?;
            let component = choices.swap_remove(idx).component;

            self.pheromones
                .local_update(&component, self.config.local_evaporation)?;
            cursor.advance(&component);
            sequence.push(component);
        }

        match problem.score(&sequence) {
            Some(score) if !score.is_finite() => Err(AcsError::InvalidScore(score)),
            Some(score) => Ok(Attempt::Scored(sequence, score)),
            None => Ok(Attempt::Rejected),
        }
    }
}
