//! ACS configuration.

use super::error::AcsError;

/// Configuration for the Ant Colony System algorithm.
///
/// # Selection
///
/// A candidate's weight is `tau^alpha * eta^beta`, where `tau` is its
/// pheromone level and `eta` its heuristic value. With probability
/// `greedy_probability` (q0) the heaviest candidate is taken; otherwise one
/// is drawn proportionally to weight.
///
/// # Pheromone updates
///
/// - Local: `tau <- (1 - xi) * tau + xi * c` for each chosen component,
///   with `xi = local_evaporation` and `c = initial_pheromone`.
/// - Global: `tau <- (1 - rho) * tau + rho` along the incumbent best,
///   with `rho = global_reinforcement`.
///
/// # References
///
/// Dorigo & Gambardella (1997), Section III
///
/// # Examples
///
/// ```
/// use u_aco::acs::AcsConfig;
///
/// let config = AcsConfig::default()
///     .with_exponents(1.0, 2.0)
///     .with_initial_pheromone(0.1)
///     .with_local_evaporation(0.1)
///     .with_global_reinforcement(0.1)
///     .with_greedy_probability(0.9)
///     .with_samples_per_iteration(10)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcsConfig {
    /// Pheromone exponent (alpha). Higher = stronger pheromone bias.
    pub alpha: f64,

    /// Heuristic exponent (beta). Higher = greedier construction.
    pub beta: f64,

    /// Initial pheromone level (c), also the target of local evaporation.
    pub initial_pheromone: f64,

    /// Local evaporation rate (xi), in [0, 1].
    pub local_evaporation: f64,

    /// Global reinforcement rate (rho), in [0, 1].
    pub global_reinforcement: f64,

    /// Probability of the greedy (exploitation) branch (q0), in [0, 1].
    pub greedy_probability: f64,

    /// Number of valid samples (ants) constructed per iteration.
    pub samples_per_iteration: usize,

    /// Maximum consecutive failed attempts for one sample. 0 = no limit.
    ///
    /// Aborted constructions and solutions rejected by scoring both count.
    pub max_attempts_per_sample: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcsConfig {
    fn default() -> Self {
        Self {
            alpha: 0.5,
            beta: 0.5,
            initial_pheromone: 0.5,
            local_evaporation: 0.5,
            global_reinforcement: 0.5,
            greedy_probability: 0.5,
            samples_per_iteration: 1,
            max_attempts_per_sample: 1000,
            seed: None,
        }
    }
}

impl AcsConfig {
    pub fn with_exponents(mut self, alpha: f64, beta: f64) -> Self {
        self.alpha = alpha;
        self.beta = beta;
        self
    }

    pub fn with_initial_pheromone(mut self, c: f64) -> Self {
        self.initial_pheromone = c;
        self
    }

    pub fn with_local_evaporation(mut self, xi: f64) -> Self {
        self.local_evaporation = xi;
        self
    }

    pub fn with_global_reinforcement(mut self, rho: f64) -> Self {
        self.global_reinforcement = rho;
        self
    }

    pub fn with_greedy_probability(mut self, q0: f64) -> Self {
        self.greedy_probability = q0;
        self
    }

    pub fn with_samples_per_iteration(mut self, n: usize) -> Self {
        self.samples_per_iteration = n;
        self
    }

    pub fn with_max_attempts_per_sample(mut self, n: usize) -> Self {
        self.max_attempts_per_sample = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), AcsError> {
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() || value < 0.0 {
                return Err(AcsError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(AcsError::InvalidConfig(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            )));
        }
        for (name, value) in [
            ("local_evaporation", self.local_evaporation),
            ("global_reinforcement", self.global_reinforcement),
            ("greedy_probability", self.greedy_probability),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(AcsError::InvalidConfig(format!(
                    "{name} must be in [0, 1], got {value}"
                )));
            }
        }
        if self.samples_per_iteration == 0 {
            return Err(AcsError::InvalidConfig(
                "samples_per_iteration must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AcsConfig::default();
        assert!((config.alpha - 0.5).abs() < 1e-10);
        assert!((config.beta - 0.5).abs() < 1e-10);
        assert!((config.initial_pheromone - 0.5).abs() < 1e-10);
        assert!((config.local_evaporation - 0.5).abs() < 1e-10);
        assert!((config.global_reinforcement - 0.5).abs() < 1e-10);
        assert!((config.greedy_probability - 0.5).abs() < 1e-10);
        assert_eq!(config.samples_per_iteration, 1);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AcsConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_exponents_above_one_allowed() {
        let config = AcsConfig::default().with_exponents(1.0, 5.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_bad_exponents() {
        let config = AcsConfig::default().with_exponents(-0.1, 1.0);
        assert!(config.validate().is_err());

        let config = AcsConfig::default().with_exponents(1.0, f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_initial_pheromone() {
        let config = AcsConfig::default().with_initial_pheromone(0.0);
        assert!(config.validate().is_err());

        let config = AcsConfig::default().with_initial_pheromone(f64::INFINITY);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rates_out_of_range() {
        let config = AcsConfig::default().with_local_evaporation(1.5);
        assert!(config.validate().is_err());

        let config = AcsConfig::default().with_global_reinforcement(-0.1);
        assert!(config.validate().is_err());

        let config = AcsConfig::default().with_greedy_probability(f64::NAN);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rate_bounds_inclusive() {
        let config = AcsConfig::default()
            .with_local_evaporation(0.0)
            .with_global_reinforcement(1.0)
            .with_greedy_probability(1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_samples() {
        let config = AcsConfig::default().with_samples_per_iteration(0);
        assert!(matches!(
            config.validate(),
            Err(AcsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_builder_chain() {
        let config = AcsConfig::default()
            .with_exponents(1.0, 2.0)
            .with_initial_pheromone(0.1)
            .with_local_evaporation(0.2)
            .with_global_reinforcement(0.3)
            .with_greedy_probability(0.9)
            .with_samples_per_iteration(10)
            .with_max_attempts_per_sample(0)
            .with_seed(42);

        assert!((config.alpha - 1.0).abs() < 1e-10);
        assert!((config.beta - 2.0).abs() < 1e-10);
        assert!((config.initial_pheromone - 0.1).abs() < 1e-10);
        assert!((config.local_evaporation - 0.2).abs() < 1e-10);
        assert!((config.global_reinforcement - 0.3).abs() < 1e-10);
        assert!((config.greedy_probability - 0.9).abs() < 1e-10);
        assert_eq!(config.samples_per_iteration, 10);
        assert_eq!(config.max_attempts_per_sample, 0);
        assert_eq!(config.seed, Some(42));
    }
}
