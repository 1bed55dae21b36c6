//! Pheromone memory and the two ACS update rules.

use super::error::AcsError;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Pheromone level per solution component.
///
/// The key set is fixed at construction: later updates only change
/// values. Looking up a component that was never enumerated is a
/// contract violation and yields [`AcsError::UnknownComponent`].
#[derive(Debug, Clone)]
pub struct PheromoneTable<C> {
    levels: HashMap<C, f64>,
    initial: f64,
}

impl<C> PheromoneTable<C>
where
    C: Eq + Hash + Debug,
{
    /// Seeds every component with the level `initial`.
    ///
    /// Duplicate components collapse into one entry.
    ///
    /// # Errors
    /// [`AcsError::EmptyComponentSet`] if `components` yields nothing.
    pub fn new<I>(components: I, initial: f64) -> Result<Self, AcsError>
    where
        I: IntoIterator<Item = C>,
    {
        let levels: HashMap<C, f64> = components.into_iter().map(|c| (c, initial)).collect();
        if levels.is_empty() {
            return Err(AcsError::EmptyComponentSet);
        }
        Ok(Self { levels, initial })
    }

    /// The initial level `c`, also the local evaporation target.
    pub fn initial(&self) -> f64 {
        self.initial
    }

    /// Current level of `component`.
    pub fn get(&self, component: &C) -> Result<f64, AcsError> {
        self.levels
            .get(component)
            .copied()
            .ok_or_else(|| unknown(component))
    }

    /// Local (ACS) update: `tau <- (1 - xi) * tau + xi * c`.
    ///
    /// Applied once per component, when an ant appends it.
    pub fn local_update(&mut self, component: &C, xi: f64) -> Result<(), AcsError> {
        let initial = self.initial;
        let tau = self
            .levels
            .get_mut(component)
            .ok_or_else(|| unknown(component))?;
        *tau = (1.0 - xi) * *tau + xi * initial;
        Ok(())
    }

    /// Global update: `tau <- (1 - rho) * tau + rho` for every component
    /// of `best`, once per occurrence. Other components are untouched.
    pub fn global_update(&mut self, best: &[C], rho: f64) -> Result<(), AcsError> {
        for component in best {
            let tau = self
                .levels
                .get_mut(component)
                .ok_or_else(|| unknown(component))?;
            *tau = (1.0 - rho) * *tau + rho;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Iterates over `(component, level)` pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&C, f64)> {
        self.levels.iter().map(|(c, &tau)| (c, tau))
    }
}

fn unknown<C: Debug>(component: &C) -> AcsError {
    AcsError::UnknownComponent(format!("{component:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_uniform() {
        let table = PheromoneTable::new(0..5, 0.3).unwrap();
        assert_eq!(table.len(), 5);
        for (_, tau) in table.iter() {
            assert!((tau - 0.3).abs() < 1e-12);
        }
    }

    #[test]
    fn test_new_empty_fails() {
        let result = PheromoneTable::new(Vec::<u32>::new(), 0.5);
        assert!(matches!(result, Err(AcsError::EmptyComponentSet)));
    }

    #[test]
    fn test_duplicates_collapse() {
        let table = PheromoneTable::new(vec!["a", "b", "a"], 0.5).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_get_unknown() {
        let table = PheromoneTable::new(0..3, 0.5).unwrap();
        assert_eq!(
            table.get(&7),
            Err(AcsError::UnknownComponent("7".into()))
        );
    }

    #[test]
    fn test_local_update_formula() {
        let mut table = PheromoneTable::new(0..2, 0.2).unwrap();
        table.global_update(&[0], 1.0).unwrap();
        // 0.9 * 1.0 + 0.1 * 0.2
        table.local_update(&0, 0.1).unwrap();
        assert!((table.get(&0).unwrap() - 0.92).abs() < 1e-12);
        assert!((table.get(&1).unwrap() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_local_update_converges_to_initial() {
        let mut table = PheromoneTable::new(0..1, 0.25).unwrap();
        table.global_update(&[0], 1.0).unwrap();
        for _ in 0..200 {
            table.local_update(&0, 0.3).unwrap();
        }
        assert!((table.get(&0).unwrap() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_local_update_unknown() {
        let mut table = PheromoneTable::new(0..2, 0.5).unwrap();
        assert!(table.local_update(&9, 0.5).is_err());
    }

    #[test]
    fn test_global_update_only_touches_best() {
        let mut table = PheromoneTable::new(0..4, 0.1).unwrap();
        table.global_update(&[1, 3], 0.5).unwrap();
        assert!((table.get(&0).unwrap() - 0.1).abs() < 1e-12);
        assert!((table.get(&1).unwrap() - 0.55).abs() < 1e-12);
        assert!((table.get(&2).unwrap() - 0.1).abs() < 1e-12);
        assert!((table.get(&3).unwrap() - 0.55).abs() < 1e-12);
    }

    #[test]
    fn test_global_update_rho_extremes() {
        let mut table = PheromoneTable::new(0..2, 0.4).unwrap();
        table.global_update(&[0], 0.0).unwrap();
        assert!((table.get(&0).unwrap() - 0.4).abs() < 1e-12);
        table.global_update(&[0], 1.0).unwrap();
        assert!((table.get(&0).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_global_update_repeated_component() {
        let mut table = PheromoneTable::new(0..1, 0.5).unwrap();
        table.global_update(&[0, 0], 0.5).unwrap();
        // 0.5 -> 0.75 -> 0.875
        assert!((table.get(&0).unwrap() - 0.875).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_local_update_never_below_floor(
            c in 0.01f64..=1.0,
            xi in 0.0f64..=1.0,
            rho in 0.0f64..=1.0,
            ops in proptest::collection::vec(any::<bool>(), 0..60),
        ) {
            let mut table = PheromoneTable::new(0..1, c).unwrap();
            let floor = xi * c;
            for reinforce in ops {
                if reinforce {
                    table.global_update(&[0], rho).unwrap();
                } else {
                    table.local_update(&0, xi).unwrap();
                }
                prop_assert!(table.get(&0).unwrap() >= floor - 1e-12);
            }
        }

        #[test]
        fn prop_global_update_moves_toward_one(
            c in 0.01f64..0.99,
            rho in 0.001f64..0.999,
        ) {
            let mut table = PheromoneTable::new(0..2, c).unwrap();
            let before = table.get(&0).unwrap();
            table.global_update(&[0], rho).unwrap();
            let after = table.get(&0).unwrap();
            prop_assert!(after > before && after < 1.0);
            prop_assert!((table.get(&1).unwrap() - c).abs() < 1e-12);
        }
    }
}
