//! Evolution generator configuration.
//!
//! [`EvolutionBuilder`] assembles an [`EvolutionSpliterator`] from parts that
//! may or may not have been provided, reporting what is missing.

use std::fmt;
use std::sync::Arc;

use super::spliterator::EvolutionSpliterator;
use super::types::EvolutionResult;
use crate::error::StreamError;
use crate::split::UNBOUNDED;

/// Builder for [`EvolutionSpliterator`].
///
/// Both functions are required; the split budget defaults to
/// [`UNBOUNDED`].
///
/// # Builder Pattern
///
/// ```
/// use u_evostream::evolution::{EvolutionBuilder, EvolutionResult};
/// use u_evostream::split::Spliterator;
///
/// struct Step(u32);
///
/// impl EvolutionResult for Step {
///     type Start = u32;
///     fn next(&self) -> u32 { self.0 + 1 }
/// }
///
/// let generator = EvolutionBuilder::new()
///     .with_start(|| 0u32)
///     .with_evolution(|g: u32| Step(g))
///     .with_estimate(8)
///     .build()
///     .unwrap();
///
/// assert_eq!(generator.estimate_size(), 8);
/// let gens: Vec<u32> = generator.stream().take(3).map(|s| s.0).collect();
/// assert_eq!(gens, vec![0, 1, 2]);
/// ```
///
/// # Missing Parts
///
/// ```
/// use u_evostream::error::StreamError;
/// use u_evostream::evolution::{EvolutionBuilder, EvolutionResult};
///
/// struct Step(u32);
///
/// impl EvolutionResult for Step {
///     type Start = u32;
///     fn next(&self) -> u32 { self.0 + 1 }
/// }
///
/// let result = EvolutionBuilder::<fn() -> u32, _>::new()
///     .with_evolution(|g: u32| Step(g))
///     .build();
/// assert_eq!(result.unwrap_err(), StreamError::MissingStart);
/// ```
pub struct EvolutionBuilder<S, E> {
    start: Option<Arc<S>>,
    evolution: Option<Arc<E>>,
    estimate: u64,
}

impl<S, E> Default for EvolutionBuilder<S, E> {
    fn default() -> Self {
        Self {
            start: None,
            evolution: None,
            estimate: UNBOUNDED,
        }
    }
}

impl<S, E> EvolutionBuilder<S, E> {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start supplier.
    pub fn with_start(mut self, start: S) -> Self {
        self.start = Some(Arc::new(start));
        self
    }

    /// Sets a start supplier that is already shared elsewhere.
    pub fn with_shared_start(mut self, start: Arc<S>) -> Self {
        self.start = Some(start);
        self
    }

    /// Sets the evolution function.
    pub fn with_evolution(mut self, evolution: E) -> Self {
        self.evolution = Some(Arc::new(evolution));
        self
    }

    /// Sets an evolution function that is already shared elsewhere.
    pub fn with_shared_evolution(mut self, evolution: Arc<E>) -> Self {
        self.evolution = Some(evolution);
        self
    }

    /// Sets the split budget.
    pub fn with_estimate(mut self, estimate: u64) -> Self {
        self.estimate = estimate;
        self
    }

    /// Builds the generator.
    ///
    /// # Errors
    ///
    /// [`StreamError::MissingStart`] or [`StreamError::MissingEvolution`]
    /// if the corresponding function was never set. The start supplier is
    /// checked first.
    pub fn build<St, R>(self) -> Result<EvolutionSpliterator<St, S, E>, StreamError>
    where
        S: Fn() -> St,
        E: Fn(St) -> R,
        R: EvolutionResult<Start = St>,
    {
        let start = self.start.ok_or(StreamError::MissingStart)?;
        let evolution = self.evolution.ok_or(StreamError::MissingEvolution)?;
        Ok(EvolutionSpliterator::from_shared(
            start,
            evolution,
            self.estimate,
        ))
    }
}

impl<S, E> fmt::Debug for EvolutionBuilder<S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvolutionBuilder")
            .field("start", &self.start.is_some())
            .field("evolution", &self.evolution.is_some())
            .field("estimate", &self.estimate)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::Spliterator;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, PartialEq)]
    struct Gen(u64);

    impl EvolutionResult for Gen {
        type Start = u64;
        fn next(&self) -> u64 {
            self.0 + 1
        }
    }

    fn start() -> u64 {
        0
    }

    fn evolve(generation: u64) -> Gen {
        Gen(generation)
    }

    type FnBuilder = EvolutionBuilder<fn() -> u64, fn(u64) -> Gen>;

    #[test]
    fn test_default_builder() {
        let builder = FnBuilder::default();
        assert!(builder.start.is_none());
        assert!(builder.evolution.is_none());
        assert_eq!(builder.estimate, UNBOUNDED);
    }

    #[test]
    fn test_missing_start() {
        let result = FnBuilder::new().with_evolution(evolve).build();
        assert_eq!(result.unwrap_err(), StreamError::MissingStart);
    }

    #[test]
    fn test_missing_evolution() {
        let result = FnBuilder::new().with_start(start).build();
        assert_eq!(result.unwrap_err(), StreamError::MissingEvolution);
    }

    #[test]
    fn test_missing_both_reports_start_first() {
        let result = FnBuilder::new().build();
        assert_eq!(result.unwrap_err(), StreamError::MissingStart);
    }

    #[test]
    fn test_build_with_estimate() {
        let mut generator = FnBuilder::new()
            .with_start(start)
            .with_evolution(evolve)
            .with_estimate(8)
            .build()
            .unwrap();
        assert_eq!(generator.estimate_size(), 8);
        assert!(!generator.is_started());

        let mut seen = Vec::new();
        generator.try_advance(&mut |g| seen.push(g));
        assert_eq!(seen, vec![Gen(0)]);
    }

    #[test]
    fn test_shared_functions_serve_several_generators() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = Arc::clone(&calls);
        let shared_start = Arc::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
            10u64
        });
        let shared_evolution = Arc::new(|g: u64| Gen(g));

        let a = EvolutionBuilder::new()
            .with_shared_start(Arc::clone(&shared_start))
            .with_shared_evolution(Arc::clone(&shared_evolution))
            .build()
            .unwrap();
        let b = EvolutionBuilder::new()
            .with_shared_start(shared_start)
            .with_shared_evolution(shared_evolution)
            .build()
            .unwrap();

        assert_eq!(a.stream().next(), Some(Gen(10)));
        assert_eq!(b.stream().next(), Some(Gen(10)));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_debug_shows_presence() {
        let builder = FnBuilder::new().with_start(start);
        let s = format!("{builder:?}");
        assert!(s.contains("start: true"));
        assert!(s.contains("evolution: false"));
    }
}
