//! Splittable lazy evolution streams.
//!
//! Provides the traversal machinery behind evolutionary optimizers that run
//! sequentially or spread across a work-stealing pool:
//!
//! - **Split protocol**: the [`Spliterator`](split::Spliterator) trait,
//!   traversal characteristics, sequential and parallel adapters, and a
//!   predicate limit for sequences that never end on their own.
//! - **Evolution generators**: an unbounded sequence of evolution results,
//!   computed lazily by feeding each result's successor snapshot back into a
//!   caller-supplied evolution function. Splitting spends a parallelism
//!   budget and spawns independent runs.
//! - **Concatenation**: several spliterators presented as one ordered
//!   sequence, split all-or-nothing.
//!
//! # Architecture
//!
//! The crate contains no genetic operators, fitness functions or population
//! types. Those live in the caller's evolution function; the generator only
//! needs a start snapshot and the ability to derive the next snapshot from
//! each result ([`EvolutionResult`](evolution::EvolutionResult)).
//!
//! With the `parallel` feature (on by default), any spliterator can be
//! driven by rayon through
//! [`Spliterator::par_stream`](split::Spliterator::par_stream).
//!
//! # Example
//!
//! ```
//! use u_evostream::evolution::{EvolutionResult, EvolutionSpliterator};
//! use u_evostream::split::Spliterator;
//!
//! #[derive(Clone)]
//! struct Generation {
//!     index: u32,
//!     best: f64,
//! }
//!
//! impl EvolutionResult for Generation {
//!     type Start = Generation;
//!     fn next(&self) -> Generation {
//!         Generation { index: self.index + 1, ..self.clone() }
//!     }
//! }
//!
//! let stream = EvolutionSpliterator::new(
//!     || Generation { index: 0, best: 100.0 },
//!     |g: Generation| Generation { best: g.best * 0.5, ..g },
//! );
//!
//! let best: Vec<f64> = stream
//!     .limit(|g: &Generation| g.index < 3)
//!     .stream()
//!     .map(|g| g.best)
//!     .collect();
//! assert_eq!(best, vec![50.0, 25.0, 12.5]);
//! ```

pub mod concat;
pub mod error;
pub mod evolution;
pub mod split;
