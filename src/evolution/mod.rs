//! Evolution generators.
//!
//! An [`EvolutionSpliterator`] turns a start supplier and an evolution
//! function into an unbounded, lazily computed sequence of results. The
//! caller owns the domain: population encoding, genetic operators and
//! fitness evaluation all live inside the evolution function.
//!
//! # Core Traits
//!
//! - [`EvolutionResult`]: a step's output, able to produce the next start
//!   snapshot
//!
//! # Key Types
//!
//! - [`EvolutionSpliterator`]: the generator itself
//! - [`EvolutionBuilder`]: fallible assembly from optional parts
//!
//! # Contracts
//!
//! - The sequence never ends on its own; bound it with
//!   [`Spliterator::limit`](crate::split::Spliterator::limit).
//! - Splitting spawns independent runs from the same start supplier rather
//!   than partitioning one run.

mod config;
mod spliterator;
mod types;

pub use config::EvolutionBuilder;
pub use spliterator::EvolutionSpliterator;
pub use types::EvolutionResult;
