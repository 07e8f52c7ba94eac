//! Concatenation of splittable sequences.
//!
//! [`ConcatSpliterator`] chains any number of spliterators of one element
//! type into a single ordered sequence. Parts of different concrete types
//! can be mixed by boxing them first
//! ([`Spliterator::boxed`](crate::split::Spliterator::boxed)).
//!
//! # Key Types
//!
//! - [`ConcatSpliterator`]: the concatenation
//! - [`SizeEstimation`]: how part estimates are combined

mod config;
mod spliterator;

pub use config::SizeEstimation;
pub use spliterator::ConcatSpliterator;
