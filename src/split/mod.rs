//! Splittable sequence protocol.
//!
//! A [`Spliterator`] is a lazily computed sequence that can either be
//! drained element by element or divided into independent halves for
//! parallel consumption. Division is cooperative: the sequence decides
//! whether a split is possible, and a refusal is a normal outcome.
//!
//! # Core Traits
//!
//! - [`Spliterator`]: advance, split, size estimate, characteristics
//! - [`DynSpliterator`]: object-safe form, used through [`BoxSpliterator`]
//!
//! # Key Types
//!
//! - [`Characteristics`]: traversal property bit-set
//! - [`VecSpliterator`]: finite source over an owned `Vec`
//! - [`Iter`]: sequential `Iterator` adapter
//! - [`Limit`]: take-while traversal, the stopping rule for unbounded sources
//! - [`ParSpliterator`]: rayon bridge (feature `parallel`)

mod characteristics;
mod iter;
mod limit;
#[cfg(feature = "parallel")]
mod parallel;
mod types;
mod vec;

pub use characteristics::Characteristics;
pub use iter::Iter;
pub use limit::Limit;
#[cfg(feature = "parallel")]
pub use parallel::ParSpliterator;
pub use types::{BoxSpliterator, DynSpliterator, Spliterator, UNBOUNDED};
pub use vec::VecSpliterator;
