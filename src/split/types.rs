//! Core trait definitions for splittable sequences.
//!
//! [`Spliterator`] is the contract between a lazily computed sequence and
//! whatever drives it: a plain loop, the [`Iter`] adapter, or a
//! work-stealing pool through [`ParSpliterator`](super::ParSpliterator).

use super::characteristics::Characteristics;
use super::iter::Iter;
use super::limit::Limit;
#[cfg(feature = "parallel")]
use super::parallel::ParSpliterator;

/// Size estimate reported by sequences with no known bound.
///
/// A spliterator returning this value from
/// [`estimate_size`](Spliterator::estimate_size) declares itself unbounded.
/// Composites propagate it: if any part is unbounded, so is the whole.
pub const UNBOUNDED: u64 = u64::MAX;

/// A sequence that can be traversed element by element or divided for
/// parallel consumption.
///
/// # Protocol
///
/// - [`try_advance`](Self::try_advance) hands at most one element to the
///   action and reports whether the traversal may continue.
/// - [`try_split`](Self::try_split) hands part of the remaining work to a
///   new instance. `None` means "no split possible" and is a normal outcome.
///   When a split succeeds, the returned half covers the elements that come
///   first.
/// - [`estimate_size`](Self::estimate_size) is a hint. It is an exact count
///   only when [`Characteristics::SIZED`] is reported.
///
/// # Thread Safety
///
/// One instance is driven by one thread at a time (`&mut self` enforces
/// this). Parallelism comes from splitting before traversal starts and
/// handing each half to a different worker.
pub trait Spliterator {
    /// The element type.
    type Item;

    /// Performs `action` on the next element, if any.
    ///
    /// Returns `false` once the traversal is finished. A `true` return does
    /// not guarantee that `action` was called; composite sequences may
    /// spend a call on dropping an exhausted part.
    fn try_advance(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool;

    /// Splits off part of the remaining traversal.
    fn try_split(&mut self) -> Option<Self>
    where
        Self: Sized;

    /// Estimated number of remaining elements, or [`UNBOUNDED`].
    fn estimate_size(&self) -> u64;

    /// Traversal properties of this instance.
    fn characteristics(&self) -> Characteristics;

    /// Performs `action` on every remaining element.
    ///
    /// Never returns for a sequence that does not end on its own; bound it
    /// with [`limit`](Self::limit) first.
    fn for_each_remaining(&mut self, action: &mut dyn FnMut(Self::Item)) {
        while self.try_advance(action) {}
    }

    /// Returns `true` if all of `flags` are reported.
    fn has_characteristics(&self, flags: Characteristics) -> bool {
        self.characteristics().contains(flags)
    }

    /// The estimate, if it is known to be an exact count.
    fn exact_size(&self) -> Option<u64> {
        if self.has_characteristics(Characteristics::SIZED) {
            Some(self.estimate_size())
        } else {
            None
        }
    }

    /// Sequential [`Iterator`] over the remaining elements.
    fn stream(self) -> Iter<Self>
    where
        Self: Sized,
    {
        Iter::new(self)
    }

    /// Ends the traversal at the first element for which `proceed` is false.
    fn limit<P>(self, proceed: P) -> Limit<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Limit::new(self, proceed)
    }

    /// Erases the concrete type, keeping the ability to split.
    fn boxed<'a>(self) -> BoxSpliterator<'a, Self::Item>
    where
        Self: Sized + Send + 'a,
    {
        Box::new(self)
    }

    /// Parallel iterator driven by rayon's work-stealing pool.
    #[cfg(feature = "parallel")]
    fn par_stream(self) -> ParSpliterator<Self>
    where
        Self: Sized + Send,
        Self::Item: Send,
    {
        ParSpliterator::new(self)
    }
}

/// Object-safe form of [`Spliterator`].
///
/// Implemented for every `Spliterator + Send`. Use it through
/// [`BoxSpliterator`] to combine sequences of different concrete types.
pub trait DynSpliterator: Send {
    /// The element type.
    type Item;

    /// See [`Spliterator::try_advance`].
    fn try_advance_dyn(&mut self, action: &mut dyn FnMut(Self::Item)) -> bool;

    /// See [`Spliterator::try_split`]; the split-off half is boxed.
    fn try_split_boxed<'a>(&mut self) -> Option<BoxSpliterator<'a, Self::Item>>
    where
        Self: 'a;

    /// See [`Spliterator::estimate_size`].
    fn estimate_size_dyn(&self) -> u64;

    /// See [`Spliterator::characteristics`].
    fn characteristics_dyn(&self) -> Characteristics;
}

/// A boxed, type-erased spliterator.
pub type BoxSpliterator<'a, T> = Box<dyn DynSpliterator<Item = T> + 'a>;

impl<S> DynSpliterator for S
where
    S: Spliterator + Send,
{
    type Item = <S as Spliterator>::Item;

    fn try_advance_dyn(&mut self, action: &mut dyn FnMut(<S as Spliterator>::Item)) -> bool {
        Spliterator::try_advance(self, action)
    }

    fn try_split_boxed<'a>(&mut self) -> Option<BoxSpliterator<'a, <S as Spliterator>::Item>>
    where
        Self: 'a,
    {
        Spliterator::try_split(self).map(|half| Box::new(half) as BoxSpliterator<'a, _>)
    }

    fn estimate_size_dyn(&self) -> u64 {
        Spliterator::estimate_size(self)
    }

    fn characteristics_dyn(&self) -> Characteristics {
        Spliterator::characteristics(self)
    }
}

impl<'a, T: 'a> Spliterator for BoxSpliterator<'a, T> {
    type Item = T;

    fn try_advance(&mut self, action: &mut dyn FnMut(T)) -> bool {
        (**self).try_advance_dyn(action)
    }

    fn try_split(&mut self) -> Option<Self> {
        (**self).try_split_boxed()
    }

    fn estimate_size(&self) -> u64 {
        (**self).estimate_size_dyn()
    }

    fn characteristics(&self) -> Characteristics {
        (**self).characteristics_dyn()
    }
}
