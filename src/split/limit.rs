//! Predicate-limited traversal.

use std::fmt;
use std::sync::Arc;

use super::characteristics::Characteristics;
use super::types::Spliterator;

/// Passes elements on while a predicate holds.
///
/// The first element failing the predicate is dropped and ends the
/// traversal. This is the stopping rule for sequences that never end on
/// their own, such as an
/// [`EvolutionSpliterator`](crate::evolution::EvolutionSpliterator).
///
/// Splitting delegates to the inner spliterator; both halves share the
/// predicate and apply it independently. For independent generator runs
/// each half is a correctly limited run. For a partitioned finite source
/// the halves are not equivalent to sequential traversal: the later half
/// still yields elements that come after the first rejected one.
///
/// Created by [`Spliterator::limit`].
pub struct Limit<S, P> {
    inner: S,
    proceed: Arc<P>,
    done: bool,
}

impl<S, P> Limit<S, P>
where
    S: Spliterator,
    P: Fn(&S::Item) -> bool,
{
    pub(crate) fn new(inner: S, proceed: P) -> Self {
        Self {
            inner,
            proceed: Arc::new(proceed),
            done: false,
        }
    }

    /// Returns `true` once the predicate has rejected an element or the
    /// inner sequence is exhausted.
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl<S, P> Spliterator for Limit<S, P>
where
    S: Spliterator,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        if self.done {
            return false;
        }

        let proceed = &*self.proceed;
        let mut rejected = false;
        let more = self.inner.try_advance(&mut |item| {
            if proceed(&item) {
                action(item);
            } else {
                rejected = true;
            }
        });

        if rejected {
            tracing::trace!("limit predicate ended traversal");
            self.done = true;
            return false;
        }
        if !more {
            self.done = true;
        }
        more
    }

    fn try_split(&mut self) -> Option<Self> {
        if self.done {
            return None;
        }
        self.inner.try_split().map(|inner| Self {
            inner,
            proceed: Arc::clone(&self.proceed),
            done: false,
        })
    }

    fn estimate_size(&self) -> u64 {
        if self.done {
            0
        } else {
            self.inner.estimate_size()
        }
    }

    fn characteristics(&self) -> Characteristics {
        self.inner
            .characteristics()
            .without(Characteristics::SIZED | Characteristics::SUBSIZED)
    }
}

impl<S: fmt::Debug, P> fmt::Debug for Limit<S, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limit")
            .field("inner", &self.inner)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::split::VecSpliterator;

    #[test]
    fn test_stops_at_first_rejected_element() {
        let v: Vec<_> = VecSpliterator::new(vec![1, 2, 3, 10, 4, 5])
            .limit(|&x| x < 5)
            .stream()
            .collect();
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_rejected_element_is_not_delivered() {
        let mut limited = VecSpliterator::new(vec![7, 1]).limit(|&x| x < 5);
        let mut calls = 0;
        assert!(!limited.try_advance(&mut |_| calls += 1));
        assert_eq!(calls, 0);
        assert!(limited.is_done());
        assert_eq!(limited.estimate_size(), 0);
        assert!(limited.try_split().is_none());
    }

    #[test]
    fn test_halves_apply_predicate_independently() {
        let mut suffix = VecSpliterator::new(vec![1, 9, 3, 4, 9, 6]).limit(|&x| x != 9);
        let prefix = suffix.try_split().expect("6 elements must split");

        let a: Vec<_> = prefix.stream().collect();
        let b: Vec<_> = suffix.stream().collect();
        assert_eq!(a, vec![1]);
        assert_eq!(b, vec![4]);

        // Sequential traversal stops at the first rejection instead.
        let sequential: Vec<_> = VecSpliterator::new(vec![1, 9, 3, 4, 9, 6])
            .limit(|&x| x != 9)
            .stream()
            .collect();
        assert_eq!(sequential, vec![1]);
    }

    #[test]
    fn test_clears_sized_bits() {
        let limited = VecSpliterator::with_characteristics(vec![1], Characteristics::SORTED)
            .limit(|_| true);
        let c = limited.characteristics();
        assert!(c.contains(Characteristics::ORDERED | Characteristics::SORTED));
        assert!(!c.contains(Characteristics::SIZED));
        assert!(!c.contains(Characteristics::SUBSIZED));
    }

    #[test]
    fn test_exhausted_inner_marks_done() {
        let mut limited = VecSpliterator::new(vec![1]).limit(|_| true);
        let mut seen = Vec::new();
        assert!(limited.try_advance(&mut |x| seen.push(x)));
        assert!(!limited.try_advance(&mut |x| seen.push(x)));
        assert!(limited.is_done());
        assert_eq!(seen, vec![1]);
    }
}
