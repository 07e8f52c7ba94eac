//! Sequential iterator adapter.

use super::types::Spliterator;

/// [`Iterator`] over the remaining elements of a spliterator.
///
/// Created by [`Spliterator::stream`].
#[derive(Debug, Clone)]
pub struct Iter<S> {
    inner: S,
    done: bool,
}

impl<S: Spliterator> Iter<S> {
    pub(crate) fn new(inner: S) -> Self {
        Self { inner, done: false }
    }

    /// Returns the underlying spliterator.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: Spliterator> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<S::Item> {
        while !self.done {
            let mut slot = None;
            let more = self.inner.try_advance(&mut |item| slot = Some(item));
            if !more {
                self.done = true;
            }
            if slot.is_some() {
                return slot;
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            return (0, Some(0));
        }
        match self.inner.exact_size() {
            Some(n) => match usize::try_from(n) {
                Ok(n) => (n, Some(n)),
                Err(_) => (usize::MAX, None),
            },
            None => (0, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concat::ConcatSpliterator;
    use crate::split::VecSpliterator;

    #[test]
    fn test_collects_all_elements() {
        let v: Vec<_> = VecSpliterator::new(vec!['a', 'b', 'c']).stream().collect();
        assert_eq!(v, vec!['a', 'b', 'c']);
    }

    #[test]
    fn test_skips_calls_that_only_drop_exhausted_parts() {
        // The empty middle child costs a call that produces nothing.
        let concat = ConcatSpliterator::new(vec![
            VecSpliterator::new(vec![1]),
            VecSpliterator::new(vec![]),
            VecSpliterator::new(vec![2]),
        ]);
        let v: Vec<_> = concat.stream().collect();
        assert_eq!(v, vec![1, 2]);
    }

    #[test]
    fn test_size_hint_tracks_sized_source() {
        let mut it = VecSpliterator::new(vec![1, 2, 3]).stream();
        assert_eq!(it.size_hint(), (3, Some(3)));
        it.next();
        assert_eq!(it.size_hint(), (2, Some(2)));
        it.by_ref().for_each(drop);
        assert_eq!(it.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_size_hint_unknown_without_sized() {
        let it = VecSpliterator::new(vec![1, 2, 3]).limit(|_| true).stream();
        assert_eq!(it.size_hint(), (0, None));
    }

    #[test]
    fn test_into_inner_resumes_traversal() {
        let mut it = VecSpliterator::new(vec![1, 2, 3]).stream();
        assert_eq!(it.next(), Some(1));
        let mut rest = it.into_inner();
        let mut seen = Vec::new();
        rest.for_each_remaining(&mut |x| seen.push(x));
        assert_eq!(seen, vec![2, 3]);
    }
}
