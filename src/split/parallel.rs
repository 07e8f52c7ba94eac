//! Bridge from [`Spliterator`] to rayon's parallel iterators.
//!
//! rayon plays the part of the host work-stealing framework: it calls
//! [`Spliterator::try_split`] while fanning work out across its pool and
//! then drains each half sequentially on one worker.

use rayon::iter::plumbing::{bridge_unindexed, Folder, UnindexedConsumer, UnindexedProducer};
use rayon::iter::ParallelIterator;

use super::types::Spliterator;

/// Parallel iterator over a spliterator.
///
/// Created by [`Spliterator::par_stream`]. Unbounded sources must be
/// limited first, otherwise the workers never finish.
///
/// Results of order-sensitive reductions (e.g. `collect`) follow split
/// order: the split-off half comes before the half that remained.
#[derive(Debug, Clone)]
pub struct ParSpliterator<S> {
    inner: S,
}

impl<S> ParSpliterator<S>
where
    S: Spliterator + Send,
    S::Item: Send,
{
    pub(crate) fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S> ParallelIterator for ParSpliterator<S>
where
    S: Spliterator + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn drive_unindexed<C>(self, consumer: C) -> C::Result
    where
        C: UnindexedConsumer<Self::Item>,
    {
        bridge_unindexed(SpliteratorProducer { inner: self.inner }, consumer)
    }
}

struct SpliteratorProducer<S> {
    inner: S,
}

impl<S> UnindexedProducer for SpliteratorProducer<S>
where
    S: Spliterator + Send,
    S::Item: Send,
{
    type Item = S::Item;

    fn split(mut self) -> (Self, Option<Self>) {
        match self.inner.try_split() {
            Some(prefix) => (SpliteratorProducer { inner: prefix }, Some(self)),
            None => (self, None),
        }
    }

    fn fold_with<F>(mut self, mut folder: F) -> F
    where
        F: Folder<Self::Item>,
    {
        let mut slot = None;
        while !folder.full() {
            let more = self.inner.try_advance(&mut |item| slot = Some(item));
            if let Some(item) = slot.take() {
                folder = folder.consume(item);
            }
            if !more {
                break;
            }
        }
        folder
    }
}
