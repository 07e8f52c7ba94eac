//! Order-preserving concatenation of spliterators.

use std::collections::VecDeque;
use std::mem;

use super::config::SizeEstimation;
use crate::split::{Characteristics, Spliterator};

/// Presents several spliterators as one sequence: every element of the
/// first part, then every element of the second, and so on.
///
/// Parts are owned by the concatenation and drained lazily; exhausted parts
/// are dropped as traversal moves on.
///
/// # Splitting
///
/// A split is all-or-nothing: every part must split, and the split-off
/// halves, in part order, form the returned concatenation while `self`
/// keeps the remainders. Splitting only some parts would leave two
/// concatenations whose orders no longer line up.
///
/// When a part declines, the halves already split off from
/// [`SIZED`](Characteristics::SIZED) or
/// [`SUBSIZED`](Characteristics::SUBSIZED) parts are put back in front of
/// their remainders, so no element of a data partition is lost or
/// repeated. Halves of other parts, such as generator branches, carry no
/// element of their own and are dropped: a declined split never adds a
/// run nor raises the estimate of a generator part.
///
/// # Characteristics
///
/// The intersection of the parts' characteristics, minus
/// [`SORTED`](Characteristics::SORTED): sorted parts joined end to end are
/// not sorted as a whole.
#[derive(Debug, Clone)]
pub struct ConcatSpliterator<S> {
    parts: VecDeque<S>,
    estimation: SizeEstimation,
}

impl<S: Spliterator> ConcatSpliterator<S> {
    /// Concatenates `parts` in iteration order.
    pub fn new<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self::with_estimation(parts, SizeEstimation::default())
    }

    /// Concatenates `parts`, combining size estimates with `estimation`.
    pub fn with_estimation<I>(parts: I, estimation: SizeEstimation) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        Self {
            parts: parts.into_iter().collect(),
            estimation,
        }
    }

    /// Number of parts not yet exhausted.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Returns `true` once every part is exhausted.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// The estimation mode, shared with every split-off concatenation.
    pub fn estimation(&self) -> SizeEstimation {
        self.estimation
    }

    /// Undoes a declined split: sized halves go back in front of their
    /// remainders, the rest are dropped.
    fn restore(&mut self, halves: Vec<S>) {
        const PARTITIONED: Characteristics =
            Characteristics::SIZED.union(Characteristics::SUBSIZED);

        let rest = self.parts.split_off(halves.len());
        let heads = mem::take(&mut self.parts);

        let mut restored = VecDeque::with_capacity(heads.len() * 2 + rest.len());
        for (index, (half, head)) in halves.into_iter().zip(heads).enumerate() {
            if half.characteristics().intersection(PARTITIONED).is_empty() {
                tracing::trace!(part = index, "dropping unsized split-off half");
            } else {
                restored.push_back(half);
            }
            restored.push_back(head);
        }
        restored.extend(rest);
        self.parts = restored;
    }
}

impl<S: Spliterator> Spliterator for ConcatSpliterator<S> {
    type Item = S::Item;

    fn try_advance(&mut self, action: &mut dyn FnMut(S::Item)) -> bool {
        let Some(head) = self.parts.front_mut() else {
            return false;
        };

        if head.try_advance(action) {
            true
        } else {
            self.parts.pop_front();
            !self.parts.is_empty()
        }
    }

    fn try_split(&mut self) -> Option<Self> {
        if self.parts.is_empty() {
            return None;
        }

        let mut halves = Vec::with_capacity(self.parts.len());
        let mut declined = None;
        for (index, part) in self.parts.iter_mut().enumerate() {
            match part.try_split() {
                Some(half) => halves.push(half),
                None => {
                    declined = Some(index);
                    break;
                }
            }
        }

        if let Some(index) = declined {
            tracing::trace!(part = index, parts = self.parts.len(), "concat split declined");
            self.restore(halves);
            return None;
        }

        tracing::trace!(parts = halves.len(), "concat split");
        Some(Self {
            parts: halves.into(),
            estimation: self.estimation,
        })
    }

    fn estimate_size(&self) -> u64 {
        self.estimation
            .combine(self.parts.iter().map(|part| part.estimate_size()))
    }

    fn characteristics(&self) -> Characteristics {
        self.parts
            .iter()
            .fold(Characteristics::ALL, |acc, part| acc & part.characteristics())
            .without(Characteristics::SORTED)
    }
}

// ============================================================================
// Tests
// ============================================================================
