//! Unbounded generator of evolution results.

use std::fmt;
use std::mem;
use std::sync::Arc;

use super::types::EvolutionResult;
use crate::split::{Characteristics, Spliterator, UNBOUNDED};

/// Where a generator currently is in its run.
enum Cursor<St> {
    /// The start snapshot has not been requested yet.
    Unstarted,
    /// Snapshot for the next step.
    At(St),
    /// A start or evolution call panicked mid-step.
    Poisoned,
}

/// Generates evolution results by repeatedly applying an evolution function
/// to the snapshot left behind by the previous step.
///
/// # Unbounded by contract
///
/// [`try_advance`](Spliterator::try_advance) always returns `true`. The
/// generator has no natural end: termination is the caller's decision,
/// usually expressed with [`Spliterator::limit`]. Draining it without a
/// limit never returns.
///
/// # Splitting spawns independent runs
///
/// The size estimate is a parallelism budget, not an element count. A split
/// is possible while the budget is positive; it halves the budget and
/// returns a new generator with the same start supplier and evolution
/// function and the same halved budget. The new generator pulls its own
/// start snapshot, so it does **not** continue or partition this
/// generator's run. Splitting multiplies independent runs. That suits
/// independent trials of the same stochastic process; it is not a way to
/// parallelize one state-dependent run.
///
/// # Laziness
///
/// The start supplier is called once per instance, on the first advance,
/// never at construction. A generator is typically built on one thread and
/// drained on another.
pub struct EvolutionSpliterator<St, S, E> {
    start: Arc<S>,
    evolution: Arc<E>,
    estimate: u64,
    cursor: Cursor<St>,
}

impl<St, S, E> EvolutionSpliterator<St, S, E> {
    /// Creates an unbounded generator with an [`UNBOUNDED`] split budget.
    pub fn new<R>(start: S, evolution: E) -> Self
    where
        S: Fn() -> St,
        E: Fn(St) -> R,
        R: EvolutionResult<Start = St>,
    {
        Self::with_estimate(start, evolution, UNBOUNDED)
    }

    /// Creates a generator with the given split budget.
    pub fn with_estimate<R>(start: S, evolution: E, estimate: u64) -> Self
    where
        S: Fn() -> St,
        E: Fn(St) -> R,
        R: EvolutionResult<Start = St>,
    {
        Self::from_shared(Arc::new(start), Arc::new(evolution), estimate)
    }

    pub(crate) fn from_shared(start: Arc<S>, evolution: Arc<E>, estimate: u64) -> Self {
        Self {
            start,
            evolution,
            estimate,
            cursor: Cursor::Unstarted,
        }
    }

    /// Returns `true` once the start snapshot has been pulled.
    pub fn is_started(&self) -> bool {
        !matches!(self.cursor, Cursor::Unstarted)
    }

    /// Returns `true` if a start or evolution call panicked.
    ///
    /// A poisoned generator reports the end of its sequence.
    pub fn is_poisoned(&self) -> bool {
        matches!(self.cursor, Cursor::Poisoned)
    }
}

impl<St, R, S, E> Spliterator for EvolutionSpliterator<St, S, E>
where
    S: Fn() -> St,
    E: Fn(St) -> R,
    R: EvolutionResult<Start = St>,
{
    type Item = R;

    fn try_advance(&mut self, action: &mut dyn FnMut(R)) -> bool {
        // Stays poisoned if start or evolution unwinds.
        let current = match mem::replace(&mut self.cursor, Cursor::Poisoned) {
            Cursor::At(snapshot) => snapshot,
            Cursor::Unstarted => {
                tracing::debug!(estimate = self.estimate, "pulling start snapshot");
                (*self.start)()
            }
            Cursor::Poisoned => {
                tracing::warn!("advance on a generator whose evolution step failed");
                return false;
            }
        };

        let result = (*self.evolution)(current);
        self.cursor = Cursor::At(result.next());
        action(result);
        true
    }

    fn try_split(&mut self) -> Option<Self> {
        if self.estimate == 0 {
            tracing::trace!("evolution split declined: budget exhausted");
            return None;
        }

        self.estimate >>= 1;
        tracing::trace!(estimate = self.estimate, "evolution split");
        Some(Self::from_shared(
            Arc::clone(&self.start),
            Arc::clone(&self.evolution),
            self.estimate,
        ))
    }

    fn estimate_size(&self) -> u64 {
        self.estimate
    }

    fn characteristics(&self) -> Characteristics {
        Characteristics::NONNULL | Characteristics::IMMUTABLE | Characteristics::ORDERED
    }
}

impl<St, S, E> fmt::Debug for EvolutionSpliterator<St, S, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = match self.cursor {
            Cursor::Unstarted => "unstarted",
            Cursor::At(_) => "running",
            Cursor::Poisoned => "poisoned",
        };
        f.debug_struct("EvolutionSpliterator")
            .field("estimate", &self.estimate)
            .field("cursor", &cursor)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
