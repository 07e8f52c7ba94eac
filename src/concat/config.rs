//! Concatenation configuration.

use crate::split::UNBOUNDED;

/// How a concatenation combines its parts' size estimates.
///
/// Whatever the mode, an [`UNBOUNDED`] part makes the whole estimate
/// unbounded, and a bounded combination never saturates into the sentinel.
///
/// ```
/// use u_evostream::concat::SizeEstimation;
/// use u_evostream::split::UNBOUNDED;
///
/// assert_eq!(SizeEstimation::default(), SizeEstimation::MinTimesCount);
/// assert_eq!(SizeEstimation::MinTimesCount.combine([10, 4, 7]), 12);
/// assert_eq!(SizeEstimation::Sum.combine([10, 4, 7]), 21);
/// assert_eq!(SizeEstimation::Sum.combine([10, UNBOUNDED]), UNBOUNDED);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizeEstimation {
    /// Smallest part estimate times the number of parts.
    ///
    /// Cheap, and biased low for uneven parts, which keeps a host framework
    /// willing to split further.
    #[default]
    MinTimesCount,

    /// Sum of the part estimates.
    Sum,
}

impl SizeEstimation {
    /// Combines part estimates. No parts yield 0.
    pub fn combine<I>(self, estimates: I) -> u64
    where
        I: IntoIterator<Item = u64>,
    {
        let mut count = 0u64;
        let mut min = u64::MAX;
        let mut sum = 0u64;
        for estimate in estimates {
            if estimate == UNBOUNDED {
                return UNBOUNDED;
            }
            count += 1;
            min = min.min(estimate);
            sum = sum.saturating_add(estimate);
        }

        if count == 0 {
            return 0;
        }
        let combined = match self {
            SizeEstimation::MinTimesCount => min.saturating_mul(count),
            SizeEstimation::Sum => sum,
        };
        combined.min(UNBOUNDED - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_parts() {
        assert_eq!(SizeEstimation::MinTimesCount.combine([]), 0);
        assert_eq!(SizeEstimation::Sum.combine([]), 0);
    }

    #[test]
    fn test_min_times_count() {
        assert_eq!(SizeEstimation::MinTimesCount.combine([5]), 5);
        assert_eq!(SizeEstimation::MinTimesCount.combine([3, 100, 9]), 9);
        assert_eq!(SizeEstimation::MinTimesCount.combine([0, 100]), 0);
    }

    #[test]
    fn test_sum() {
        assert_eq!(SizeEstimation::Sum.combine([3, 100, 9]), 112);
    }

    #[test]
    fn test_unbounded_part_wins() {
        for mode in [SizeEstimation::MinTimesCount, SizeEstimation::Sum] {
            assert_eq!(mode.combine([1, UNBOUNDED, 0]), UNBOUNDED);
            assert_eq!(mode.combine([UNBOUNDED]), UNBOUNDED);
        }
    }

    #[test]
    fn test_saturation_stays_below_sentinel() {
        let big = UNBOUNDED - 1;
        assert_eq!(SizeEstimation::MinTimesCount.combine([big, big]), UNBOUNDED - 1);
        assert_eq!(SizeEstimation::Sum.combine([big, big, 5]), UNBOUNDED - 1);
    }
}
