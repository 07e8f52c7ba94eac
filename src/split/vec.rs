//! Finite, owned element source.

use std::vec;

use super::characteristics::Characteristics;
use super::types::Spliterator;

/// Spliterator over the elements of a `Vec`.
///
/// Splitting hands the front half of the remaining elements to a new
/// instance. Fewer than two remaining elements cannot be split.
///
/// Always reports [`ORDERED`](Characteristics::ORDERED),
/// [`SIZED`](Characteristics::SIZED) and
/// [`SUBSIZED`](Characteristics::SUBSIZED).
#[derive(Debug, Clone)]
pub struct VecSpliterator<T> {
    elements: vec::IntoIter<T>,
    characteristics: Characteristics,
}

impl<T> VecSpliterator<T> {
    const BASE: Characteristics = Characteristics::ORDERED
        .union(Characteristics::SIZED)
        .union(Characteristics::SUBSIZED);

    /// Creates a spliterator over `elements`.
    pub fn new(elements: Vec<T>) -> Self {
        Self::with_characteristics(elements, Characteristics::EMPTY)
    }

    /// Creates a spliterator reporting `extra` on top of the base set.
    ///
    /// The caller vouches for the extra flags (e.g. `SORTED` for sorted
    /// input); they are not verified.
    pub fn with_characteristics(elements: Vec<T>, extra: Characteristics) -> Self {
        Self {
            elements: elements.into_iter(),
            characteristics: Self::BASE | extra,
        }
    }

    /// Number of remaining elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if no element remains.
    pub fn is_empty(&self) -> bool {
        self.elements.as_slice().is_empty()
    }
}

impl<T> From<Vec<T>> for VecSpliterator<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}

impl<T> Spliterator for VecSpliterator<T> {
    type Item = T;

    fn try_advance(&mut self, action: &mut dyn FnMut(T)) -> bool {
        match self.elements.next() {
            Some(item) => {
                action(item);
                true
            }
            None => false,
        }
    }

    fn try_split(&mut self) -> Option<Self> {
        let mid = self.elements.len() / 2;
        if mid == 0 {
            return None;
        }
        let prefix: Vec<T> = self.elements.by_ref().take(mid).collect();
        Some(Self {
            elements: prefix.into_iter(),
            characteristics: self.characteristics,
        })
    }

    fn estimate_size(&self) -> u64 {
        self.elements.len() as u64
    }

    fn characteristics(&self) -> Characteristics {
        self.characteristics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hands_off_front_half() {
        let mut s = VecSpliterator::new(vec![1, 2, 3, 4, 5]);
        let prefix = s.try_split().expect("5 elements must split");
        assert_eq!(prefix.len(), 2);
        assert_eq!(s.len(), 3);
        assert_eq!(prefix.stream().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(s.stream().collect::<Vec<_>>(), vec![3, 4, 5]);
    }

    #[test]
    fn test_single_element_does_not_split() {
        let mut s = VecSpliterator::new(vec![1]);
        assert!(s.try_split().is_none());
        assert_eq!(s.len(), 1);

        let mut empty = VecSpliterator::<u8>::new(Vec::new());
        assert!(empty.is_empty());
        assert!(empty.try_split().is_none());
        assert!(!empty.try_advance(&mut |_| {}));
    }

    #[test]
    fn test_split_keeps_extra_characteristics() {
        let mut s = VecSpliterator::with_characteristics(vec![1, 2], Characteristics::SORTED);
        let prefix = s.try_split().expect("2 elements must split");
        assert!(prefix.has_characteristics(Characteristics::SORTED | Characteristics::SIZED));
        assert!(s.has_characteristics(Characteristics::ORDERED));
    }

    #[test]
    fn test_estimate_is_remaining_count() {
        let mut s: VecSpliterator<_> = vec![1, 2, 3].into();
        assert_eq!(s.estimate_size(), 3);
        s.try_advance(&mut |_| {});
        assert_eq!(s.estimate_size(), 2);
        assert_eq!(s.exact_size(), Some(2));
    }
}
