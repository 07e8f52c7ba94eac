//! Traversal characteristics bit-set.

use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Static properties of a spliterator's traversal.
///
/// Host frameworks use these bits to decide which optimizations are safe
/// (e.g. whether order must be preserved when results are merged). The bit
/// values match the classic spliterator protocol, so sets can be exchanged
/// with foreign runtimes as plain integers.
///
/// ```
/// use u_evostream::split::Characteristics;
///
/// let c = Characteristics::ORDERED | Characteristics::SIZED;
/// assert!(c.contains(Characteristics::ORDERED));
/// assert!(!c.contains(Characteristics::SORTED));
/// assert_eq!((c & Characteristics::SIZED).bits(), Characteristics::SIZED.bits());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Characteristics(u32);

impl Characteristics {
    /// No characteristics.
    pub const EMPTY: Self = Self(0);
    /// Elements have a defined encounter order.
    pub const ORDERED: Self = Self(0x0000_0010);
    /// No two encountered elements are equal.
    pub const DISTINCT: Self = Self(0x0000_0001);
    /// Encounter order follows a sort order.
    pub const SORTED: Self = Self(0x0000_0004);
    /// `estimate_size` is an exact count.
    pub const SIZED: Self = Self(0x0000_0040);
    /// Elements are never absent.
    pub const NONNULL: Self = Self(0x0000_0100);
    /// The element source cannot be structurally modified.
    pub const IMMUTABLE: Self = Self(0x0000_0400);
    /// The element source may be safely modified concurrently.
    pub const CONCURRENT: Self = Self(0x0000_1000);
    /// Every split-off part is SIZED as well.
    pub const SUBSIZED: Self = Self(0x0000_4000);
    /// Every bit set. Identity element of [`intersection`](Self::intersection).
    pub const ALL: Self = Self(u32::MAX);

    /// Creates a set from raw bits.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Returns the raw bits.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` if every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns `true` if no bit is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Bitwise OR.
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Bitwise AND.
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Clears every bit of `other`.
    pub const fn without(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for Characteristics {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Characteristics {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for Characteristics {
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Characteristics {
    type Output = Self;

    fn not(self) -> Self {
        Self(!self.0)
    }
}

const NAMES: [(Characteristics, &str); 8] = [
    (Characteristics::ORDERED, "ORDERED"),
    (Characteristics::DISTINCT, "DISTINCT"),
    (Characteristics::SORTED, "SORTED"),
    (Characteristics::SIZED, "SIZED"),
    (Characteristics::NONNULL, "NONNULL"),
    (Characteristics::IMMUTABLE, "IMMUTABLE"),
    (Characteristics::CONCURRENT, "CONCURRENT"),
    (Characteristics::SUBSIZED, "SUBSIZED"),
];

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        let mut known = Self::EMPTY;
        f.write_str("Characteristics(")?;
        for (flag, name) in NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(" | ")?;
                }
                f.write_str(name)?;
                known |= flag;
                first = false;
            }
        }
        let rest = self.without(known);
        if !rest.is_empty() {
            if !first {
                f.write_str(" | ")?;
            }
            write!(f, "{:#x}", rest.0)?;
        } else if first {
            f.write_str("EMPTY")?;
        }
        f.write_str(")")
    }
}
