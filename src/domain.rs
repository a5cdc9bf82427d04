//! Core domain types for submatrix selection
//!
//! A 2x2 window is selected by one pair of row indices and one pair of column
//! indices. [`IndexPair`] is the type-safe wrapper for such a pair: it can only
//! be built from two distinct indices, so a degenerate window (same row or
//! column twice) cannot be expressed.

/// Ordered pair of two distinct indices drawn from `0..k`
///
/// `(a, b)` and `(b, a)` are different pairs. The same type is used for row
/// and column selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IndexPair {
    first: usize,
    second: usize,
}

impl IndexPair {
    /// Create a pair, returning `None` when both indices are equal
    #[inline]
    pub const fn new(first: usize, second: usize) -> Option<Self> {
        if first == second {
            None
        } else {
            Some(Self { first, second })
        }
    }

    #[inline]
    pub const fn first(&self) -> usize {
        self.first
    }

    #[inline]
    pub const fn second(&self) -> usize {
        self.second
    }

    /// The same two indices in the opposite order
    #[inline]
    pub const fn swapped(&self) -> Self {
        Self {
            first: self.second,
            second: self.first,
        }
    }
}

impl TryFrom<(usize, usize)> for IndexPair {
    type Error = (usize, usize);

    fn try_from(pair: (usize, usize)) -> Result<Self, Self::Error> {
        IndexPair::new(pair.0, pair.1).ok_or(pair)
    }
}

impl From<IndexPair> for (usize, usize) {
    fn from(pair: IndexPair) -> Self {
        (pair.first, pair.second)
    }
}

impl std::fmt::Display for IndexPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
