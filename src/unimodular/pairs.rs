//! Index-pair generation for the 2x2 scan
//!
//! `ordered_pairs` follows the order of a standard 2-permutation generator:
//! `(0,1), (0,2), .., (0,k-1), (1,0), (1,2), ..`. `unordered_pairs` yields
//! only `a < b` in lexicographic order, which is half the work and gives the
//! same verdict: swapping one pair of a window flips the sign of its
//! determinant, and swapping both leaves it unchanged.

use crate::domain::IndexPair;

/// Which pairs the scanner enumerates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PairEnumeration {
    /// Every ordered pair, k*(k-1) of them
    #[default]
    Ordered,
    /// Only pairs with `first < second`, k*(k-1)/2 of them
    Unordered,
}

impl PairEnumeration {
    /// Number of pairs generated for `k` indices
    pub fn pair_count(self, k: usize) -> usize {
        let ordered = k * k.saturating_sub(1);
        match self {
            PairEnumeration::Ordered => ordered,
            PairEnumeration::Unordered => ordered / 2,
        }
    }

    /// Materialize the pairs for `k` indices
    pub fn pairs(self, k: usize) -> Vec<IndexPair> {
        match self {
            PairEnumeration::Ordered => ordered_pairs(k).collect(),
            PairEnumeration::Unordered => unordered_pairs(k).collect(),
        }
    }
}

/// All ordered pairs of distinct indices in `0..k`
pub fn ordered_pairs(k: usize) -> impl Iterator<Item = IndexPair> + Clone {
    (0..k).flat_map(move |a| (0..k).filter_map(move |b| IndexPair::new(a, b)))
}

/// All pairs `a < b` in `0..k`
pub fn unordered_pairs(k: usize) -> impl Iterator<Item = IndexPair> + Clone {
    (0..k).flat_map(move |a| ((a + 1)..k).filter_map(move |b| IndexPair::new(a, b)))
}
