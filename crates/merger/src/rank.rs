use std::cmp::Ordering;

/// Sort key of an item, smaller is better.
///
/// Ordered by points first, then by length and finally by the original
/// input index, which makes the order total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rank {
    pub points: u32,
    pub length: u32,
    pub index: u32,
}

impl Rank {
    pub fn new(points: u32, length: u32, index: u32) -> Rank {
        Rank {
            points,
            length,
            index,
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.points, self.length, self.index).cmp(&(other.points, other.length, other.index))
    }
}

/// Something that can report its rank.
///
/// The merger only ever asks for an already established rank, it never
/// requests a recomputation.
pub trait Ranked {
    type Rank: Ord;

    fn rank(&self) -> Self::Rank;
}

impl<T: Ranked> Ranked for &T {
    type Rank = T::Rank;

    fn rank(&self) -> Self::Rank {
        (*self).rank()
    }
}

/// Returns true if `a` ranks strictly before `b`.
#[inline]
pub fn compare_ranks<R: Ord>(a: &R, b: &R) -> bool {
    a < b
}
