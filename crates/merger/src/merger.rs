use std::{cell::RefCell, ops::Deref};

use crate::{
    error::MergeError,
    rank::{compare_ranks, Ranked},
};

/// Merge progress, grows as items are requested.
#[derive(Debug)]
struct MergeState<'a, T> {
    /// Next unconsumed position for each list, None once the list is exhausted
    cursors: Vec<Option<usize>>,
    /// Items already placed into their final global order
    merged: Vec<&'a T>,
}

/// Holds a set of locally sorted lists of items and provides the view of a
/// single, globally sorted list.
///
/// Lists are merged lazily: requesting index `n` merges only up to `n` and
/// the merged prefix is never recomputed. The merge progress is kept using
/// interior mutability so a `Merger` is not `Sync`, access from multiple
/// threads must go through a lock.
#[derive(Debug)]
pub struct Merger<'a, T> {
    lists: Vec<&'a [T]>,
    sorted: bool,
    tac: bool,
    count: usize,
    state: RefCell<MergeState<'a, T>>,
}

impl<'a, T: Ranked> Merger<'a, T> {
    /// Create a merger over `lists`.
    ///
    /// If `sorted` is set every list must be individually sorted by rank and
    /// the lists are merged into a global order. Otherwise the lists are
    /// viewed as if they were concatenated.
    pub fn new<L>(lists: &'a [L], sorted: bool) -> Merger<'a, T>
    where
        L: Deref<Target = [T]>,
    {
        let lists: Vec<&'a [T]> = lists.iter().map(Deref::deref).collect();
        let count = lists.iter().map(|list| list.len()).sum();
        let state = MergeState {
            cursors: vec![Some(0); lists.len()],
            merged: Vec::new(),
        };

        log::debug!(
            "New merger: {} lists, {count} items, sorted: {sorted}",
            lists.len()
        );

        Merger {
            lists,
            sorted,
            tac: false,
            count,
            state: RefCell::new(state),
        }
    }

    /// Merger with no data, usable in constants
    pub const fn empty() -> Merger<'a, T> {
        Merger {
            lists: Vec::new(),
            sorted: false,
            tac: false,
            count: 0,
            state: RefCell::new(MergeState {
                cursors: Vec::new(),
                merged: Vec::new(),
            }),
        }
    }

    /// Reverse the concatenated view of unsorted lists
    pub fn tac(mut self, tac: bool) -> Merger<'a, T> {
        self.tac = tac;
        self
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of items already merged into global order
    pub fn realized(&self) -> usize {
        self.state.borrow().merged.len()
    }

    /// Returns the item at global position `idx`.
    ///
    /// # Panics
    ///
    /// If `idx >= self.len()`. An index outside the merger is a bookkeeping
    /// error of the caller, for example a length taken from a previous
    /// merger. Use [`Merger::try_get`] when the index is not trusted.
    pub fn get(&self, idx: usize) -> &'a T {
        if idx >= self.count {
            panic!(
                "Index out of bounds ({}, {idx}/{})",
                self.strategy(),
                self.count
            );
        }

        if self.lists.len() == 1 && (self.sorted || !self.tac) {
            let list = self.lists[0];
            return &list[idx];
        }

        if !self.sorted {
            let idx = if self.tac { self.count - idx - 1 } else { idx };
            return self.concat_get(idx);
        }

        self.merged_get(idx)
    }

    /// Returns the item at global position `idx` or an error if the index is
    /// out of bounds.
    pub fn try_get(&self, idx: usize) -> Result<&'a T, MergeError> {
        if idx >= self.count {
            return Err(MergeError::OutOfBounds {
                index: idx,
                len: self.count,
            });
        }

        Ok(self.get(idx))
    }

    /// Returns at most `count` items starting from `offset`.
    pub fn window(&self, offset: usize, count: usize) -> Vec<&'a T> {
        let start = offset.min(self.count);
        let end = offset.saturating_add(count).min(self.count);
        (start..end).map(|i| self.get(i)).collect()
    }

    /// Global position of the first item matching `pred`
    pub fn position<F>(&self, mut pred: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        (0..self.count).find(|i| pred(self.get(*i)))
    }

    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            merger: self,
            pos: 0,
        }
    }

    fn strategy(&self) -> &'static str {
        if self.sorted {
            "sorted"
        } else {
            "unsorted"
        }
    }

    fn concat_get(&self, mut idx: usize) -> &'a T {
        for &list in &self.lists {
            let n = list.len();
            if idx < n {
                return &list[idx];
            }
            idx -= n;
        }

        panic!("Index out of bounds (unsorted, {idx}/{})", self.count);
    }

    /// Merge the locally sorted lists until `idx` is reached.
    ///
    /// Each new position costs one scan over the list heads. On equal ranks
    /// the list scanned first wins.
    fn merged_get(&self, idx: usize) -> &'a T {
        let mut state = self.state.borrow_mut();
        let MergeState { cursors, merged } = &mut *state;

        if merged.len() <= idx {
            log::trace!("Merging positions {}..={idx}", merged.len());
        }

        for i in merged.len()..=idx {
            // list index and its current head
            let mut min: Option<(usize, &'a T, T::Rank)> = None;

            for (c, &list) in self.lists.iter().enumerate() {
                let Some(cursor) = cursors[c] else {
                    continue;
                };

                if cursor >= list.len() {
                    cursors[c] = None;
                    continue;
                }

                let item = &list[cursor];
                let rank = item.rank();
                let replace = min
                    .as_ref()
                    .map(|(_, _, min_rank)| compare_ranks(&rank, min_rank))
                    .unwrap_or(true);

                if replace {
                    min = Some((c, item, rank));
                }
            }

            match min {
                Some((c, item, _)) => {
                    merged.push(item);
                    cursors[c] = cursors[c].map(|cursor| cursor + 1);
                }
                None => panic!("Index out of bounds (sorted, {i}/{})", self.count),
            }
        }

        merged[idx]
    }
}

impl<'a, T: Ranked> Default for Merger<'a, T> {
    fn default() -> Self {
        Merger::empty()
    }
}

/// Iterator over the items of a merger in global order
pub struct Iter<'m, 'a, T> {
    merger: &'m Merger<'a, T>,
    pos: usize,
}

impl<'m, 'a, T: Ranked> Iterator for Iter<'m, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.merger.len() {
            return None;
        }

        let item = self.merger.get(self.pos);
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.merger.len() - self.pos;
        (n, Some(n))
    }
}

impl<'m, 'a, T: Ranked> ExactSizeIterator for Iter<'m, 'a, T> {}
