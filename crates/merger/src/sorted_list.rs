use std::ops::{Deref, Index};

use crate::rank::Ranked;

/// A list that is always sorted by rank.
/// Items with equal rank keep their insertion order.
#[derive(Debug, Clone)]
pub struct SortedList<T: Ranked> {
    items: Vec<T>,
}

impl<T: Ranked> SortedList<T> {
    pub fn new() -> SortedList<T> {
        SortedList { items: Vec::new() }
    }

    pub fn get(&self, i: usize) -> Option<&T> {
        self.items.get(i)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T: Ranked> Default for SortedList<T> {
    fn default() -> Self {
        SortedList::new()
    }
}

impl<T: Ranked> Deref for SortedList<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl<T: Ranked> Index<usize> for SortedList<T> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        &self.items[i]
    }
}

impl<T: Ranked> From<Vec<T>> for SortedList<T> {
    fn from(mut items: Vec<T>) -> Self {
        items.sort_by_cached_key(|item| item.rank());
        SortedList { items }
    }
}

impl<T: Ranked> FromIterator<T> for SortedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        items.into()
    }
}
