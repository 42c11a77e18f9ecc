//! Best-first population under rank insertion.

use std::cmp::Ordering;

/// A population kept sorted best-first by a caller-supplied comparator.
///
/// The comparator is passed to every mutating call rather than stored, so
/// the same ordering must be used throughout.
#[derive(Debug, Clone)]
pub struct SortedPopulation<T> {
    members: Vec<T>,
}

impl<T> SortedPopulation<T> {
    /// Sorts `members` best-first. Equal members keep their order.
    pub fn from_unsorted<F>(mut members: Vec<T>, mut compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        members.sort_by(|a, b| compare(a, b));
        Self { members }
    }

    /// Inserts `item` at its rank and returns that rank.
    ///
    /// An item equal to existing members goes after all of them, so rank 0
    /// means `item` is strictly better than the previous best.
    pub fn insert<F>(&mut self, item: T, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let rank = self
            .members
            .partition_point(|member| compare(member, &item) != Ordering::Greater);
        self.members.insert(rank, item);
        rank
    }

    /// Removes and returns the worst member while the size exceeds `max`.
    pub fn evict_beyond(&mut self, max: usize) -> Option<T> {
        if self.members.len() > max {
            self.members.pop()
        } else {
            None
        }
    }

    pub fn best(&self) -> Option<&T> {
        self.members.first()
    }

    pub fn worst(&self) -> Option<&T> {
        self.members.last()
    }

    pub fn get(&self, rank: usize) -> Option<&T> {
        self.members.get(rank)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.members
    }

    pub fn into_vec(self) -> Vec<T> {
        self.members
    }

    /// Whether every adjacent pair is in order.
    pub fn is_sorted_by<F>(&self, mut compare: F) -> bool
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.members
            .windows(2)
            .all(|pair| compare(&pair[0], &pair[1]) != Ordering::Greater)
    }
}
