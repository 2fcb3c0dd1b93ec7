//! The record store: an owned, growable collection of movies.
//!
//! The store keeps a slot array whose length is the capacity and a
//! logical `count` of live records. Slots inside `[0, count)` are
//! vacant only transiently while a delete compacts; every public
//! operation returns with `[0, count)` fully populated.
//!
//! Insertion reuses the lowest vacant slot before appending, deletion
//! shifts the tail left to close the gap, and capacity doubles on
//! demand. This mirrors the catalog's on-disk ordering: the file is
//! written straight from slot order.

use crate::error::StoreError;
use crate::record::Movie;

/// Slots allocated for a store created with `Default::default()`.
pub const INITIAL_CAPACITY: usize = 10;

/// External confirmation signal consumed by [`MovieStore::delete_at`].
///
/// The store never prompts; the frontend collects a keystroke and
/// translates it here. Anything that is not an explicit yes or no is
/// `Unrecognized` and treated as a cancel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Confirmation {
    Yes,
    No,
    Unrecognized,
}

impl Confirmation {
    pub fn from_char(input: char) -> Self {
        match input.to_ascii_lowercase() {
            'y' => Self::Yes,
            'n' => Self::No,
            _ => Self::Unrecognized,
        }
    }
}

/// Result of a confirmed or declined delete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
}

/// Owned collection of movie records.
#[derive(Debug)]
pub struct MovieStore {
    /// Slot array; `slots.len()` is the capacity.
    slots: Vec<Option<Movie>>,
    /// Number of live records in `[0, count)`.
    count: usize,
}

impl Default for MovieStore {
    fn default() -> Self {
        Self::with_capacity(INITIAL_CAPACITY)
    }
}

impl MovieStore {
    /// Create an empty store with the given number of pre-allocated slots.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::new();
        slots.resize_with(capacity, || None);
        Self { slots, count: 0 }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Insert a record, reusing the lowest vacant slot if one exists.
    ///
    /// A reused slot leaves `count` unchanged; an append increments it.
    /// Returns the index the record landed in.
    pub fn insert(&mut self, movie: Movie) -> usize {
        if let Some(index) = self.slots[..self.count]
            .iter()
            .position(Option::is_none)
        {
            self.slots[index] = Some(movie);
            return index;
        }

        if self.count == self.slots.len() {
            self.grow();
        }

        let index = self.count;
        self.slots[index] = Some(movie);
        self.count += 1;
        index
    }

    /// Borrow the record at `index`, if it is live.
    pub fn get(&self, index: usize) -> Option<&Movie> {
        if index < self.count {
            self.slots[index].as_ref()
        } else {
            None
        }
    }

    /// Replace the fields of the record at `index` in place.
    pub fn update_at(
        &mut self,
        index: usize,
        title: impl Into<String>,
        director: impl Into<String>,
        year: i32,
    ) -> Result<(), StoreError> {
        let count = self.count;
        let movie = self
            .live_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })?;
        movie.update(title, director, year)
    }

    /// Rate the record at `index` from a single keystroke.
    ///
    /// An invalid keystroke is a retryable error; the caller re-prompts.
    pub fn rate_at(&mut self, index: usize, input: char) -> Result<(), StoreError> {
        let count = self.count;
        let movie = self
            .live_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, count })?;
        movie.rate(input)
    }

    /// Delete the record at `index`, subject to an external confirmation.
    ///
    /// Declined or unrecognized confirmations cancel with no mutation.
    /// A confirmed delete drops the record, shifts the following live
    /// slots left to close the gap, vacates the tail slot, and
    /// decrements `count`.
    pub fn delete_at(
        &mut self,
        index: usize,
        confirmation: Confirmation,
    ) -> Result<DeleteOutcome, StoreError> {
        if index >= self.count || self.slots[index].is_none() {
            return Err(StoreError::IndexOutOfRange {
                index,
                count: self.count,
            });
        }

        if confirmation != Confirmation::Yes {
            return Ok(DeleteOutcome::Cancelled);
        }

        self.slots[index] = None;
        for i in index..self.count - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.slots[self.count - 1] = None;
        self.count -= 1;

        tracing::debug!(index, count = self.count, "deleted record");
        Ok(DeleteOutcome::Deleted)
    }

    /// Find the first record whose title matches `title` exactly.
    pub fn find_by_title(&self, title: &str) -> Option<(usize, &Movie)> {
        self.iter().enumerate().find(|(_, m)| m.title() == title)
    }

    /// Sort the live records lexicographically by title. Stable.
    pub fn sort_by_title(&mut self) {
        self.slots[..self.count].sort_by(|a, b| match (a, b) {
            (Some(a), Some(b)) => a.title().cmp(b.title()),
            // Unreachable at rest: [0, count) holds no vacant slots.
            _ => std::cmp::Ordering::Equal,
        });
    }

    /// Iterate the live records in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Movie> {
        self.slots[..self.count].iter().filter_map(Option::as_ref)
    }

    /// Double the capacity, pre-filling the new slots as vacant.
    pub fn grow(&mut self) {
        let additional = self.slots.len().max(1);
        self.slots.resize_with(self.slots.len() + additional, || None);
        tracing::debug!(capacity = self.slots.len(), "grew slot array");
    }

    fn live_mut(&mut self, index: usize) -> Option<&mut Movie> {
        if index < self.count {
            self.slots[index].as_mut()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str) -> Movie {
        Movie::new(title, "Someone", 2000).unwrap()
    }

    fn store_with(titles: &[&str]) -> MovieStore {
        let mut store = MovieStore::default();
        for title in titles {
            store.insert(movie(title));
        }
        store
    }

    /// Every slot in [0, count) must be live after an operation.
    fn assert_compact(store: &MovieStore) {
        assert_eq!(store.iter().count(), store.len());
        for i in 0..store.len() {
            assert!(store.get(i).is_some(), "vacant slot at {i}");
        }
    }

    #[test]
    fn insert_appends_in_order() {
        let store = store_with(&["A", "B", "C"]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.get(0).unwrap().title(), "A");
        assert_eq!(store.get(2).unwrap().title(), "C");
        assert_compact(&store);
    }

    #[test]
    fn insert_grows_past_initial_capacity() {
        let mut store = MovieStore::default();
        for i in 0..INITIAL_CAPACITY {
            store.insert(movie(&format!("M{i}")));
        }
        assert_eq!(store.capacity(), INITIAL_CAPACITY);

        store.insert(movie("overflow"));
        assert_eq!(store.capacity(), INITIAL_CAPACITY * 2);
        assert_eq!(store.len(), INITIAL_CAPACITY + 1);
        assert_compact(&store);
    }

    #[test]
    fn grow_preserves_records_at_their_indices() {
        let mut store = MovieStore::with_capacity(10);
        for i in 0..10 {
            store.insert(movie(&format!("M{i}")));
        }
        let before: Vec<_> = store.iter().cloned().collect();

        store.grow();

        assert_eq!(store.capacity(), 20);
        assert_eq!(store.len(), 10);
        for (i, expected) in before.iter().enumerate() {
            assert_eq!(store.get(i), Some(expected));
        }
    }

    #[test]
    fn grow_handles_zero_capacity() {
        let mut store = MovieStore::with_capacity(0);
        let index = store.insert(movie("only"));
        assert_eq!(index, 0);
        assert_eq!(store.len(), 1);
        assert!(store.capacity() >= 1);
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut store = store_with(&["A", "B"]);

        let outcome = store.delete_at(0, Confirmation::No).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.len(), 2);

        let outcome = store.delete_at(0, Confirmation::Unrecognized).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cancelled);
        assert_eq!(store.len(), 2);

        let outcome = store.delete_at(0, Confirmation::Yes).unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().title(), "B");
        assert_compact(&store);
    }

    #[test]
    fn delete_compacts_by_shifting_left() {
        let mut store = store_with(&["A", "B", "C", "D"]);

        store.delete_at(1, Confirmation::Yes).unwrap();

        assert_eq!(store.len(), 3);
        let titles: Vec<_> = store.iter().map(Movie::title).collect();
        assert_eq!(titles, ["A", "C", "D"]);
        assert_compact(&store);
    }

    #[test]
    fn delete_rejects_out_of_range_index() {
        let mut store = store_with(&["A"]);
        assert!(matches!(
            store.delete_at(1, Confirmation::Yes),
            Err(StoreError::IndexOutOfRange { index: 1, count: 1 })
        ));
        assert!(matches!(
            store.delete_at(99, Confirmation::Yes),
            Err(StoreError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn delete_then_insert_reuses_the_freed_slot() {
        let mut store = store_with(&["A", "B", "C"]);

        store.delete_at(0, Confirmation::Yes).unwrap();
        // Compaction freed the tail slot; the next insert lands there.
        let index = store.insert(movie("D"));

        assert_eq!(index, 2);
        // A delete+insert pair leaves count unchanged.
        assert_eq!(store.len(), 3);
        assert_compact(&store);
    }

    #[test]
    fn compaction_holds_across_mixed_sequences() {
        let mut store = MovieStore::with_capacity(2);
        store.insert(movie("A"));
        store.insert(movie("B"));
        store.insert(movie("C"));
        store.delete_at(0, Confirmation::Yes).unwrap();
        assert_compact(&store);
        store.insert(movie("D"));
        store.delete_at(2, Confirmation::Yes).unwrap();
        assert_compact(&store);
        store.delete_at(0, Confirmation::Yes).unwrap();
        store.insert(movie("E"));
        store.insert(movie("F"));
        assert_compact(&store);

        let titles: Vec<_> = store.iter().map(Movie::title).collect();
        assert_eq!(titles, ["C", "E", "F"]);
    }

    #[test]
    fn update_at_replaces_fields_in_place() {
        let mut store = store_with(&["A"]);
        store.rate_at(0, '5').unwrap();

        store.update_at(0, "A2", "Else", 1999).unwrap();
        let m = store.get(0).unwrap();
        assert_eq!(m.title(), "A2");
        assert_eq!(m.director(), "Else");
        assert_eq!(m.year(), 1999);
        assert_eq!(m.rating(), 5.0);

        assert!(matches!(
            store.update_at(3, "X", "Y", 1999),
            Err(StoreError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn rate_at_is_retryable() {
        let mut store = store_with(&["A"]);
        assert!(matches!(
            store.rate_at(0, '8'),
            Err(StoreError::InvalidRating('8'))
        ));
        assert_eq!(store.get(0).unwrap().rating(), 0.0);
        store.rate_at(0, '3').unwrap();
        assert_eq!(store.get(0).unwrap().rating(), 3.0);
    }

    #[test]
    fn find_by_title_returns_first_exact_match() {
        let mut store = store_with(&["A", "B", "B"]);
        let (index, found) = store.find_by_title("B").unwrap();
        assert_eq!(index, 1);
        assert_eq!(found.title(), "B");
        assert!(store.find_by_title("b").is_none());
        assert!(store.find_by_title("missing").is_none());
        store.delete_at(1, Confirmation::Yes).unwrap();
        assert_eq!(store.find_by_title("B").unwrap().0, 1);
    }

    #[test]
    fn sort_by_title_orders_and_is_idempotent() {
        let mut store = store_with(&["Zeta", "Alpha", "Mike"]);
        store.sort_by_title();
        let titles: Vec<_> = store.iter().map(Movie::title).collect();
        assert_eq!(titles, ["Alpha", "Mike", "Zeta"]);

        store.sort_by_title();
        let titles: Vec<_> = store.iter().map(Movie::title).collect();
        assert_eq!(titles, ["Alpha", "Mike", "Zeta"]);
    }

    #[test]
    fn confirmation_from_char() {
        assert_eq!(Confirmation::from_char('y'), Confirmation::Yes);
        assert_eq!(Confirmation::from_char('Y'), Confirmation::Yes);
        assert_eq!(Confirmation::from_char('n'), Confirmation::No);
        assert_eq!(Confirmation::from_char('N'), Confirmation::No);
        assert_eq!(Confirmation::from_char('x'), Confirmation::Unrecognized);
        assert_eq!(Confirmation::from_char('\n'), Confirmation::Unrecognized);
    }
}
