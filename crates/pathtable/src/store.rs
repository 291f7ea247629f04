use core::{ops::Index, slice};

use crate::{growth::reserve_total, record::FilenameRecord};

/// Capacity of a record store after its first append.
pub const INITIAL_RECORD_CAPACITY: usize = 512;

/// Append-only, index-addressable collection of records.
///
/// Capacity grows geometrically: it becomes [`INITIAL_RECORD_CAPACITY`] on the
/// first append and doubles each time the store is full. This curve is
/// independent of the stream buffer's headroom-driven growth.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<FilenameRecord>,
    capacity: usize,
}

impl RecordStore {
    /// An empty store with no allocation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, doubling capacity when the store is full.
    ///
    /// # Aborts
    ///
    /// Aborts the process if the store cannot be grown.
    pub fn append(&mut self, record: FilenameRecord) {
        if self.records.len() == self.capacity {
            let capacity = (self.capacity * 2).max(INITIAL_RECORD_CAPACITY);
            reserve_total(&mut self.records, capacity);
            self.capacity = capacity;
        }
        self.records.push(record);
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records the store can hold before growing again.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The record at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FilenameRecord> {
        self.records.get(index)
    }

    /// Iterate over records in store order.
    pub fn iter(&self) -> slice::Iter<'_, FilenameRecord> {
        self.records.iter()
    }

    /// The records as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[FilenameRecord] {
        &self.records
    }

    /// Records may be reordered but never added or removed through this view.
    pub(crate) fn as_mut_slice(&mut self) -> &mut [FilenameRecord] {
        &mut self.records
    }
}

impl Index<usize> for RecordStore {
    type Output = FilenameRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a RecordStore {
    type Item = &'a FilenameRecord;
    type IntoIter = slice::Iter<'a, FilenameRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<FilenameRecord> for RecordStore {
    fn extend<I: IntoIterator<Item = FilenameRecord>>(&mut self, iter: I) {
        for record in iter {
            self.append(record);
        }
    }
}

impl FromIterator<FilenameRecord> for RecordStore {
    fn from_iter<I: IntoIterator<Item = FilenameRecord>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
