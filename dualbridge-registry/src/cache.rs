use std::collections::BTreeMap;
use std::ops::Bound;

use cosmwasm_std::{Order, Record, Storage};

/// Write-back overlay over a parent store.
///
/// Reads fall through to the parent unless the key was written or removed in
/// this overlay. Nothing reaches the parent until [`CacheStorage::commit`];
/// dropping the overlay discards every buffered change.
pub struct CacheStorage<'a> {
    parent: &'a mut dyn Storage,
    /// `None` marks a removed key
    writes: BTreeMap<Vec<u8>, Option<Vec<u8>>>,
}

impl<'a> CacheStorage<'a> {
    pub fn new(parent: &'a mut dyn Storage) -> Self {
        CacheStorage {
            parent,
            writes: BTreeMap::new(),
        }
    }

    /// Flush every buffered change to the parent store.
    pub fn commit(self) {
        for (key, value) in self.writes {
            match value {
                Some(value) => self.parent.set(&key, &value),
                None => self.parent.remove(&key),
            }
        }
    }
}

impl Storage for CacheStorage<'_> {
    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        match self.writes.get(key) {
            Some(buffered) => buffered.clone(),
            None => self.parent.get(key),
        }
    }

    fn range<'b>(
        &'b self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        order: Order,
    ) -> Box<dyn Iterator<Item = Record> + 'b> {
        if let (Some(start), Some(end)) = (start, end) {
            if start >= end {
                return Box::new(std::iter::empty());
            }
        }

        let mut merged: BTreeMap<Vec<u8>, Vec<u8>> =
            self.parent.range(start, end, Order::Ascending).collect();

        let lower = start.map_or(Bound::Unbounded, |s| Bound::Included(s.to_vec()));
        let upper = end.map_or(Bound::Unbounded, |e| Bound::Excluded(e.to_vec()));
        for (key, value) in self.writes.range((lower, upper)) {
            match value {
                Some(value) => {
                    merged.insert(key.clone(), value.clone());
                }
                None => {
                    merged.remove(key);
                }
            }
        }

        match order {
            Order::Ascending => Box::new(merged.into_iter()),
            Order::Descending => Box::new(merged.into_iter().rev()),
        }
    }

    fn set(&mut self, key: &[u8], value: &[u8]) {
        self.writes.insert(key.to_vec(), Some(value.to_vec()));
    }

    fn remove(&mut self, key: &[u8]) {
        self.writes.insert(key.to_vec(), None);
    }
}
