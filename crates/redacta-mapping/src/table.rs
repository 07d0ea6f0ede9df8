use std::collections::BTreeMap;

use redacta_core::models::mapping::{MappingEntry, MappingKey};

use crate::restore;

/// Session-scoped original ↔ placeholder pairs.
///
/// At most one entry per key. Iteration follows key order, so every
/// snapshot of the same table is identical.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: BTreeMap<MappingKey, MappingEntry>,
}

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `entry` under `key`. The first entry for a key wins; returns
    /// `false` if the key was already taken.
    pub fn insert(&mut self, key: MappingKey, entry: MappingEntry) -> bool {
        match self.entries.entry(key) {
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(entry);
                true
            }
            std::collections::btree_map::Entry::Occupied(_) => false,
        }
    }

    pub fn get(&self, key: &MappingKey) -> Option<&MappingEntry> {
        self.entries.get(key)
    }

    pub fn remove(&mut self, key: &MappingKey) -> Option<MappingEntry> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MappingKey, &MappingEntry)> {
        self.entries.iter()
    }

    /// Snapshot of every entry, in key order.
    pub fn entries(&self) -> Vec<MappingEntry> {
        self.entries.values().cloned().collect()
    }

    /// All keyed entries belonging to `category`.
    pub fn entries_for(&self, category: &str) -> Vec<(MappingKey, MappingEntry)> {
        self.entries
            .iter()
            .filter(|(key, _)| key.category() == category)
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect()
    }

    /// Replace every placeholder in `text` with its original value.
    pub fn restore(&self, text: &str) -> String {
        restore::restore(text, self.entries.values())
    }
}
