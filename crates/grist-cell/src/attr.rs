//! Insertion-ordered attribute storage, attached lazily to cells.

use grist_core::Symbol;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
struct AttrEntry {
    key: Symbol,
    value: String,
}

/// Ordered unique-key attribute map.
///
/// Lookups are linear scans with O(1) key compares. Per-cell attribute
/// counts are expected to stay small, so the first two entries live
/// inline.
#[derive(Clone, Debug, Default)]
pub(crate) struct AttrMap {
    entries: SmallVec<[AttrEntry; 2]>,
}

impl AttrMap {
    pub(crate) fn get(&self, key: Symbol) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| entry.value.as_str())
    }

    /// Replace in place if `key` exists, append otherwise.
    pub(crate) fn set(&mut self, key: Symbol, value: &str) {
        for entry in &mut self.entries {
            if entry.key == key {
                entry.value = value.to_string();
                return;
            }
        }
        self.entries.push(AttrEntry {
            key,
            value: value.to_string(),
        });
    }

    /// Remove `key`, compacting storage. Absent keys are a no-op.
    pub(crate) fn remove(&mut self, key: Symbol) {
        self.entries.retain(|entry| entry.key != key);
    }

    /// The key at position `idx` in insertion order.
    pub(crate) fn nth_key(&self, idx: usize) -> Option<Symbol> {
        self.entries.get(idx).map(|entry| entry.key)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
