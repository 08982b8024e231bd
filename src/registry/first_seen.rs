//! First-writer-wins string-keyed table.

use std::collections::hash_map::{Entry, HashMap};

/// Maps a key to the value recorded by its first claimant
#[derive(Debug)]
pub struct FirstSeen<V> {
    entries: HashMap<String, V>,
}

impl<V> FirstSeen<V> {
    pub fn new() -> Self {
        FirstSeen {
            entries: HashMap::new(),
        }
    }

    /// Record `value` for `key` unless the key is already taken.
    ///
    /// Returns the stored value when the key was claimed before; the stored
    /// value is left untouched.
    pub fn claim(&mut self, key: &str, value: V) -> Result<(), &V> {
        match self.entries.entry(key.to_string()) {
            Entry::Occupied(existing) => Err(&*existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(value);
                Ok(())
            }
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<V> Default for FirstSeen<V> {
    fn default() -> Self {
        Self::new()
    }
}
