// Copyright 2025 the Overstory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unordered selection keyed by identity hash, with one active entry.

use hashbrown::HashMap;

/// An unordered set of selected items keyed by a `u64` identity hash.
///
/// At most one entry is additionally marked *active* (the most recently
/// added). The set lives until a deselect interaction clears it; it never
/// expires on its own.
#[derive(Clone, Debug)]
pub struct SelectionSet<T> {
    entries: HashMap<u64, T>,
    active: Option<u64>,
}

impl<T> Default for SelectionSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SelectionSet<T> {
    /// Empty set.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            active: None,
        }
    }

    /// Number of selected items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `key` is in the set.
    pub fn contains(&self, key: u64) -> bool {
        self.entries.contains_key(&key)
    }

    /// Key of the active entry, if any.
    pub fn active_key(&self) -> Option<u64> {
        self.active
    }

    /// The active entry's item, if any.
    pub fn active(&self) -> Option<&T> {
        self.active.and_then(|key| self.entries.get(&key))
    }

    /// Iterates the selected items in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &T)> {
        self.entries.iter().map(|(key, item)| (*key, item))
    }

    /// Replaces the whole selection with a single item and marks it active.
    pub fn select_only(&mut self, key: u64, item: T) {
        self.entries.clear();
        self.entries.insert(key, item);
        self.active = Some(key);
    }

    /// Adds `key` without touching existing entries and marks it active.
    pub fn insert(&mut self, key: u64, item: T) {
        self.entries.insert(key, item);
        self.active = Some(key);
    }

    /// Toggles `key` in or out of the set. Returns `true` when the item was
    /// added. An added item becomes active; when the active item is toggled
    /// out, an arbitrary remaining entry takes over as active.
    pub fn toggle(&mut self, key: u64, item: T) -> bool {
        if self.entries.remove(&key).is_some() {
            if self.active == Some(key) {
                self.active = self.entries.keys().next().copied();
            }
            false
        } else {
            self.entries.insert(key, item);
            self.active = Some(key);
            true
        }
    }

    /// Removes everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.active = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_only_replaces_and_activates() {
        let mut set: SelectionSet<&str> = SelectionSet::new();
        set.select_only(1, "a");
        set.select_only(2, "b");
        assert_eq!(set.len(), 1);
        assert!(set.contains(2));
        assert_eq!(set.active_key(), Some(2));
        assert_eq!(set.active(), Some(&"b"));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut set: SelectionSet<&str> = SelectionSet::new();
        assert!(set.toggle(1, "a"));
        assert!(set.toggle(2, "b"));
        assert_eq!(set.active_key(), Some(2));

        assert!(!set.toggle(2, "b"));
        assert_eq!(set.len(), 1);
        // Active fell back to the remaining entry.
        assert_eq!(set.active_key(), Some(1));
    }

    #[test]
    fn removing_inactive_entry_keeps_active() {
        let mut set: SelectionSet<&str> = SelectionSet::new();
        set.toggle(1, "a");
        set.toggle(2, "b");
        set.toggle(1, "a");
        assert_eq!(set.active_key(), Some(2));
    }

    #[test]
    fn clear_drops_active() {
        let mut set: SelectionSet<&str> = SelectionSet::new();
        set.select_only(7, "x");
        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.active_key(), None);
        assert_eq!(set.active(), None);
    }
}
