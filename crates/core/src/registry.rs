// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::hash::Hash;
use std::sync::Arc;

/// Concurrent identifier to entity map.
///
/// Entities are stored behind `Arc` so callers can keep using an entity
/// after the shard lock is released. Lookups never block on an entity's own
/// lock.
#[derive(Debug)]
pub struct Registry<K, V>
where
    K: Eq + Hash,
{
    entries: DashMap<K, Arc<V>>,
}

impl<K, V> Default for Registry<K, V>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl<K, V> Registry<K, V>
where
    K: Eq + Hash + Clone + Ord,
{
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under a freshly issued `key`.
    pub fn insert(&self, key: K, value: V) {
        self.entries.insert(key, Arc::new(value));
    }

    /// Inserts `value` unless `key` is taken. Returns the stored entry, or
    /// `None` if the key already existed (the registry is unchanged).
    #[must_use]
    pub fn insert_new(&self, key: K, value: V) -> Option<Arc<V>> {
        match self.entries.entry(key) {
            Entry::Occupied(_) => None,
            Entry::Vacant(slot) => {
                let value: Arc<V> = Arc::new(value);
                slot.insert(Arc::clone(&value));
                Some(value)
            }
        }
    }

    #[must_use]
    pub fn get(&self, key: &K) -> Option<Arc<V>> {
        self.entries.get(key).map(|entry| Arc::clone(entry.value()))
    }

    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries matching `predicate`, ordered by key.
    ///
    /// The predicate runs on a snapshot taken after every shard guard is
    /// released, so it may lock the entity.
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Vec<Arc<V>>
    where
        F: Fn(&V) -> bool,
    {
        self.values()
            .into_iter()
            .filter(|value| predicate(value))
            .collect()
    }

    /// All entries, ordered by key.
    #[must_use]
    pub fn values(&self) -> Vec<Arc<V>> {
        let mut entries: Vec<(K, Arc<V>)> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries.into_iter().map(|(_, value)| value).collect()
    }
}
