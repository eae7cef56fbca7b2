// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Key-value storage behind the sparse containers.
pub trait Dictionary<K, V>: Default {
    fn get(&self, key: &K) -> Option<&V>;

    /// Add or update, returning the previous value if there was one.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    fn remove(&mut self, key: &K) -> Option<V>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a>;

    fn values_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = &'a mut V> + 'a>;
}

impl<K: Hash + Eq, V> Dictionary<K, V> for HashMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        HashMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        HashMap::remove(self, key)
    }

    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(self.iter())
    }

    fn values_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = &'a mut V> + 'a> {
        Box::new(HashMap::values_mut(self))
    }
}

impl<K: Ord, V> Dictionary<K, V> for BTreeMap<K, V> {
    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        BTreeMap::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        BTreeMap::remove(self, key)
    }

    fn len(&self) -> usize {
        BTreeMap::len(self)
    }

    fn entries<'a>(&'a self) -> Box<dyn Iterator<Item = (&'a K, &'a V)> + 'a> {
        Box::new(self.iter())
    }

    fn values_mut<'a>(&'a mut self) -> Box<dyn Iterator<Item = &'a mut V> + 'a> {
        Box::new(BTreeMap::values_mut(self))
    }
}

/// Storage choice for a benchmark run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    Hash,
    BTree,
}

impl Backend {
    pub const ALL: [Backend; 2] = [Backend::Hash, Backend::BTree];

    /// Suffix used in result file names.
    pub fn suffix(self) -> &'static str {
        match self {
            Backend::Hash => "hash",
            Backend::BTree => "b",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Backend::Hash => write!(f, "HashTable"),
            Backend::BTree => write!(f, "BTree"),
        }
    }
}
