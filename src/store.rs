use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::hash::Hash;

use crate::types::SequenceNumber;

/// Key-to-record table with point lookup and upsert only.
///
/// This is the persistence seam of the ledger: the core never iterates,
/// queries, or deletes, so the surface stays narrow enough to back with
/// any key-value engine. Records only accumulate.
#[derive(Debug, Clone)]
pub struct Table<K, V> {
    records: HashMap<K, V>,
}

impl<K: Eq + Hash, V> Table<K, V> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.records.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.records.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.records.get_mut(key)
    }

    pub fn upsert(&mut self, key: K, value: V) {
        self.records.insert(key, value);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for Table<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Strictly increasing, gap-free sequence.
///
/// Advanced exactly once per successful repayment and never on a failed
/// call; under serialized execution assigned values are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SequenceCounter(SequenceNumber);

impl SequenceCounter {
    pub fn new() -> Self {
        SequenceCounter(0)
    }

    /// assign the next value; the first call yields 1
    pub fn next_value(&mut self) -> SequenceNumber {
        self.0 += 1;
        self.0
    }

    /// most recently assigned value, 0 if none yet
    pub fn current(&self) -> SequenceNumber {
        self.0
    }
}
