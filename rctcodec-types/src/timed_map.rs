//! Insertion-ordered map keyed by timestamp

use std::collections::HashMap;

use chrono::NaiveDateTime;

/// Map from timestamp to value that iterates in insertion order
///
/// Re-inserting an existing timestamp replaces its value but keeps the
/// position of the first insertion.
#[derive(Debug, Clone)]
pub struct TimedMap<V> {
    entries: Vec<(NaiveDateTime, V)>,
    index: HashMap<NaiveDateTime, usize>,
}

impl<V> TimedMap<V> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a value, returning the one it replaced
    pub fn insert(&mut self, timestamp: NaiveDateTime, value: V) -> Option<V> {
        match self.index.get(&timestamp) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(timestamp, self.entries.len());
                self.entries.push((timestamp, value));
                None
            }
        }
    }

    pub fn get(&self, timestamp: &NaiveDateTime) -> Option<&V> {
        self.index.get(timestamp).map(|&pos| &self.entries[pos].1)
    }

    pub fn contains_key(&self, timestamp: &NaiveDateTime) -> bool {
        self.index.contains_key(timestamp)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDateTime, &V)> {
        self.entries.iter().map(|(ts, v)| (ts, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &NaiveDateTime> {
        self.entries.iter().map(|(ts, _)| ts)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<V> Default for TimedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq> PartialEq for TimedMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<V> FromIterator<(NaiveDateTime, V)> for TimedMap<V> {
    fn from_iter<I: IntoIterator<Item = (NaiveDateTime, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (timestamp, value) in iter {
            map.insert(timestamp, value);
        }
        map
    }
}

impl<V> IntoIterator for TimedMap<V> {
    type Item = (NaiveDateTime, V);
    type IntoIter = std::vec::IntoIter<(NaiveDateTime, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
