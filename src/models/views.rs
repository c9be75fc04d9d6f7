//! Derived views over the log, keyed by event kind.
//!
//! Both views iterate in the order in which each kind was first seen in the
//! file, so rendered output follows the log rather than the alphabet.

use super::event::TIMESTAMP_FORMAT;
use chrono::NaiveDateTime;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};
use std::collections::HashMap;

/// Insertion-ordered map from event kind to a value.
#[derive(Debug, Clone)]
pub struct KindTable<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for KindTable<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> KindTable<T> {
    pub fn get(&self, kind: &str) -> Option<&T> {
        self.index.get(kind).map(|&i| &self.entries[i].1)
    }

    pub fn get_mut(&mut self, kind: &str) -> Option<&mut T> {
        match self.index.get(kind) {
            Some(&i) => Some(&mut self.entries[i].1),
            None => None,
        }
    }

    pub fn contains_key(&self, kind: &str) -> bool {
        self.index.contains_key(kind)
    }

    /// Insert or replace; a replaced kind keeps its original position.
    pub fn insert(&mut self, kind: &str, value: T) {
        if let Some(&i) = self.index.get(kind) {
            self.entries[i].1 = value;
        } else {
            self.index.insert(kind.to_string(), self.entries.len());
            self.entries.push((kind.to_string(), value));
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for KindTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Latest record seen for one kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastOccurrence {
    pub timestamp: NaiveDateTime,
    pub data: String,
    pub logging_user: String,
}

impl LastOccurrence {
    pub fn timestamp_str(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// `(timestamp, data, logging_user)` in persisted form.
    pub fn as_tuple(&self) -> (String, String, String) {
        (
            self.timestamp_str(),
            self.data.clone(),
            self.logging_user.clone(),
        )
    }
}

impl Serialize for LastOccurrence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        map.serialize_entry("timestamp", &self.timestamp_str())?;
        map.serialize_entry("data", &self.data)?;
        map.serialize_entry("logging_user", &self.logging_user)?;
        map.end()
    }
}

pub type LastOccurrences = KindTable<LastOccurrence>;
pub type DailyCounts = KindTable<u32>;
