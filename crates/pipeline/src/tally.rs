//! Insertion-ordered per-genre accumulator.
//!
//! Rankings break ties by the order genres were first seen in the film list,
//! so accumulation keeps that order next to the HashMap lookup.

use std::collections::HashMap;

/// Per-genre accumulator that remembers first-appearance order
#[derive(Debug, Clone)]
pub struct GenreTally<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V: Default> GenreTally<V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Mutable access to a genre's value, inserting a default on first sight
    pub fn entry(&mut self, genre: String) -> &mut V {
        let idx = match self.index.get(&genre) {
            Some(&idx) => idx,
            None => {
                let idx = self.entries.len();
                self.index.insert(genre.clone(), idx);
                self.entries.push((genre, V::default()));
                idx
            }
        };
        &mut self.entries[idx].1
    }

    /// Number of distinct genres
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Consume into `(genre, value)` pairs in first-appearance order
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }
}

impl<V: Default> Default for GenreTally<V> {
    fn default() -> Self {
        Self::new()
    }
}
