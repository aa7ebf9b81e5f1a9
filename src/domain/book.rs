//! Address book: insertion-ordered contacts keyed by name

use std::collections::HashMap;

use super::record::Record;

/// All contacts of one session
///
/// Iteration follows first-insertion order. Overwriting an existing name
/// replaces its record in place.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    entries: Vec<(String, Record)>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the record stored under `name`
    pub fn add_record(&mut self, name: impl Into<String>, record: Record) {
        let name = name.into();
        match self.index.get(&name) {
            Some(&slot) => self.entries[slot].1 = record,
            None => {
                self.index.insert(name.clone(), self.entries.len());
                self.entries.push((name, record));
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.index.get(name).map(|&slot| &self.entries[slot].1)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        let slot = *self.index.get(name)?;
        Some(&mut self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates records in insertion order
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.entries.iter().map(|(_, record)| record)
    }
}
