use crate::core::{Patch, Record};
use im::Vector;
use serde::{Deserialize, Serialize};

/// Ordered collection of records keyed by their string id.
///
/// Backed by a persistent vector, so cloning is O(1) and a clone taken
/// before a write keeps observing the old contents. Ids are not required to
/// be unique; updates and deletes act on every record carrying the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection<T: Clone> {
    rows: Vector<T>,
}

impl<T: Clone> Default for Collection<T> {
    fn default() -> Self {
        Self {
            rows: Vector::new(),
        }
    }
}

impl<T: Clone> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

impl<T: Record> Collection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    /// First record carrying `id`
    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.iter().find(|r| r.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|r| r.id()).collect()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.rows.iter().cloned().collect()
    }

    /// Appends without checking id uniqueness
    pub(crate) fn push(&mut self, record: T) {
        self.rows.push_back(record);
    }

    /// Replaces the whole collection, returning the previous length
    pub(crate) fn replace(&mut self, records: Vec<T>) -> usize {
        let previous = self.rows.len();
        self.rows = records.into_iter().collect();
        previous
    }

    /// Merges `patch` into every record with `id`; returns the number touched
    pub(crate) fn update(&mut self, id: &str, patch: &T::Patch) -> usize {
        let mut touched = 0;
        for record in self.rows.iter_mut() {
            if record.id() == id {
                patch.apply(record);
                touched += 1;
            }
        }
        touched
    }

    /// Removes every record matching `predicate`; returns the removed ids
    pub(crate) fn remove_where<F>(&mut self, predicate: F) -> Vec<String>
    where
        F: Fn(&T) -> bool,
    {
        let removed: Vec<String> = self
            .rows
            .iter()
            .filter(|r| predicate(r))
            .map(|r| r.id().to_string())
            .collect();

        if !removed.is_empty() {
            self.rows.retain(|r| !predicate(r));
        }
        removed
    }
}
