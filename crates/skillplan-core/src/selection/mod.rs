//! Build selection state and the pure aggregations over it.
//!
//! `Selection` is the set of chosen skill ids. Only `SelectionEngine` can
//! change one in place; everything else reads snapshots.

pub mod aggregate;
pub mod engine;

use std::collections::BTreeSet;

use serde::Serialize;

pub use engine::{SelectionEngine, Toggled};

/// The set of currently chosen skill ids, kept in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    pub(crate) fn insert(&mut self, id: String) -> bool {
        self.ids.insert(id)
    }

    pub(crate) fn remove(&mut self, id: &str) -> bool {
        self.ids.remove(id)
    }

    pub(crate) fn clear(&mut self) {
        self.ids.clear();
    }
}

/// Snapshot construction for aggregation and export. A selection built this
/// way is not checked for closure; feed ids through `SelectionEngine` for that.
impl FromIterator<String> for Selection {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        iter.into_iter().map(String::from).collect()
    }
}
