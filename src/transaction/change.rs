// ============================================================================
// Change Tracking
// ============================================================================
//
// Every write records what it did to which collection. The resulting
// ChangeSet is returned to the caller once the transaction commits.
//
// ============================================================================

use crate::core::EntityKind;
use serde::Serialize;

/// A single effect of a committed write
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Change {
    Inserted { entity: EntityKind, id: String },
    Updated { entity: EntityKind, id: String },
    Removed { entity: EntityKind, id: String },
    /// Whole collection replaced by a set-all operation
    Replaced { entity: EntityKind, count: usize },
    SettingChanged { key: &'static str },
}

impl Change {
    pub fn entity(&self) -> Option<EntityKind> {
        match self {
            Change::Inserted { entity, .. }
            | Change::Updated { entity, .. }
            | Change::Removed { entity, .. }
            | Change::Replaced { entity, .. } => Some(*entity),
            Change::SettingChanged { .. } => None,
        }
    }
}

/// Ordered log of the changes made by one write
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Change> {
        self.changes.iter()
    }

    pub fn inserted(&self, entity: EntityKind) -> Vec<&str> {
        self.ids_where(entity, |c| matches!(c, Change::Inserted { .. }))
    }

    pub fn updated(&self, entity: EntityKind) -> Vec<&str> {
        self.ids_where(entity, |c| matches!(c, Change::Updated { .. }))
    }

    pub fn removed(&self, entity: EntityKind) -> Vec<&str> {
        self.ids_where(entity, |c| matches!(c, Change::Removed { .. }))
    }

    /// Collections touched by this change set, in first-touch order
    pub fn touched(&self) -> Vec<EntityKind> {
        let mut kinds = Vec::new();
        for kind in self.changes.iter().filter_map(Change::entity) {
            if !kinds.contains(&kind) {
                kinds.push(kind);
            }
        }
        kinds
    }

    fn ids_where<F>(&self, entity: EntityKind, predicate: F) -> Vec<&str>
    where
        F: Fn(&Change) -> bool,
    {
        self.changes
            .iter()
            .filter(|c| predicate(c))
            .filter_map(|c| match c {
                Change::Inserted { entity: e, id }
                | Change::Updated { entity: e, id }
                | Change::Removed { entity: e, id }
                    if *e == entity =>
                {
                    Some(id.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a ChangeSet {
    type Item = &'a Change;
    type IntoIter = std::slice::Iter<'a, Change>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}
