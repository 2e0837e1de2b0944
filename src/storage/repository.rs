use super::Collection;
use crate::core::{Record, Result};
use crate::transaction::ChangeSet;

/// Per-entity access with the same four write operations for every type.
///
/// Implementations must keep the contract of the in-memory store: updates
/// merge into existing records, deletes run cascade rules, and a write that
/// touches several collections becomes visible all at once or not at all.
/// Updates and deletes of absent ids are no-ops returning an empty
/// [`ChangeSet`].
pub trait Repository<T: Record> {
    /// Replaces the whole collection without running integrity checks
    fn set_all(&mut self, records: Vec<T>) -> ChangeSet;

    /// Appends a record; fails only when a hard reference does not resolve
    fn add(&mut self, record: T) -> Result<ChangeSet>;

    fn update(&mut self, id: &str, patch: T::Patch) -> ChangeSet;

    fn delete(&mut self, id: &str) -> ChangeSet;

    fn find(&self, id: &str) -> Option<&T>;

    fn all(&self) -> &Collection<T>;
}
