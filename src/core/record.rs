use super::patch::*;
use super::types::*;
use crate::storage::{Collection, StoreState};
use crate::transaction::StoreTx;

/// A hard foreign-key style reference that must resolve on insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub target: EntityKind,
    pub id: String,
}

impl Reference {
    pub fn new(target: EntityKind, id: impl Into<String>) -> Self {
        Self {
            target,
            id: id.into(),
        }
    }
}

/// An entity stored in one of the store's keyed collections.
///
/// Ties the record type to its collection inside [`StoreState`], its patch
/// type, and the insert-time integrity hooks.
pub trait Record: Clone + std::fmt::Debug + 'static {
    type Patch: Patch<Self>;

    const KIND: EntityKind;

    fn id(&self) -> &str;

    fn collection(state: &StoreState) -> &Collection<Self>;

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self>;

    /// References that must exist before this record may be inserted
    fn references(&self) -> Vec<Reference> {
        Vec::new()
    }

    /// Side effects applied in the same transaction as the insert
    fn after_insert(&self, _tx: &mut StoreTx) {}
}

impl Record for Property {
    type Patch = PropertyPatch;
    const KIND: EntityKind = EntityKind::Property;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.properties
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.properties
    }
}

impl Record for Unit {
    type Patch = UnitPatch;
    const KIND: EntityKind = EntityKind::Unit;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.units
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.units
    }
}

impl Record for Tenant {
    type Patch = TenantPatch;
    const KIND: EntityKind = EntityKind::Tenant;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.tenants
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.tenants
    }
}

impl Record for Contract {
    type Patch = ContractPatch;
    const KIND: EntityKind = EntityKind::Contract;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.contracts
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.contracts
    }

    fn references(&self) -> Vec<Reference> {
        vec![
            Reference::new(EntityKind::Property, &self.property_id),
            Reference::new(EntityKind::Unit, &self.unit_id),
            Reference::new(EntityKind::Tenant, &self.tenant_id),
        ]
    }

    /// An active lease occupies its unit
    fn after_insert(&self, tx: &mut StoreTx) {
        if self.status == ContractStatus::Active {
            tx.update::<Unit>(&self.unit_id, &UnitPatch::status(UnitStatus::Occupied));
        }
    }
}

impl Record for MaintenanceRequest {
    type Patch = MaintenanceRequestPatch;
    const KIND: EntityKind = EntityKind::MaintenanceRequest;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.maintenance_requests
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.maintenance_requests
    }
}

impl Record for Announcement {
    type Patch = AnnouncementPatch;
    const KIND: EntityKind = EntityKind::Announcement;

    fn id(&self) -> &str {
        &self.id
    }

    fn collection(state: &StoreState) -> &Collection<Self> {
        &state.announcements
    }

    fn collection_mut(state: &mut StoreState) -> &mut Collection<Self> {
        &mut state.announcements
    }
}
