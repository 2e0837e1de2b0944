use crate::core::{
    Announcement, Contract, EntityKind, MaintenanceRequest, Property, Record, Reference, Result,
    StoreError, Tenant, Unit,
};
use crate::storage::StoreState;

/// True when `id` resolves in the collection for `kind`
pub fn exists(state: &StoreState, kind: EntityKind, id: &str) -> bool {
    match kind {
        EntityKind::Property => state.get::<Property>(id).is_some(),
        EntityKind::Unit => state.get::<Unit>(id).is_some(),
        EntityKind::Tenant => state.get::<Tenant>(id).is_some(),
        EntityKind::Contract => state.get::<Contract>(id).is_some(),
        EntityKind::MaintenanceRequest => state.get::<MaintenanceRequest>(id).is_some(),
        EntityKind::Announcement => state.get::<Announcement>(id).is_some(),
        EntityKind::FinancialRecord => false,
    }
}

/// Fails on the first hard reference of `record` that does not resolve
pub fn check_references<T: Record>(state: &StoreState, record: &T) -> Result<()> {
    for Reference { target, id } in record.references() {
        if !exists(state, target, &id) {
            return Err(StoreError::DanglingReference {
                entity: T::KIND,
                target,
                id,
            });
        }
    }
    Ok(())
}

/// Soft references left pointing at records that no longer exist.
///
/// Maintenance requests and announcements are never cleaned up by cascades;
/// this lists what they still point at so callers can display or repair it.
pub fn dangling_soft_references(state: &StoreState) -> Vec<(EntityKind, String, Reference)> {
    let mut dangling = Vec::new();

    for request in state.maintenance_requests.iter() {
        let mut refs = vec![Reference::new(EntityKind::Property, &request.property_id)];
        if let Some(unit_id) = &request.unit_id {
            refs.push(Reference::new(EntityKind::Unit, unit_id));
        }
        if let Some(tenant_id) = &request.tenant_id {
            refs.push(Reference::new(EntityKind::Tenant, tenant_id));
        }
        for r in refs {
            if !exists(state, r.target, &r.id) {
                dangling.push((EntityKind::MaintenanceRequest, request.id.clone(), r));
            }
        }
    }

    for announcement in state.announcements.iter() {
        for property_id in &announcement.properties {
            if !exists(state, EntityKind::Property, property_id) {
                dangling.push((
                    EntityKind::Announcement,
                    announcement.id.clone(),
                    Reference::new(EntityKind::Property, property_id),
                ));
            }
        }
    }

    dangling
}
