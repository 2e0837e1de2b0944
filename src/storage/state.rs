use super::Collection;
use crate::core::{
    Announcement, Contract, FinancialRecord, MaintenanceRequest, Property, Record, Tenant, Unit,
};
use im::Vector;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COMPANY_NAME: &str = "Proper.Ly";

/// Everything the store owns, as one immutable-by-convention value.
///
/// Cloning shares structure with the original, so a snapshot handed to a
/// reader costs nothing and never observes a later write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreState {
    pub properties: Collection<Property>,
    pub units: Collection<Unit>,
    pub tenants: Collection<Tenant>,
    pub contracts: Collection<Contract>,
    pub maintenance_requests: Collection<MaintenanceRequest>,
    pub announcements: Collection<Announcement>,
    pub financials: Vector<FinancialRecord>,
    pub company_name: String,
}

impl StoreState {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            properties: Collection::new(),
            units: Collection::new(),
            tenants: Collection::new(),
            contracts: Collection::new(),
            maintenance_requests: Collection::new(),
            announcements: Collection::new(),
            financials: Vector::new(),
            company_name: company_name.into(),
        }
    }

    pub fn get<T: Record>(&self, id: &str) -> Option<&T> {
        T::collection(self).get(id)
    }

    pub fn units_of_property<'a>(&'a self, property_id: &'a str) -> impl Iterator<Item = &'a Unit> {
        self.units.iter().filter(move |u| u.property_id == property_id)
    }

    pub fn tenants_of_unit<'a>(&'a self, unit_id: &'a str) -> impl Iterator<Item = &'a Tenant> {
        self.tenants.iter().filter(move |t| t.unit_id == unit_id)
    }

    pub fn contracts_of_tenant<'a>(
        &'a self,
        tenant_id: &'a str,
    ) -> impl Iterator<Item = &'a Contract> {
        self.contracts.iter().filter(move |c| c.tenant_id == tenant_id)
    }

    /// Total number of entity rows, financial history included
    pub fn row_count(&self) -> usize {
        self.properties.len()
            + self.units.len()
            + self.tenants.len()
            + self.contracts.len()
            + self.maintenance_requests.len()
            + self.announcements.len()
            + self.financials.len()
    }
}

impl Default for StoreState {
    fn default() -> Self {
        Self::new(DEFAULT_COMPANY_NAME)
    }
}
