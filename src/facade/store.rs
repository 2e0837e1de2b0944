use crate::config::AppConfig;
use crate::core::{
    Announcement, AnnouncementPatch, Contract, ContractPatch, FinancialRecord, MaintenanceRequest,
    MaintenanceRequestPatch, MaintenanceStatus, Property, PropertyPatch, Record, Result, Tenant,
    TenantPatch, Unit, UnitPatch,
};
use crate::integrity::{self, RuleTable};
use crate::storage::{Collection, Repository, StoreSeed, StoreState};
use crate::transaction::{ChangeSet, StoreTx};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// The property-management state container.
///
/// Owns every collection and exposes the only ways to change them. Each
/// write runs on a [`StoreTx`] and is published by replacing the whole state,
/// so a reader holding a [`snapshot`](Self::snapshot) never sees a partial
/// write. Construct one per session and pass it to whoever needs it.
pub struct PropertyStore {
    state: StoreState,
    rules: RuleTable,
}

impl PropertyStore {
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: StoreState::new(config.company_name.clone()),
            rules: RuleTable::with_default_rules(),
        }
    }

    /// Replaces the cascade rule table
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    pub fn from_seed(seed: StoreSeed, config: &AppConfig) -> Self {
        let mut store = Self::with_config(config);
        store.load_seed(seed);
        store
    }

    /// Current state, borrowed
    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Consistent copy of the current state; unaffected by later writes
    pub fn snapshot(&self) -> StoreState {
        self.state.clone()
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    // ========================================================================
    // Write plumbing
    // ========================================================================

    fn begin(&self) -> StoreTx {
        StoreTx::begin(&self.state)
    }

    fn commit(&mut self, tx: StoreTx, op: &'static str) -> ChangeSet {
        let (state, changes) = tx.into_parts();
        if changes.is_empty() {
            debug!(op, "no-op write");
        } else {
            self.state = state;
            debug!(op, changes = changes.len(), "committed");
        }
        changes
    }

    fn insert_record<T: Record>(&mut self, record: T) -> Result<ChangeSet> {
        let mut tx = self.begin();

        if let Err(err) = integrity::check_references(tx.state(), &record) {
            warn!(entity = %T::KIND, id = record.id(), error = %err, "insert rejected");
            return Err(err);
        }

        tx.insert(record.clone());
        record.after_insert(&mut tx);
        Ok(self.commit(tx, "insert"))
    }

    fn update_record<T: Record>(&mut self, id: &str, patch: &T::Patch) -> ChangeSet {
        let mut tx = self.begin();
        tx.update::<T>(id, patch);
        self.commit(tx, "update")
    }

    fn delete_record<T: Record>(&mut self, id: &str) -> ChangeSet {
        let mut tx = self.begin();
        let removed = tx.remove_where::<T, _>(|r| r.id() == id);
        let root_count = removed.len();
        self.rules.cascade(T::KIND, removed, &mut tx);

        let cascaded = tx.changes().len().saturating_sub(root_count);
        if cascaded > 0 {
            info!(entity = %T::KIND, id, cascaded, "cascading delete");
        }
        self.commit(tx, "delete")
    }

    fn set_records<T: Record>(&mut self, records: Vec<T>) -> ChangeSet {
        let mut tx = self.begin();
        tx.replace_all(records);
        self.commit(tx, "set_all")
    }

    /// Replaces every collection from a seed document in one write.
    ///
    /// Like the set-all operations, no reference checks are made.
    pub fn load_seed(&mut self, seed: StoreSeed) -> ChangeSet {
        let mut tx = self.begin();
        if let Some(name) = seed.company_name {
            tx.set_company_name(name);
        }
        tx.replace_all(seed.properties);
        tx.replace_all(seed.units);
        tx.replace_all(seed.tenants);
        tx.replace_all(seed.contracts);
        tx.replace_all(seed.maintenance_requests);
        tx.replace_all(seed.announcements);
        tx.replace_financials(seed.historical_financials);
        info!(rows = tx.state().row_count(), "seed loaded");
        self.commit(tx, "load_seed")
    }

    // ========================================================================
    // Settings and financial history
    // ========================================================================

    pub fn company_name(&self) -> &str {
        &self.state.company_name
    }

    pub fn set_company_name(&mut self, name: &str) -> ChangeSet {
        let mut tx = self.begin();
        tx.set_company_name(name.to_string());
        self.commit(tx, "set_company_name")
    }

    pub fn financials(&self) -> impl Iterator<Item = &FinancialRecord> {
        self.state.financials.iter()
    }

    pub fn set_financials(&mut self, records: Vec<FinancialRecord>) -> ChangeSet {
        let mut tx = self.begin();
        tx.replace_financials(records);
        self.commit(tx, "set_financials")
    }

    pub fn add_financial_record(&mut self, record: FinancialRecord) -> ChangeSet {
        let mut tx = self.begin();
        tx.push_financial(record);
        self.commit(tx, "add_financial_record")
    }

    // ========================================================================
    // Properties
    // ========================================================================

    pub fn properties(&self) -> &Collection<Property> {
        &self.state.properties
    }

    pub fn property(&self, id: &str) -> Option<&Property> {
        self.state.properties.get(id)
    }

    pub fn set_properties(&mut self, properties: Vec<Property>) -> ChangeSet {
        self.set_records(properties)
    }

    /// Appends; id uniqueness is the caller's responsibility
    pub fn add_property(&mut self, property: Property) -> ChangeSet {
        self.add_unchecked(property)
    }

    pub fn update_property(&mut self, id: &str, patch: PropertyPatch) -> ChangeSet {
        self.update_record::<Property>(id, &patch)
    }

    /// Removes the property, its units, and everything hanging off those units.
    ///
    /// Announcements and maintenance requests naming the property are kept.
    pub fn delete_property(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<Property>(id)
    }

    // ========================================================================
    // Units
    // ========================================================================

    pub fn units(&self) -> &Collection<Unit> {
        &self.state.units
    }

    pub fn unit(&self, id: &str) -> Option<&Unit> {
        self.state.units.get(id)
    }

    pub fn units_of_property<'a>(&'a self, property_id: &'a str) -> Vec<&'a Unit> {
        self.state.units_of_property(property_id).collect()
    }

    pub fn set_units(&mut self, units: Vec<Unit>) -> ChangeSet {
        self.set_records(units)
    }

    pub fn add_unit(&mut self, unit: Unit) -> ChangeSet {
        self.add_unchecked(unit)
    }

    pub fn update_unit(&mut self, id: &str, patch: UnitPatch) -> ChangeSet {
        self.update_record::<Unit>(id, &patch)
    }

    /// Removes the unit and every tenant and contract on it
    pub fn delete_unit(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<Unit>(id)
    }

    // ========================================================================
    // Tenants
    // ========================================================================

    pub fn tenants(&self) -> &Collection<Tenant> {
        &self.state.tenants
    }

    pub fn tenant(&self, id: &str) -> Option<&Tenant> {
        self.state.tenants.get(id)
    }

    pub fn tenants_of_unit<'a>(&'a self, unit_id: &'a str) -> Vec<&'a Tenant> {
        self.state.tenants_of_unit(unit_id).collect()
    }

    pub fn set_tenants(&mut self, tenants: Vec<Tenant>) -> ChangeSet {
        self.set_records(tenants)
    }

    pub fn add_tenant(&mut self, tenant: Tenant) -> ChangeSet {
        self.add_unchecked(tenant)
    }

    pub fn update_tenant(&mut self, id: &str, patch: TenantPatch) -> ChangeSet {
        self.update_record::<Tenant>(id, &patch)
    }

    /// Removes the tenant and their contracts
    pub fn delete_tenant(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<Tenant>(id)
    }

    // ========================================================================
    // Contracts
    // ========================================================================

    pub fn contracts(&self) -> &Collection<Contract> {
        &self.state.contracts
    }

    pub fn contract(&self, id: &str) -> Option<&Contract> {
        self.state.contracts.get(id)
    }

    pub fn contracts_of_tenant<'a>(&'a self, tenant_id: &'a str) -> Vec<&'a Contract> {
        self.state.contracts_of_tenant(tenant_id).collect()
    }

    pub fn set_contracts(&mut self, contracts: Vec<Contract>) -> ChangeSet {
        self.set_records(contracts)
    }

    /// Appends a contract after checking its property, unit and tenant exist.
    ///
    /// An `Active` contract also marks its unit `Occupied` in the same write.
    /// On a dangling reference nothing is modified.
    pub fn add_contract(&mut self, contract: Contract) -> Result<ChangeSet> {
        self.insert_record(contract)
    }

    pub fn update_contract(&mut self, id: &str, patch: ContractPatch) -> ChangeSet {
        self.update_record::<Contract>(id, &patch)
    }

    /// Removes the contract; the unit keeps whatever status it has
    pub fn delete_contract(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<Contract>(id)
    }

    // ========================================================================
    // Maintenance requests
    // ========================================================================

    pub fn maintenance_requests(&self) -> &Collection<MaintenanceRequest> {
        &self.state.maintenance_requests
    }

    pub fn maintenance_request(&self, id: &str) -> Option<&MaintenanceRequest> {
        self.state.maintenance_requests.get(id)
    }

    pub fn set_maintenance_requests(&mut self, requests: Vec<MaintenanceRequest>) -> ChangeSet {
        self.set_records(requests)
    }

    pub fn add_maintenance_request(&mut self, request: MaintenanceRequest) -> ChangeSet {
        self.add_unchecked(request)
    }

    pub fn update_maintenance_request(
        &mut self,
        id: &str,
        patch: MaintenanceRequestPatch,
    ) -> ChangeSet {
        self.update_record::<MaintenanceRequest>(id, &patch)
    }

    /// Moves a request to `status` and stamps `date_updated`
    pub fn update_maintenance_status(
        &mut self,
        id: &str,
        status: MaintenanceStatus,
        today: NaiveDate,
    ) -> ChangeSet {
        let patch = MaintenanceRequestPatch {
            status: Some(status),
            date_updated: Some(today),
            ..Default::default()
        };
        self.update_record::<MaintenanceRequest>(id, &patch)
    }

    pub fn delete_maintenance_request(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<MaintenanceRequest>(id)
    }

    // ========================================================================
    // Announcements
    // ========================================================================

    pub fn announcements(&self) -> &Collection<Announcement> {
        &self.state.announcements
    }

    pub fn announcement(&self, id: &str) -> Option<&Announcement> {
        self.state.announcements.get(id)
    }

    pub fn set_announcements(&mut self, announcements: Vec<Announcement>) -> ChangeSet {
        self.set_records(announcements)
    }

    pub fn add_announcement(&mut self, announcement: Announcement) -> ChangeSet {
        self.add_unchecked(announcement)
    }

    pub fn update_announcement(&mut self, id: &str, patch: AnnouncementPatch) -> ChangeSet {
        self.update_record::<Announcement>(id, &patch)
    }

    pub fn delete_announcement(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<Announcement>(id)
    }

    /// Insert for record types that declare no hard references
    fn add_unchecked<T: Record>(&mut self, record: T) -> ChangeSet {
        debug_assert!(record.references().is_empty());
        let mut tx = self.begin();
        tx.insert(record.clone());
        record.after_insert(&mut tx);
        self.commit(tx, "insert")
    }
}

impl Default for PropertyStore {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> Repository<T> for PropertyStore {
    fn set_all(&mut self, records: Vec<T>) -> ChangeSet {
        self.set_records(records)
    }

    fn add(&mut self, record: T) -> Result<ChangeSet> {
        self.insert_record(record)
    }

    fn update(&mut self, id: &str, patch: T::Patch) -> ChangeSet {
        self.update_record::<T>(id, &patch)
    }

    fn delete(&mut self, id: &str) -> ChangeSet {
        self.delete_record::<T>(id)
    }

    fn find(&self, id: &str) -> Option<&T> {
        self.state.get::<T>(id)
    }

    fn all(&self) -> &Collection<T> {
        T::collection(&self.state)
    }
}
