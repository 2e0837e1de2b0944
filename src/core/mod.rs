pub mod error;
pub mod patch;
pub mod record;
pub mod types;

pub use error::{Result, StoreError};
pub use patch::{
    AnnouncementPatch, ContractPatch, MaintenanceRequestPatch, Patch, PropertyPatch, TenantPatch,
    UnitPatch,
};
pub use record::{Record, Reference};
pub use types::{
    Announcement, Contract, ContractStatus, EntityKind, FinancialRecord, MaintenanceRequest,
    MaintenanceStatus, Priority, Property, PropertyType, Tenant, Unit, UnitStatus, new_id,
};
