use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the collections held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntityKind {
    Property,
    Unit,
    Tenant,
    Contract,
    MaintenanceRequest,
    Announcement,
    FinancialRecord,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Property => "property",
            EntityKind::Unit => "unit",
            EntityKind::Tenant => "tenant",
            EntityKind::Contract => "contract",
            EntityKind::MaintenanceRequest => "maintenance request",
            EntityKind::Announcement => "announcement",
            EntityKind::FinancialRecord => "financial record",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Enumerations
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyType {
    Building,
    House,
    Apartment,
    Office,
}

/// Occupancy state of a unit.
///
/// Transitions are caller-driven through unit updates, except for the
/// automatic move to `Occupied` when an active contract is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitStatus {
    Occupied,
    Vacant,
    Maintenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContractStatus {
    Active,
    Pending,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaintenanceStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

// ============================================================================
// Entities
// ============================================================================

/// Root of the ownership hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub name: String,
    pub address: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Declared unit count; not kept in sync with the unit collection
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub units: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub property_id: String,
    pub unit_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bathrooms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub square_feet: Option<u32>,
    pub status: UnitStatus,
    pub rent_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub unit_id: String,
    pub property_id: String,
    pub lease_start: NaiveDate,
    pub lease_end: NaiveDate,
}

/// Lease agreement. Its lifecycle is independent of the tenant and unit
/// records it points at, apart from the cascades run on their deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: String,
    pub tenant_id: String,
    pub property_id: String,
    pub unit_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rent_amount: f64,
    pub status: ContractStatus,
}

/// Maintenance ticket. Its property/unit/tenant ids are soft references
/// and survive deletion of the records they name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceRequest {
    pub id: String,
    pub property_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub title: String,
    pub description: String,
    pub status: MaintenanceStatus,
    pub priority: Priority,
    pub date_created: NaiveDate,
    pub date_updated: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    pub id: String,
    pub title: String,
    pub content: String,
    pub date_posted: NaiveDate,
    /// Property ids the announcement applies to (soft references)
    #[serde(default)]
    pub properties: Vec<String>,
}

/// One month of rent/expense history, used by the dashboard trend and reports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub month: String,
    pub year: i32,
    pub rent_collected: f64,
    pub expenses: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
}

/// Generates a caller-side identifier of the form `prefix-<uuid>`
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, uuid::Uuid::new_v4())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_uses_type_key() {
        let json = r#"{"id":"p1","name":"Tower","address":"Main St","type":"Building"}"#;
        let property: Property = serde_json::from_str(json).unwrap();
        assert_eq!(property.property_type, PropertyType::Building);
        assert_eq!(property.units, None);

        let out = serde_json::to_value(&property).unwrap();
        assert_eq!(out["type"], "Building");
        assert!(out.get("image").is_none());
    }

    #[test]
    fn test_maintenance_status_wire_name() {
        let status: MaintenanceStatus = serde_json::from_str("\"In Progress\"").unwrap();
        assert_eq!(status, MaintenanceStatus::InProgress);
        assert_eq!(serde_json::to_string(&MaintenanceStatus::InProgress).unwrap(), "\"In Progress\"");
    }

    #[test]
    fn test_new_id_prefix() {
        let a = new_id("prop");
        let b = new_id("prop");
        assert!(a.starts_with("prop-"));
        assert_ne!(a, b);
    }
}
