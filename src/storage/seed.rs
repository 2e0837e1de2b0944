use crate::core::{
    Announcement, Contract, FinancialRecord, MaintenanceRequest, Property, Result, StoreError,
    Tenant, Unit,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Bulk-load document: one array per collection, every key optional.
///
/// ```json
/// { "companyName": "Proper.Ly", "properties": [...], "units": [...] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreSeed {
    pub company_name: Option<String>,
    pub properties: Vec<Property>,
    pub units: Vec<Unit>,
    pub tenants: Vec<Tenant>,
    pub contracts: Vec<Contract>,
    pub maintenance_requests: Vec<MaintenanceRequest>,
    pub announcements: Vec<Announcement>,
    pub historical_financials: Vec<FinancialRecord>,
}

impl StoreSeed {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| StoreError::Seed(e.to_string()))
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|e| {
            StoreError::Io(format!("Failed to read seed '{}': {}", path.display(), e))
        })?;
        Self::from_json(&data)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| StoreError::Seed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let seed = StoreSeed::from_json(r#"{"properties":[{"id":"p1","name":"A","address":"B","type":"House"}]}"#)
            .unwrap();
        assert_eq!(seed.properties.len(), 1);
        assert!(seed.units.is_empty());
        assert_eq!(seed.company_name, None);
    }

    #[test]
    fn test_malformed_seed_is_reported() {
        let err = StoreSeed::from_json("{\"units\": 3}").unwrap_err();
        assert!(matches!(err, StoreError::Seed(_)));
    }
}
