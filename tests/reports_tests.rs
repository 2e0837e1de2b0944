use chrono::NaiveDate;
use properly::reports::{
    dashboard_stats, expiring_contracts, occupancy_report, potential_monthly_rent,
    recent_maintenance,
};
use properly::{AppConfig, PropertyStore, Result, StoreSeed};

const SEED: &str = r#"{
    "companyName": "Proper.Ly",
    "properties": [
        {"id": "p1", "name": "Salmiya Tower", "address": "Salem Al Mubarak St", "type": "Building", "units": 3},
        {"id": "p2", "name": "Villa 9", "address": "Mishref", "type": "House"}
    ],
    "units": [
        {"id": "u1", "propertyId": "p1", "unitNumber": "101", "status": "Occupied", "rentAmount": 450},
        {"id": "u2", "propertyId": "p1", "unitNumber": "102", "status": "Vacant", "rentAmount": 420},
        {"id": "u3", "propertyId": "p2", "unitNumber": "A", "status": "Occupied", "rentAmount": 1200}
    ],
    "tenants": [
        {"id": "t1", "name": "Ali", "email": "ali@example.com", "phone": "1", "unitId": "u1", "propertyId": "p1",
         "leaseStart": "2024-01-01", "leaseEnd": "2024-06-30"},
        {"id": "t2", "name": "Noura", "email": "noura@example.com", "phone": "2", "unitId": "u3", "propertyId": "p2",
         "leaseStart": "2023-07-01", "leaseEnd": "2025-06-30"}
    ],
    "contracts": [
        {"id": "c1", "tenantId": "t1", "propertyId": "p1", "unitId": "u1", "startDate": "2024-01-01",
         "endDate": "2024-06-30", "rentAmount": 450, "status": "Active"},
        {"id": "c2", "tenantId": "t2", "propertyId": "p2", "unitId": "u3", "startDate": "2023-07-01",
         "endDate": "2025-06-30", "rentAmount": 1200, "status": "Active"},
        {"id": "c3", "tenantId": "t1", "propertyId": "p1", "unitId": "u1", "startDate": "2023-01-01",
         "endDate": "2023-12-31", "rentAmount": 400, "status": "Expired"}
    ],
    "maintenanceRequests": [
        {"id": "m1", "propertyId": "p1", "unitId": "u1", "title": "Leak", "description": "Bathroom",
         "status": "Pending", "priority": "High", "dateCreated": "2024-06-01", "dateUpdated": "2024-06-01"},
        {"id": "m2", "propertyId": "p2", "title": "Gate", "description": "Motor",
         "status": "In Progress", "priority": "Low", "dateCreated": "2024-06-05", "dateUpdated": "2024-06-06"}
    ],
    "historicalFinancials": [
        {"month": "Apr", "year": 2024, "rentCollected": 1500, "expenses": 200},
        {"month": "May", "year": 2024, "rentCollected": 1650, "expenses": 180}
    ]
}"#;

fn store() -> Result<PropertyStore> {
    Ok(PropertyStore::from_seed(StoreSeed::from_json(SEED)?, &AppConfig::new()))
}

#[test]
fn test_dashboard_stats_from_seed() -> Result<()> {
    let store = store()?;
    let stats = dashboard_stats(store.state(), "KWD");

    assert_eq!(stats.total_properties, 2);
    assert_eq!(stats.total_tenants, 2);
    assert_eq!(stats.rent_collected.amount, 1650.0);
    assert_eq!(stats.rent_collected.percent_change, 10.0);
    assert_eq!(stats.maintenance_requests.total, 2);
    assert_eq!(stats.maintenance_requests.high_priority, 1);
    assert_eq!(potential_monthly_rent(store.state()), 1650.0);
    Ok(())
}

#[test]
fn test_expiring_contracts_include_tenant_name() -> Result<()> {
    let store = store()?;
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let expiring = expiring_contracts(store.state(), today, 30, 5);
    assert_eq!(expiring.len(), 1);
    assert_eq!(expiring[0].contract.id, "c1");
    assert_eq!(expiring[0].tenant_name.as_deref(), Some("Ali"));
    assert_eq!(expiring[0].days_until_expiry, 15);
    Ok(())
}

#[test]
fn test_reports_follow_cascades() -> Result<()> {
    let mut store = store()?;
    store.delete_unit("u1");

    let occupancy = occupancy_report(store.state(), Some("p1"));
    assert_eq!(occupancy[0].total_units, 1);
    assert_eq!(occupancy[0].occupied_units, 0);

    let stats = dashboard_stats(store.state(), "KWD");
    assert_eq!(stats.total_tenants, 1);
    assert_eq!(stats.rent_collected.amount, 1200.0);

    // Maintenance requests keep pointing at the deleted unit
    let recent = recent_maintenance(store.state(), 5);
    assert_eq!(recent.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["m2", "m1"]);
    Ok(())
}
