use crate::core::{ContractStatus, FinancialRecord, MaintenanceRequest, Priority};
use crate::storage::StoreState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentCollected {
    pub amount: f64,
    pub currency: String,
    pub percent_change: f64,
}

/// Placeholder figures; no due-date tracking exists yet
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDue {
    pub amount: f64,
    pub currency: String,
    pub overdue_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSummary {
    pub total: usize,
    pub high_priority: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_properties: usize,
    pub total_tenants: usize,
    pub rent_collected: RentCollected,
    pub rent_due: RentDue,
    pub maintenance_requests: MaintenanceSummary,
}

/// Headline numbers for the dashboard widgets
pub fn dashboard_stats(state: &StoreState, currency: &str) -> DashboardStats {
    let active_rent = state
        .contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active)
        .map(|c| c.rent_amount)
        .sum::<f64>();

    let high_priority = state
        .maintenance_requests
        .iter()
        .filter(|r| r.priority == Priority::High)
        .count();

    let financials: Vec<&FinancialRecord> = state.financials.iter().collect();

    DashboardStats {
        total_properties: state.properties.len(),
        total_tenants: state.tenants.len(),
        rent_collected: RentCollected {
            amount: active_rent,
            currency: currency.to_string(),
            percent_change: round1(rent_trend(&financials)),
        },
        rent_due: RentDue {
            amount: 0.0,
            currency: currency.to_string(),
            overdue_count: 0,
        },
        maintenance_requests: MaintenanceSummary {
            total: state.maintenance_requests.len(),
            high_priority,
        },
    }
}

/// Percent change between the last two records of the history.
///
/// A jump from zero to anything positive counts as 100%.
pub fn rent_trend(history: &[&FinancialRecord]) -> f64 {
    let [.., previous, latest] = history else {
        return 0.0;
    };

    if previous.rent_collected > 0.0 {
        (latest.rent_collected - previous.rent_collected) / previous.rent_collected * 100.0
    } else if latest.rent_collected > 0.0 {
        100.0
    } else {
        0.0
    }
}

/// Newest requests first, by creation date
pub fn recent_maintenance(state: &StoreState, limit: usize) -> Vec<MaintenanceRequest> {
    let mut requests = state.maintenance_requests.to_vec();
    requests.sort_by(|a, b| b.date_created.cmp(&a.date_created));
    requests.truncate(limit);
    requests
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
