use crate::core::Contract;
use crate::storage::StoreState;
use chrono::{Days, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpiringContract {
    pub contract: Contract,
    /// `None` when the tenant record no longer exists
    pub tenant_name: Option<String>,
    pub days_until_expiry: i64,
}

/// Contracts ending within `window_days` of `today` (both ends inclusive),
/// soonest first
pub fn expiring_contracts(
    state: &StoreState,
    today: NaiveDate,
    window_days: u32,
    limit: usize,
) -> Vec<ExpiringContract> {
    let horizon = today
        .checked_add_days(Days::new(u64::from(window_days)))
        .unwrap_or(NaiveDate::MAX);

    let mut expiring: Vec<ExpiringContract> = state
        .contracts
        .iter()
        .filter(|c| c.end_date >= today && c.end_date <= horizon)
        .map(|c| ExpiringContract {
            contract: c.clone(),
            tenant_name: state.tenants.get(&c.tenant_id).map(|t| t.name.clone()),
            days_until_expiry: (c.end_date - today).num_days(),
        })
        .collect();

    expiring.sort_by_key(|e| e.contract.end_date);
    expiring.truncate(limit);
    expiring
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContractStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(id: &str, end: NaiveDate) -> Contract {
        Contract {
            id: id.into(),
            tenant_id: "ghost".into(),
            property_id: "p1".into(),
            unit_id: "u1".into(),
            start_date: date(2023, 1, 1),
            end_date: end,
            rent_amount: 300.0,
            status: ContractStatus::Active,
        }
    }

    #[test]
    fn test_window_bounds_and_ordering() {
        let mut state = StoreState::default();
        state.contracts = vec![
            contract("late", date(2024, 7, 1)),
            contract("edge", date(2024, 6, 30)),
            contract("today", date(2024, 5, 31)),
            contract("past", date(2024, 5, 30)),
            contract("soon", date(2024, 6, 10)),
        ]
        .into_iter()
        .collect();

        let result = expiring_contracts(&state, date(2024, 5, 31), 30, 10);
        let ids: Vec<&str> = result.iter().map(|e| e.contract.id.as_str()).collect();
        assert_eq!(ids, vec!["today", "soon", "edge"]);
        assert_eq!(result[0].days_until_expiry, 0);
        assert_eq!(result[2].days_until_expiry, 30);
        assert_eq!(result[0].tenant_name, None);
    }

    #[test]
    fn test_limit_truncates() {
        let mut state = StoreState::default();
        state.contracts = (1..=8)
            .map(|d| contract(&format!("c{}", d), date(2024, 6, d)))
            .collect();

        let result = expiring_contracts(&state, date(2024, 6, 1), 30, 5);
        assert_eq!(result.len(), 5);
        assert_eq!(result[4].contract.id, "c5");
    }
}
