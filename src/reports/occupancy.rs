use crate::core::{ContractStatus, UnitStatus};
use crate::storage::StoreState;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOccupancy {
    pub property_id: String,
    pub property_name: String,
    pub total_units: usize,
    pub occupied_units: usize,
    /// Percentage of units occupied; 0 for a property with no units
    pub rate: f64,
}

/// Per-property occupancy, optionally restricted to one property id
pub fn occupancy_report(state: &StoreState, property_filter: Option<&str>) -> Vec<PropertyOccupancy> {
    state
        .properties
        .iter()
        .filter(|p| property_filter.is_none_or(|id| p.id == id))
        .map(|property| {
            let (total, occupied) = state
                .units_of_property(&property.id)
                .fold((0usize, 0usize), |(total, occupied), unit| {
                    let is_occupied = usize::from(unit.status == UnitStatus::Occupied);
                    (total + 1, occupied + is_occupied)
                });

            let rate = if total == 0 {
                0.0
            } else {
                occupied as f64 / total as f64 * 100.0
            };

            PropertyOccupancy {
                property_id: property.id.clone(),
                property_name: property.name.clone(),
                total_units: total,
                occupied_units: occupied,
                rate,
            }
        })
        .collect()
}

/// Monthly rent across all active contracts
pub fn potential_monthly_rent(state: &StoreState) -> f64 {
    state
        .contracts
        .iter()
        .filter(|c| c.status == ContractStatus::Active)
        .map(|c| c.rent_amount)
        .sum()
}

/// Highest monthly rent collected in the financial history
pub fn max_rent_collected(state: &StoreState, property_filter: Option<&str>) -> f64 {
    state
        .financials
        .iter()
        .filter(|f| property_filter.is_none_or(|id| f.property_id.as_deref() == Some(id)))
        .map(|f| f.rent_collected)
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FinancialRecord, Property, PropertyType, Unit};

    fn property(id: &str) -> Property {
        Property {
            id: id.into(),
            name: id.to_uppercase(),
            address: String::new(),
            property_type: PropertyType::Apartment,
            units: None,
            image: None,
        }
    }

    fn unit(id: &str, property_id: &str, status: UnitStatus) -> Unit {
        Unit {
            id: id.into(),
            property_id: property_id.into(),
            unit_number: id.into(),
            floor: None,
            bedrooms: None,
            bathrooms: None,
            square_feet: None,
            status,
            rent_amount: 100.0,
        }
    }

    #[test]
    fn test_occupancy_rates() {
        let mut state = StoreState::default();
        state.properties = vec![property("p1"), property("p2")].into_iter().collect();
        state.units = vec![
            unit("u1", "p1", UnitStatus::Occupied),
            unit("u2", "p1", UnitStatus::Vacant),
            unit("u3", "p1", UnitStatus::Maintenance),
            unit("u4", "p1", UnitStatus::Occupied),
        ]
        .into_iter()
        .collect();

        let report = occupancy_report(&state, None);
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].total_units, 4);
        assert_eq!(report[0].occupied_units, 2);
        assert_eq!(report[0].rate, 50.0);
        assert_eq!(report[1].total_units, 0);
        assert_eq!(report[1].rate, 0.0);

        let filtered = occupancy_report(&state, Some("p2"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].property_name, "P2");
    }

    #[test]
    fn test_max_rent_collected_filter() {
        let mut state = StoreState::default();
        let record = |rent: f64, property: Option<&str>| FinancialRecord {
            month: "Feb".into(),
            year: 2024,
            rent_collected: rent,
            expenses: 10.0,
            property_id: property.map(str::to_string),
        };
        state.financials = vec![
            record(900.0, Some("p1")),
            record(1200.0, Some("p2")),
            record(400.0, None),
        ]
        .into_iter()
        .collect();

        assert_eq!(max_rent_collected(&state, None), 1200.0);
        assert_eq!(max_rent_collected(&state, Some("p1")), 900.0);
        assert_eq!(max_rent_collected(&state, Some("p9")), 0.0);
    }
}
