//! Read-only views computed from a [`StoreState`](crate::storage::StoreState).
//!
//! Nothing here mutates the store; callers typically pass a snapshot.

pub mod dashboard;
pub mod expiry;
pub mod occupancy;

pub use dashboard::{
    DashboardStats, MaintenanceSummary, RentCollected, RentDue, dashboard_stats,
    recent_maintenance, rent_trend,
};
pub use expiry::{ExpiringContract, expiring_contracts};
pub use occupancy::{PropertyOccupancy, max_rent_collected, occupancy_report, potential_monthly_rent};
