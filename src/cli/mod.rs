use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use properly::{AppConfig, PropertyStore, StoreSeed, reports};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "properly", version, about = "Property-management store reports over a JSON seed")]
pub struct Cli {
    /// Seed document to load before running the command
    #[arg(long, global = true, default_value = "seed.json")]
    pub seed: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dashboard headline figures
    Stats,

    /// Contracts ending soon
    Expiring {
        /// Reference date, defaults to the local date
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Window length in days, defaults to the configured window
        #[arg(long)]
        days: Option<u32>,
    },

    /// Occupancy per property
    Occupancy {
        #[arg(long)]
        property: Option<String>,
    },

    /// Delete a property and print everything the cascade removed
    DeleteProperty { id: String },
}

pub fn run(cli: Cli) -> anyhow::Result<String> {
    let config = AppConfig::from_env();
    let seed = StoreSeed::from_path(&cli.seed)
        .with_context(|| format!("loading seed {}", cli.seed.display()))?;
    let mut store = PropertyStore::from_seed(seed, &config);

    match cli.command {
        Command::Stats => to_json(&reports::dashboard_stats(store.state(), &config.currency)),
        Command::Expiring { today, days } => {
            let today = today.unwrap_or_else(|| Local::now().date_naive());
            let days = days.unwrap_or(config.expiry_window_days);
            to_json(&reports::expiring_contracts(
                store.state(),
                today,
                days,
                config.recent_limit,
            ))
        }
        Command::Occupancy { property } => {
            to_json(&reports::occupancy_report(store.state(), property.as_deref()))
        }
        Command::DeleteProperty { id } => to_json(&store.delete_property(&id)),
    }
}

fn to_json<T: Serialize>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const SEED: &str = r#"{
        "properties": [{"id":"p1","name":"Salmiya Tower","address":"Salem Al Mubarak St","type":"Building"}],
        "units": [{"id":"u1","propertyId":"p1","unitNumber":"101","status":"Occupied","rentAmount":450}],
        "tenants": [{"id":"t1","name":"Ali","email":"ali@example.com","phone":"1","unitId":"u1","propertyId":"p1","leaseStart":"2024-01-01","leaseEnd":"2024-12-31"}],
        "contracts": [{"id":"c1","tenantId":"t1","propertyId":"p1","unitId":"u1","startDate":"2024-01-01","endDate":"2024-12-31","rentAmount":450,"status":"Active"}]
    }"#;

    fn cli(seed: PathBuf, command: Command) -> Cli {
        Cli { seed, command }
    }

    #[test]
    fn test_parse_expiring_args() {
        let parsed = Cli::try_parse_from([
            "properly", "expiring", "--today", "2024-12-15", "--days", "10", "--seed", "x.json",
        ])
        .unwrap();
        assert_eq!(parsed.seed, PathBuf::from("x.json"));
        match parsed.command {
            Command::Expiring { today, days } => {
                assert_eq!(today, NaiveDate::from_ymd_opt(2024, 12, 15));
                assert_eq!(days, Some(10));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_delete_property_prints_cascade() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, SEED).unwrap();

        let out = run(cli(path, Command::DeleteProperty { id: "p1".into() })).unwrap();
        let changes: serde_json::Value = serde_json::from_str(&out).unwrap();
        let removed: Vec<&str> = changes
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap())
            .collect();
        assert_eq!(removed, vec!["p1", "u1", "t1", "c1"]);
    }

    #[test]
    fn test_stats_from_seed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.json");
        fs::write(&path, SEED).unwrap();

        let out = run(cli(path, Command::Stats)).unwrap();
        let stats: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(stats["totalProperties"], 1);
        assert_eq!(stats["rentCollected"]["amount"], 450.0);
    }

    #[test]
    fn test_missing_seed_is_reported() {
        let err = run(cli(PathBuf::from("/nonexistent/seed.json"), Command::Stats)).unwrap_err();
        assert!(err.to_string().contains("loading seed"));
    }
}
