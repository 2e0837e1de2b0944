use crate::storage::DEFAULT_COMPANY_NAME;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
///
/// Builder-style; every setter consumes and returns the config.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Company name shown on the settings screen
    pub company_name: String,

    /// Currency code used in dashboard figures
    pub currency: String,

    /// Simulated round-trip delay of the profile service
    pub profile_latency: Duration,

    /// Contracts ending within this many days count as expiring
    pub expiry_window_days: u32,

    /// Row limit for the "recent"/"upcoming" dashboard tables
    pub recent_limit: usize,

    /// The single recognised login
    pub demo_email: String,
    pub demo_password: String,

    /// bcrypt cost for stored secrets
    pub password_hash_cost: u32,

    /// Where the session flag is persisted; `None` keeps it in memory only
    pub session_path: Option<PathBuf>,
}

impl AppConfig {
    pub const DEFAULT_DEMO_EMAIL: &'static str = "demo@proper.ly";
    pub const DEFAULT_DEMO_PASSWORD: &'static str = "Prop@demo";

    pub fn new() -> Self {
        Self {
            company_name: DEFAULT_COMPANY_NAME.to_string(),
            currency: "KWD".to_string(),
            profile_latency: Duration::from_millis(500),
            expiry_window_days: 30,
            recent_limit: 5,
            demo_email: Self::DEFAULT_DEMO_EMAIL.to_string(),
            demo_password: Self::DEFAULT_DEMO_PASSWORD.to_string(),
            password_hash_cost: bcrypt::DEFAULT_COST,
            session_path: None,
        }
    }

    /// Defaults overlaid with `PROPERLY_*` environment variables.
    ///
    /// Unparsable numeric values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(name) = lookup("PROPERLY_COMPANY_NAME") {
            config.company_name = name;
        }
        if let Some(currency) = lookup("PROPERLY_CURRENCY") {
            config.currency = currency;
        }
        if let Some(ms) = lookup("PROPERLY_PROFILE_LATENCY_MS").and_then(|v| v.parse().ok()) {
            config.profile_latency = Duration::from_millis(ms);
        }
        if let Some(days) = lookup("PROPERLY_EXPIRY_WINDOW_DAYS").and_then(|v| v.parse().ok()) {
            config.expiry_window_days = days;
        }
        if let Some(path) = lookup("PROPERLY_SESSION_PATH") {
            config.session_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn company_name(mut self, name: &str) -> Self {
        self.company_name = name.to_string();
        self
    }

    pub fn currency(mut self, currency: &str) -> Self {
        self.currency = currency.to_string();
        self
    }

    pub fn profile_latency(mut self, latency: Duration) -> Self {
        self.profile_latency = latency;
        self
    }

    pub fn expiry_window_days(mut self, days: u32) -> Self {
        self.expiry_window_days = days;
        self
    }

    pub fn recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn demo_credentials(mut self, email: &str, password: &str) -> Self {
        self.demo_email = email.to_string();
        self.demo_password = password.to_string();
        self
    }

    /// Lower costs are only suitable for tests
    pub fn password_hash_cost(mut self, cost: u32) -> Self {
        self.password_hash_cost = cost;
        self
    }

    pub fn session_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.session_path = Some(path.into());
        self
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::new();
        assert_eq!(config.company_name, "Proper.Ly");
        assert_eq!(config.currency, "KWD");
        assert_eq!(config.profile_latency, Duration::from_millis(500));
        assert_eq!(config.expiry_window_days, 30);
        assert_eq!(config.recent_limit, 5);
        assert!(config.session_path.is_none());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .company_name("Acme Estates")
            .currency("USD")
            .profile_latency(Duration::ZERO)
            .expiry_window_days(60)
            .session_path("/tmp/session.json");

        assert_eq!(config.company_name, "Acme Estates");
        assert_eq!(config.currency, "USD");
        assert_eq!(config.profile_latency, Duration::ZERO);
        assert_eq!(config.expiry_window_days, 60);
        assert_eq!(config.session_path, Some(PathBuf::from("/tmp/session.json")));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("PROPERLY_COMPANY_NAME", "Env Co"),
            ("PROPERLY_PROFILE_LATENCY_MS", "25"),
            ("PROPERLY_EXPIRY_WINDOW_DAYS", "not-a-number"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string()));
        assert_eq!(config.company_name, "Env Co");
        assert_eq!(config.profile_latency, Duration::from_millis(25));
        assert_eq!(config.expiry_window_days, 30);
        assert_eq!(config.currency, "KWD");
    }
}
