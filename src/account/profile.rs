use super::{OperationOutcome, hash_password, hash_password_blocking, verify_password_blocking};
use crate::config::AppConfig;
use crate::core::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
}

impl UserProfile {
    pub fn demo(config: &AppConfig) -> Self {
        Self {
            id: "demo".to_string(),
            first_name: "Demo".to_string(),
            last_name: "User".to_string(),
            company_name: config.company_name.clone(),
            email: config.demo_email.clone(),
            phone: "+965 555-1234".to_string(),
        }
    }
}

/// Remote profile service.
///
/// Credential mismatches come back as an unsuccessful [`OperationOutcome`];
/// `Err` is reserved for failures of the service itself.
#[async_trait]
pub trait ProfileApi: Send + Sync {
    async fn get_profile(&self) -> UserProfile;

    /// Replaces the stored profile if `password` is the current secret
    async fn update_profile(&self, profile: UserProfile, password: &str) -> Result<OperationOutcome>;

    /// Replaces the secret if `current_password` matches it
    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<OperationOutcome>;
}

/// In-process stand-in for the profile service with a fixed simulated delay
pub struct InMemoryProfileApi {
    profile: RwLock<UserProfile>,
    password_hash: RwLock<String>,
    latency: Duration,
    hash_cost: u32,
}

impl InMemoryProfileApi {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Self::with_profile(UserProfile::demo(config), &config.demo_password, config)
    }

    pub fn with_profile(profile: UserProfile, password: &str, config: &AppConfig) -> Result<Self> {
        Ok(Self {
            profile: RwLock::new(profile),
            password_hash: RwLock::new(hash_password(password, config.password_hash_cost)?),
            latency: config.profile_latency,
            hash_cost: config.password_hash_cost,
        })
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl ProfileApi for InMemoryProfileApi {
    async fn get_profile(&self) -> UserProfile {
        self.simulate_latency().await;
        self.profile.read().await.clone()
    }

    async fn update_profile(&self, profile: UserProfile, password: &str) -> Result<OperationOutcome> {
        self.simulate_latency().await;

        let current = self.password_hash.read().await.clone();
        if !verify_password_blocking(password, &current).await {
            warn!("profile update rejected: incorrect password");
            return Ok(OperationOutcome::failure("Incorrect password."));
        }

        *self.profile.write().await = profile;
        info!("profile updated");
        Ok(OperationOutcome::success("Profile updated successfully."))
    }

    async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<OperationOutcome> {
        self.simulate_latency().await;

        let verified = self.password_hash.read().await.clone();
        if !verify_password_blocking(current_password, &verified).await {
            warn!("password change rejected: current password mismatch");
            return Ok(OperationOutcome::failure("Current password is incorrect."));
        }

        let replacement = hash_password_blocking(new_password, self.hash_cost).await?;

        // A concurrent change since verification invalidates the current password
        let mut hash = self.password_hash.write().await;
        if *hash != verified {
            warn!("password change rejected: secret changed concurrently");
            return Ok(OperationOutcome::failure("Current password is incorrect."));
        }
        *hash = replacement;
        info!("password changed");
        Ok(OperationOutcome::success("Password updated successfully."))
    }
}
