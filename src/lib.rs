// ============================================================================
// Properly Library
// ============================================================================

pub mod account;
pub mod config;
pub mod core;
pub mod facade;
pub mod integrity;
pub mod reports;
pub mod storage;
pub mod transaction;

// Re-export main types for convenience
pub use config::AppConfig;
pub use core::{EntityKind, Result, StoreError};
pub use facade::PropertyStore;
pub use storage::{Repository, StoreSeed, StoreState};
pub use transaction::{Change, ChangeSet};

pub use account::{
    Authenticator, InMemoryProfileApi, OperationOutcome, ProfileApi, SessionFile, SessionState,
    UserProfile,
};
