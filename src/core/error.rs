use crate::core::EntityKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Invalid {entity} data: referenced {target} '{id}' not found")]
    DanglingReference {
        entity: EntityKind,
        target: EntityKind,
        id: String,
    },

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<bcrypt::BcryptError> for StoreError {
    fn from(err: bcrypt::BcryptError) -> Self {
        Self::PasswordHash(err.to_string())
    }
}
