//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`KeyNotFound`] thrown when a referenced user, budget, category,
//!   budget item or transaction does not exist.
//! - [`EmptyCollection`] thrown when reconciliation has nothing to work on
//!   (a budget without items, or a period without transactions).
//! - [`Database`] any failure coming from the store, propagated as is.
//!
//!  [`KeyNotFound`]: EngineError::KeyNotFound
//!  [`EmptyCollection`]: EngineError::EmptyCollection
//!  [`Database`]: EngineError::Database
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Not found: {0}")]
    KeyNotFound(String),
    #[error("Empty collection: {0}")]
    EmptyCollection(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("Invalid kind: {0}")]
    InvalidKind(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Password error: {0}")]
    Password(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::EmptyCollection(a), Self::EmptyCollection(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::InvalidKind(a), Self::InvalidKind(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::Password(a), Self::Password(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
