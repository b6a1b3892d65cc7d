use crate::errors::repository::RepositoryError;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    NotFound(String),

    #[error("Investment with name {0} already registered in the system.")]
    AlreadyRegistered(String),

    #[error("Expiration date must not be before the initial date.")]
    InvalidExpirationDate,

    #[error("Insufficient balance to withdraw $ {0:.2}.")]
    InsufficientBalance(Decimal),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
