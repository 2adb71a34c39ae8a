use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Country catalog unavailable: {0}")]
    CatalogUnavailable(String),
    #[error("Infrastructure error: {0}")]
    InfrastructureError(String),
}
