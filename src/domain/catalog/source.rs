use super::entity::CountryDialingRecord;
use crate::domain::errors::DomainError;
use async_trait::async_trait;

/// Port for the public country-metadata service the dial-code catalog is
/// loaded from once per page session.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountryDialingSource: Send + Sync {
    async fn fetch_dialing_records(&self) -> Result<Vec<CountryDialingRecord>, DomainError>;
}
