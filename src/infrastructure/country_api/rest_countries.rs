use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::domain::catalog::entity::CountryDialingRecord;
use crate::domain::catalog::source::CountryDialingSource;
use crate::domain::errors::DomainError;

/// Fields requested from the country-metadata service; everything else the
/// endpoint could return is dead weight for the picker.
const COUNTRY_FIELDS: &str = "cca2,idd";

#[derive(Debug, Deserialize)]
struct RestCountry {
    cca2: String,
    #[serde(default)]
    idd: RestIdd,
}

#[derive(Debug, Default, Deserialize)]
struct RestIdd {
    root: Option<String>,
    #[serde(default)]
    suffixes: Vec<String>,
}

/// Dial-code metadata source backed by the REST Countries v3.1 API.
pub struct RestCountriesSource {
    client: reqwest::Client,
    base_url: String,
}

impl RestCountriesSource {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| DomainError::InfrastructureError(err.to_string()))?;
        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl CountryDialingSource for RestCountriesSource {
    async fn fetch_dialing_records(&self) -> Result<Vec<CountryDialingRecord>, DomainError> {
        let url = format!(
            "{}/v3.1/all?fields={}",
            self.base_url.trim_end_matches('/'),
            COUNTRY_FIELDS
        );

        let countries = self
            .client
            .get(&url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| DomainError::CatalogUnavailable(err.to_string()))?
            .json::<Vec<RestCountry>>()
            .await
            .map_err(|err| DomainError::CatalogUnavailable(err.to_string()))?;

        let records: Vec<CountryDialingRecord> = countries
            .into_iter()
            .filter_map(|country| {
                let root = country.idd.root?;
                Some(CountryDialingRecord {
                    iso2: country.cca2,
                    root,
                    suffixes: country.idd.suffixes,
                })
            })
            .collect();

        debug!(count = records.len(), "fetched country dialing records");
        Ok(records)
    }
}
