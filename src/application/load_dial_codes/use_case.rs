use std::sync::Arc;

use tracing::{debug, instrument, warn};

use super::dto::{DialCodesLoaded, LoadDialCodesRequest};
use crate::domain::catalog::entity::DialCodeCatalog;
use crate::domain::catalog::source::CountryDialingSource;
use crate::domain::phone::value_objects::DialCode;

pub struct LoadDialCodesUseCase {
    source: Box<dyn CountryDialingSource>,
}

impl LoadDialCodesUseCase {
    pub fn new(source: Box<dyn CountryDialingSource>) -> Self {
        Self { source }
    }

    /// Load the catalog once per page session. Any failure, and an empty
    /// grouping result, degrade to the built-in fallback option instead of
    /// surfacing an error to the form.
    #[instrument(skip(self, request))]
    pub async fn execute(&self, request: LoadDialCodesRequest) -> DialCodesLoaded {
        let catalog = match self.source.fetch_dialing_records().await {
            Ok(records) => {
                let catalog = DialCodeCatalog::from_records(&records);
                if catalog.is_empty() {
                    warn!("country metadata grouped into zero dial codes, using fallback");
                    DialCodeCatalog::fallback()
                } else {
                    debug!(options = catalog.options().len(), "dial code catalog loaded");
                    catalog
                }
            }
            Err(err) => {
                warn!("dial code catalog load failed: {}", err);
                DialCodeCatalog::fallback()
            }
        };

        let selected = catalog
            .reselect(request.current_selection.as_ref().map(DialCode::as_str))
            .map(|option| option.dial_code.clone())
            .unwrap_or_else(DialCode::hungary);

        DialCodesLoaded {
            catalog: Arc::new(catalog),
            selected,
        }
    }
}
