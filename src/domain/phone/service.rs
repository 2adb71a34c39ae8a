use std::sync::Arc;

use super::formatter::{self, NationalFormatter};
use super::length_rules::{LengthResolver, PhoneConfig, PhoneLengthOracle};
use super::parser;
use super::validator::{self, NumberVerifier};
use super::value_objects::{DialCode, ParsedPhone};
use crate::domain::catalog::entity::DialCodeCatalog;

/// The one shared implementation of phone-input handling, used identically
/// by the checkout and the profile form: parsing, display formatting, value
/// composition and validation, parametrized by the loaded dial-code catalog.
pub struct PhoneFormService {
    catalog: Arc<DialCodeCatalog>,
    lengths: LengthResolver,
    formatter: Box<dyn NationalFormatter>,
    verifier: Box<dyn NumberVerifier>,
}

impl PhoneFormService {
    pub fn new(
        catalog: Arc<DialCodeCatalog>,
        oracle: Box<dyn PhoneLengthOracle>,
        formatter: Box<dyn NationalFormatter>,
        verifier: Box<dyn NumberVerifier>,
    ) -> Self {
        Self {
            catalog,
            lengths: LengthResolver::new(oracle),
            formatter,
            verifier,
        }
    }

    pub fn catalog(&self) -> &DialCodeCatalog {
        &self.catalog
    }

    /// Swap in a freshly loaded catalog (length memos survive; they are
    /// keyed by country, not by catalog generation).
    pub fn replace_catalog(&mut self, catalog: Arc<DialCodeCatalog>) {
        self.catalog = catalog;
    }

    pub fn phone_config(&self, dial_code: &DialCode) -> PhoneConfig {
        self.lengths.phone_config(&self.catalog, dial_code)
    }

    pub fn parse_phone_value(
        &self,
        raw: &str,
        fallback_dial_code: &DialCode,
        detect_dial_code: bool,
    ) -> ParsedPhone {
        parser::parse_phone_value(
            raw,
            fallback_dial_code,
            detect_dial_code,
            &self.catalog,
            &self.lengths,
        )
    }

    pub fn format_phone_local(&self, digits: &str, dial_code: &DialCode) -> String {
        formatter::format_phone_local(digits, dial_code, &self.catalog, self.formatter.as_ref())
    }

    pub fn build_phone_value(&self, dial_code: &DialCode, local_digits: &str) -> String {
        formatter::build_phone_value(
            dial_code,
            local_digits,
            &self.catalog,
            self.formatter.as_ref(),
        )
    }

    pub fn is_valid_phone_number(&self, value: &str, dial_code: &DialCode) -> bool {
        validator::is_valid_phone_number(
            value,
            dial_code,
            &self.catalog,
            &self.lengths,
            self.verifier.as_ref(),
        )
    }
}
