use std::collections::HashMap;
use std::sync::RwLock;

use super::HUNGARY_DIAL_CODE;
use super::value_objects::{DialCode, PhoneLengthBounds};
use crate::domain::catalog::entity::{CountryDialOption, DialCodeCatalog};

/// Longest national-significant number considered anywhere in the system.
pub const MAX_NATIONAL_DIGITS: usize = 15;

/// Minimum national length assumed for calling codes with no resolvable country.
const FALLBACK_MIN_DIGITS: usize = 6;

/// Verdict of the length oracle for a candidate digit string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthVerdict {
    TooShort,
    Acceptable,
    TooLong,
}

/// Classifies a candidate national number's digit count against one
/// country's numbering plan.
#[cfg_attr(test, mockall::automock)]
pub trait PhoneLengthOracle: Send + Sync {
    fn classify(&self, country_iso: &str, digits: &str) -> LengthVerdict;
}

/// A dial-code option enriched with the digit-count bounds used for input
/// truncation and validation.
#[derive(Debug, Clone)]
pub struct PhoneConfig {
    pub option: CountryDialOption,
    pub bounds: PhoneLengthBounds,
}

/// Resolves per-country digit-count bounds, memoized per ISO country code
/// for the lifetime of the page session.
pub struct LengthResolver {
    oracle: Box<dyn PhoneLengthOracle>,
    cache: RwLock<HashMap<String, PhoneLengthBounds>>,
}

impl LengthResolver {
    pub fn new(oracle: Box<dyn PhoneLengthOracle>) -> Self {
        Self {
            oracle,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Resolve the option and digit-count bounds for a dial code.
    ///
    /// Dial codes absent from the catalog get a synthetic option and the
    /// generic fallback bounds.
    pub fn phone_config(&self, catalog: &DialCodeCatalog, dial_code: &DialCode) -> PhoneConfig {
        let option = catalog
            .find(dial_code.as_str())
            .cloned()
            .unwrap_or_else(|| synthetic_option(dial_code));

        // Domestic numbering is fixed at nine digits; the dominant market
        // never goes through the probe.
        if option.dial_code.as_str() == HUNGARY_DIAL_CODE {
            return PhoneConfig {
                option,
                bounds: PhoneLengthBounds {
                    min_length: 9,
                    max_length: 9,
                },
            };
        }

        let bounds = match option.default_country.as_deref() {
            Some(country_iso) => self.bounds_for_country(country_iso),
            None => fallback_bounds(&option.dial_code),
        };
        PhoneConfig { option, bounds }
    }

    /// Direct oracle access for digit-count validation.
    pub fn classify(&self, country_iso: &str, digits: &str) -> LengthVerdict {
        self.oracle.classify(country_iso, digits)
    }

    fn bounds_for_country(&self, country_iso: &str) -> PhoneLengthBounds {
        if let Ok(cache) = self.cache.read() {
            if let Some(bounds) = cache.get(country_iso) {
                return *bounds;
            }
        }
        let bounds = self.probe_bounds(country_iso);
        if let Ok(mut cache) = self.cache.write() {
            cache.insert(country_iso.to_string(), bounds);
        }
        bounds
    }

    /// Walk candidate lengths 1..=15 asking the oracle about an all-nines
    /// digit string of each length. The minimum is the first length no
    /// longer flagged too short; the maximum is one less than the first
    /// length flagged too long, clamped to the minimum.
    fn probe_bounds(&self, country_iso: &str) -> PhoneLengthBounds {
        let mut min_length: Option<usize> = None;
        let mut max_length = MAX_NATIONAL_DIGITS;

        for length in 1..=MAX_NATIONAL_DIGITS {
            let probe = "9".repeat(length);
            match self.oracle.classify(country_iso, &probe) {
                LengthVerdict::TooShort => {}
                LengthVerdict::Acceptable => {
                    if min_length.is_none() {
                        min_length = Some(length);
                    }
                }
                LengthVerdict::TooLong => {
                    if min_length.is_none() {
                        min_length = Some(length);
                    }
                    max_length = length.saturating_sub(1);
                    break;
                }
            }
        }

        let min_length = min_length.unwrap_or(MAX_NATIONAL_DIGITS);
        PhoneLengthBounds {
            min_length,
            max_length: max_length.max(min_length),
        }
    }
}

fn synthetic_option(dial_code: &DialCode) -> CountryDialOption {
    CountryDialOption {
        dial_code: dial_code.clone(),
        label: dial_code.as_str().to_string(),
        country_codes: Vec::new(),
        default_country: None,
    }
}

/// Bounds for a dial code with no resolvable country: at least six national
/// digits, and no more than fit next to the dial code in a 15-digit number.
fn fallback_bounds(dial_code: &DialCode) -> PhoneLengthBounds {
    PhoneLengthBounds {
        min_length: FALLBACK_MIN_DIGITS,
        max_length: FALLBACK_MIN_DIGITS
            .max(MAX_NATIONAL_DIGITS.saturating_sub(dial_code.digits().len())),
    }
}
