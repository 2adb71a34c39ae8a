use lazy_static::lazy_static;

use super::HUNGARY_DIAL_CODE;
use super::length_rules::{LengthResolver, LengthVerdict};
use super::parser::parse_phone_value;
use super::value_objects::DialCode;
use crate::domain::catalog::entity::DialCodeCatalog;

lazy_static! {
    /// Hungarian display form after the dial code: "NN NNN NNNN".
    static ref HUNGARIAN_DISPLAY_REGEX: regex::Regex =
        regex::Regex::new(r"^\d{2} \d{3} \d{4}$").unwrap();
}

/// Full-number validity checks backed by the phone-number library.
#[cfg_attr(test, mockall::automock)]
pub trait NumberVerifier: Send + Sync {
    /// Parse `digits` as a national number of `country_iso`; returns the
    /// recovered country calling code when the number is valid.
    fn national_calling_code(&self, country_iso: &str, digits: &str) -> Option<u16>;

    /// Whether a full international "+<code><digits>" string is valid.
    fn is_valid_international(&self, input: &str) -> bool;
}

/// Validate a stored phone value against the selected dial code.
///
/// Defensive on every branch: malformed input yields `false`, never an error.
pub fn is_valid_phone_number(
    value: &str,
    dial_code: &DialCode,
    catalog: &DialCodeCatalog,
    lengths: &LengthResolver,
    verifier: &dyn NumberVerifier,
) -> bool {
    if dial_code.as_str() == HUNGARY_DIAL_CODE {
        let rest = value.trim();
        let rest = rest.strip_prefix(HUNGARY_DIAL_CODE).unwrap_or(rest);
        return HUNGARIAN_DISPLAY_REGEX.is_match(rest.trim());
    }

    let parsed = parse_phone_value(value, dial_code, true, catalog, lengths);
    if parsed.local_digits.is_empty() {
        return false;
    }

    let config = lengths.phone_config(catalog, &parsed.dial_code);
    match config.option.default_country.as_deref() {
        Some(country_iso) => {
            if lengths.classify(country_iso, &parsed.local_digits) != LengthVerdict::Acceptable {
                return false;
            }
            // The recovered calling code must match the selected dial code
            // exactly, so a national number that is also valid under another
            // country's plan cannot slip through.
            match verifier.national_calling_code(country_iso, &parsed.local_digits) {
                Some(calling_code) => {
                    parsed.dial_code.digits().parse::<u16>() == Ok(calling_code)
                }
                None => false,
            }
        }
        None => verifier.is_valid_international(&format!(
            "{}{}",
            parsed.dial_code.as_str(),
            parsed.local_digits
        )),
    }
}
