use super::HUNGARY_DIAL_CODE;
use super::length_rules::LengthResolver;
use super::value_objects::{DialCode, ParsedPhone};
use crate::domain::catalog::entity::DialCodeCatalog;

/// Dialled form of the international call prefix ("+" typed as digits).
const INTERNATIONAL_CALL_PREFIX: &str = "00";

/// Domestic trunk prefix of the Hungarian numbering plan.
const HUNGARIAN_TRUNK_PREFIX: &str = "06";

/// Derive the canonical (dial code, national digits) pair from free-form
/// input.
///
/// The working dial code defaults to `fallback_dial_code`; with
/// `detect_dial_code` set, a literal "+<code>" from the catalog, or a known
/// code behind the "00" call prefix (longest prefix wins), overrides it.
/// When detection adopts nothing, a typed-out dial code is stripped off the
/// digits instead; then Hungarian trunk prefixes are dropped and the
/// remainder is truncated to the resolved maximum length.
///
/// Total and idempotent for a given catalog state: any input yields a pair,
/// never an error.
pub fn parse_phone_value(
    raw: &str,
    fallback_dial_code: &DialCode,
    detect_dial_code: bool,
    catalog: &DialCodeCatalog,
    lengths: &LengthResolver,
) -> ParsedPhone {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let mut dial_code = fallback_dial_code.clone();
    let mut adopted = false;

    if detect_dial_code {
        if let Some(option) = catalog.match_literal_prefix(raw) {
            dial_code = option.dial_code.clone();
            if let Some(rest) = digits.strip_prefix(option.dial_code.digits()) {
                digits = rest.to_string();
            }
            adopted = true;
        } else if let Some(international) = digits.strip_prefix(INTERNATIONAL_CALL_PREFIX) {
            if let Some(option) = catalog.longest_digit_prefix(international) {
                dial_code = option.dial_code.clone();
                digits = international[option.dial_code.digits().len()..].to_string();
                adopted = true;
            }
        }
    }

    // Detection may not have fired even though the dial code itself was
    // typed out (with or without the "00" call prefix). Never strip twice:
    // national numbers are allowed to start with the dial code's digits.
    if !adopted {
        let dial_digits = dial_code.digits().to_string();
        if let Some(rest) = digits.strip_prefix(&dial_digits) {
            digits = rest.to_string();
        } else if let Some(rest) =
            digits.strip_prefix(&format!("{INTERNATIONAL_CALL_PREFIX}{dial_digits}"))
        {
            digits = rest.to_string();
        }
    }

    if dial_code.as_str() == HUNGARY_DIAL_CODE {
        if let Some(rest) = digits.strip_prefix(HUNGARIAN_TRUNK_PREFIX) {
            digits = rest.to_string();
        } else if let Some(rest) = digits.strip_prefix('0') {
            digits = rest.to_string();
        }
    }

    let config = lengths.phone_config(catalog, &dial_code);
    digits.truncate(config.bounds.max_length);

    ParsedPhone {
        dial_code,
        local_digits: digits,
    }
}
