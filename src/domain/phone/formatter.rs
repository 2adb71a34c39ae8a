use regex::Regex;

use super::HUNGARY_DIAL_CODE;
use super::value_objects::DialCode;
use crate::domain::catalog::entity::DialCodeCatalog;

/// Renders national digit sequences into locale-grouped display form.
/// Implementations are fed partial input on every keystroke and must return
/// a best-effort rendering, never an error.
pub trait NationalFormatter: Send + Sync {
    /// Format national digits for a known country.
    fn format_national(&self, country_iso: &str, digits: &str) -> String;

    /// Format a full international "+<code><digits>" string.
    fn format_international(&self, input: &str) -> String;
}

/// Hungarian display convention: 2-3-4 digit blocks, e.g. "30 123 4567".
const HUNGARIAN_GROUPS: [usize; 3] = [2, 3, 4];

/// Group national digits for display under the given dial code.
pub fn format_phone_local(
    digits: &str,
    dial_code: &DialCode,
    catalog: &DialCodeCatalog,
    formatter: &dyn NationalFormatter,
) -> String {
    if dial_code.as_str() == HUNGARY_DIAL_CODE {
        return group_hungarian(digits);
    }

    if let Some(country_iso) = catalog
        .find(dial_code.as_str())
        .and_then(|option| option.default_country.as_deref())
    {
        return formatter.format_national(country_iso, digits);
    }

    // No resolvable country: format the full international string and peel
    // the dial code back off.
    let international =
        formatter.format_international(&format!("{}{}", dial_code.as_str(), digits));
    strip_dial_code(&international, dial_code)
}

/// Compose the stored form "<dial code> <grouped local digits>", or an empty
/// string while there are no local digits yet.
pub fn build_phone_value(
    dial_code: &DialCode,
    local_digits: &str,
    catalog: &DialCodeCatalog,
    formatter: &dyn NationalFormatter,
) -> String {
    if local_digits.is_empty() {
        return String::new();
    }
    format!(
        "{} {}",
        dial_code.as_str(),
        format_phone_local(local_digits, dial_code, catalog, formatter)
    )
}

fn group_hungarian(digits: &str) -> String {
    let mut remaining = digits;
    let mut blocks: Vec<&str> = Vec::new();
    for size in HUNGARIAN_GROUPS {
        if remaining.is_empty() {
            break;
        }
        let take = size.min(remaining.len());
        blocks.push(&remaining[..take]);
        remaining = &remaining[take..];
    }
    blocks.join(" ")
}

fn strip_dial_code(formatted: &str, dial_code: &DialCode) -> String {
    match Regex::new(&format!(r"^\s*{}\s*", regex::escape(dial_code.as_str()))) {
        Ok(prefix) => prefix.replace(formatted, "").trim().to_string(),
        Err(_) => formatted.trim().to_string(),
    }
}
