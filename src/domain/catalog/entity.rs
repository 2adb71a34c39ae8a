use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::phone::value_objects::DialCode;

/// Raw per-country dialing metadata as returned by the country-metadata
/// service: an ISO 3166-1 alpha-2 code plus the international-dialing root
/// and its suffixes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDialingRecord {
    pub iso2: String,
    pub root: String,
    pub suffixes: Vec<String>,
}

impl CountryDialingRecord {
    /// Compose the record's dial code. A single suffix is appended to the
    /// root; zero or several suffixes (area codes under a shared plan) mean
    /// the root alone is the dial code.
    fn dial_code(&self) -> Option<DialCode> {
        let root = self.root.trim();
        let composed = match self.suffixes.as_slice() {
            [suffix] => format!("{}{}", root, suffix.trim()),
            _ => root.to_string(),
        };
        DialCode::new(composed).ok()
    }
}

/// One selectable dial-code entry grouping every country that shares it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountryDialOption {
    pub dial_code: DialCode,
    /// Sorted country codes joined by "/" plus the dial code, e.g. "CA/US +1".
    pub label: String,
    pub country_codes: Vec<String>,
    /// Country used for length-rule lookups; `None` when the calling code has
    /// no single resolvable country.
    pub default_country: Option<String>,
}

/// Immutable list of dial-code options for one page session.
#[derive(Debug, Clone, Default)]
pub struct DialCodeCatalog {
    options: Vec<CountryDialOption>,
}

impl DialCodeCatalog {
    /// Group raw records by composed dial code, label each group and sort the
    /// list alphabetically by label. Records with malformed codes are dropped.
    pub fn from_records(records: &[CountryDialingRecord]) -> Self {
        let mut grouped: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for record in records {
            let iso2 = record.iso2.trim().to_uppercase();
            if iso2.len() != 2 || !iso2.chars().all(|c| c.is_ascii_uppercase()) {
                continue;
            }
            if let Some(dial_code) = record.dial_code() {
                grouped
                    .entry(dial_code.value)
                    .or_default()
                    .insert(iso2);
            }
        }

        let mut options: Vec<CountryDialOption> = grouped
            .into_iter()
            .map(|(dial_code, countries)| {
                let country_codes: Vec<String> = countries.into_iter().collect();
                let label = format!("{} {}", country_codes.join("/"), dial_code);
                let default_country = country_codes.first().cloned();
                CountryDialOption {
                    dial_code: DialCode { value: dial_code },
                    label,
                    country_codes,
                    default_country,
                }
            })
            .collect();
        options.sort_by(|a, b| a.label.cmp(&b.label));

        Self { options }
    }

    /// The single built-in option used when the metadata fetch fails or
    /// yields nothing.
    pub fn fallback() -> Self {
        Self {
            options: vec![CountryDialOption {
                dial_code: DialCode::hungary(),
                label: "HU +36".to_string(),
                country_codes: vec!["HU".to_string()],
                default_country: Some("HU".to_string()),
            }],
        }
    }

    pub fn options(&self) -> &[CountryDialOption] {
        &self.options
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn find(&self, dial_code: &str) -> Option<&CountryDialOption> {
        self.options
            .iter()
            .find(|option| option.dial_code.as_str() == dial_code)
    }

    /// Option whose literal "+<code>" the (whitespace-trimmed) raw input
    /// starts with; the longest code wins when several match.
    pub fn match_literal_prefix(&self, raw: &str) -> Option<&CountryDialOption> {
        let raw = raw.trim_start();
        self.options
            .iter()
            .filter(|option| raw.starts_with(option.dial_code.as_str()))
            .max_by_key(|option| option.dial_code.as_str().len())
    }

    /// Option whose digit form prefixes `digits`; longest-prefix-wins so a
    /// two-digit code beats a one-digit code sharing its leading digit.
    pub fn longest_digit_prefix(&self, digits: &str) -> Option<&CountryDialOption> {
        self.options
            .iter()
            .filter(|option| digits.starts_with(option.dial_code.digits()))
            .max_by_key(|option| option.dial_code.digits().len())
    }

    /// Keep the current selection if it survived a reload, otherwise fall
    /// back to the first option.
    pub fn reselect(&self, current: Option<&str>) -> Option<&CountryDialOption> {
        current
            .and_then(|dial_code| self.find(dial_code))
            .or_else(|| self.options.first())
    }
}
