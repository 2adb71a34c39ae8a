use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

lazy_static! {
    static ref DIAL_CODE_REGEX: regex::Regex = regex::Regex::new(r"^\+\d{1,4}$").unwrap();
}

/// International calling-code prefix shared by one or more countries, e.g. "+36".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Validate)]
pub struct DialCode {
    #[validate(regex(path = *DIAL_CODE_REGEX))]
    pub value: String,
}

impl DialCode {
    pub fn new(value: String) -> Result<Self, validator::ValidationErrors> {
        let dial_code = Self { value };
        dial_code.validate()?;
        Ok(dial_code)
    }

    /// The built-in default-market dial code.
    pub fn hungary() -> Self {
        Self {
            value: "+36".to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// The dial code's own digit form, without the leading "+".
    pub fn digits(&self) -> &str {
        self.value.strip_prefix('+').unwrap_or(&self.value)
    }
}

/// Canonical decomposition of a free-form phone input: the dial code in play
/// and the national-significant digits, already truncated to the country's
/// maximum length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedPhone {
    pub dial_code: DialCode,
    pub local_digits: String,
}

/// Permissible count of national-significant digits for one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLengthBounds {
    pub min_length: usize,
    pub max_length: usize,
}
