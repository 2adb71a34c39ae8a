use phonenumber::{Mode, ParseError, country};

use crate::domain::phone::formatter::NationalFormatter;
use crate::domain::phone::length_rules::{LengthVerdict, PhoneLengthOracle};
use crate::domain::phone::validator::NumberVerifier;

/// One adapter over the `phonenumber` crate for the three seams the domain
/// needs: the length oracle, the national display formatter and the
/// validity/calling-code verifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct Libphone;

fn country_id(country_iso: &str) -> Option<country::Id> {
    country_iso.parse::<country::Id>().ok()
}

impl PhoneLengthOracle for Libphone {
    fn classify(&self, country_iso: &str, digits: &str) -> LengthVerdict {
        let Some(id) = country_id(country_iso) else {
            // Unknown region: nothing to measure against, let it through.
            return LengthVerdict::Acceptable;
        };
        // Probe strings are pure digits, so a "no number" outcome can only
        // mean too few of them.
        match phonenumber::parse(Some(id), digits) {
            Err(ParseError::NoNumber)
            | Err(ParseError::TooShortNsn)
            | Err(ParseError::TooShortAfterIdd) => LengthVerdict::TooShort,
            Err(ParseError::TooLong) => LengthVerdict::TooLong,
            _ => LengthVerdict::Acceptable,
        }
    }
}

impl NationalFormatter for Libphone {
    fn format_national(&self, country_iso: &str, digits: &str) -> String {
        let Some(id) = country_id(country_iso) else {
            return digits.to_string();
        };
        match phonenumber::parse(Some(id), digits) {
            Ok(number) => number.format().mode(Mode::National).to_string(),
            // Partial input stays ungrouped until it parses.
            Err(_) => digits.to_string(),
        }
    }

    fn format_international(&self, input: &str) -> String {
        match phonenumber::parse(None, input) {
            Ok(number) => number.format().mode(Mode::International).to_string(),
            Err(_) => input.to_string(),
        }
    }
}

impl NumberVerifier for Libphone {
    fn national_calling_code(&self, country_iso: &str, digits: &str) -> Option<u16> {
        let id = country_id(country_iso)?;
        let number = phonenumber::parse(Some(id), digits).ok()?;
        if !phonenumber::is_valid(&number) {
            return None;
        }
        Some(number.country().code())
    }

    fn is_valid_international(&self, input: &str) -> bool {
        phonenumber::parse(None, input)
            .map(|number| phonenumber::is_valid(&number))
            .unwrap_or(false)
    }
}
