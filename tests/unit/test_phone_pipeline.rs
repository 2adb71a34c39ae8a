use std::sync::Arc;

use contact_forms::application::phone_input::dto::PhoneInputRequest;
use contact_forms::application::phone_input::use_case::NormalizePhoneInputUseCase;
use contact_forms::domain::catalog::entity::{CountryDialingRecord, DialCodeCatalog};
use contact_forms::domain::phone::formatter::NationalFormatter;
use contact_forms::domain::phone::length_rules::{LengthVerdict, PhoneLengthOracle};
use contact_forms::domain::phone::service::PhoneFormService;
use contact_forms::domain::phone::validator::NumberVerifier;
use contact_forms::domain::phone::value_objects::DialCode;
use contact_forms::infrastructure::phone::Libphone;

/// Oracle stub accepting 4..=11 national digits for every country.
struct WindowOracle;

impl PhoneLengthOracle for WindowOracle {
    fn classify(&self, _country_iso: &str, digits: &str) -> LengthVerdict {
        match digits.len() {
            len if len < 4 => LengthVerdict::TooShort,
            len if len > 11 => LengthVerdict::TooLong,
            _ => LengthVerdict::Acceptable,
        }
    }
}

/// Formatter stub that never groups anything.
struct PlainFormatter;

impl NationalFormatter for PlainFormatter {
    fn format_national(&self, _country_iso: &str, digits: &str) -> String {
        digits.to_string()
    }

    fn format_international(&self, input: &str) -> String {
        input.to_string()
    }
}

/// Verifier stub that accepts everything and echoes the German calling code.
struct AlwaysGermany;

impl NumberVerifier for AlwaysGermany {
    fn national_calling_code(&self, _country_iso: &str, _digits: &str) -> Option<u16> {
        Some(49)
    }

    fn is_valid_international(&self, _input: &str) -> bool {
        true
    }
}

fn catalog() -> Arc<DialCodeCatalog> {
    Arc::new(DialCodeCatalog::from_records(&[
        CountryDialingRecord {
            iso2: "HU".to_string(),
            root: "+3".to_string(),
            suffixes: vec!["6".to_string()],
        },
        CountryDialingRecord {
            iso2: "DE".to_string(),
            root: "+4".to_string(),
            suffixes: vec!["9".to_string()],
        },
        CountryDialingRecord {
            iso2: "US".to_string(),
            root: "+1".to_string(),
            suffixes: vec![],
        },
    ]))
}

fn stub_service() -> PhoneFormService {
    PhoneFormService::new(
        catalog(),
        Box::new(WindowOracle),
        Box::new(PlainFormatter),
        Box::new(AlwaysGermany),
    )
}

fn libphone_service() -> PhoneFormService {
    PhoneFormService::new(
        catalog(),
        Box::new(Libphone),
        Box::new(Libphone),
        Box::new(Libphone),
    )
}

fn dial(value: &str) -> DialCode {
    DialCode::new(value.to_string()).expect("valid dial code")
}

#[test]
fn hungarian_value_round_trips_through_build_and_parse() {
    let service = stub_service();
    let hungary = dial("+36");

    let value = service.build_phone_value(&hungary, "301234567");
    assert_eq!(value, "+36 30 123 4567");

    let parsed = service.parse_phone_value(&value, &hungary, true);
    assert_eq!(parsed.dial_code.as_str(), "+36");
    assert_eq!(parsed.local_digits, "301234567");

    // Holds for national numbers that themselves begin with "36".
    let value = service.build_phone_value(&hungary, "361234567");
    let parsed = service.parse_phone_value(&value, &hungary, true);
    assert_eq!(parsed.local_digits, "361234567");
}

#[test]
fn hungarian_display_groups_two_three_four() {
    let service = stub_service();
    assert_eq!(
        service.format_phone_local("301234567", &dial("+36")),
        "30 123 4567"
    );
}

#[test]
fn hungarian_validation_accepts_the_canonical_form_only() {
    let service = stub_service();
    let hungary = dial("+36");
    assert!(service.is_valid_phone_number("+36 30 123 4567", &hungary));
    assert!(!service.is_valid_phone_number("+36 3012 345", &hungary));
}

#[test]
fn domestic_trunk_prefix_matches_the_canonical_form() {
    let service = stub_service();
    let hungary = dial("+36");

    let canonical = service.parse_phone_value("+36 30 123 4567", &hungary, true);
    let domestic = service.parse_phone_value("0630 123 4567", &hungary, true);
    assert_eq!(domestic.local_digits, canonical.local_digits);
}

#[test]
fn international_call_prefix_detects_the_dial_code() {
    let service = stub_service();
    let fallback = dial("+1");

    let detected = service.parse_phone_value("003630 123 4567", &fallback, true);
    assert_eq!(detected.dial_code.as_str(), "+36");

    let direct = service.parse_phone_value("+36 30 123 4567", &dial("+36"), true);
    assert_eq!(detected.local_digits, direct.local_digits);
}

#[test]
fn unknown_dial_code_gets_fallback_bounds() {
    let service = stub_service();
    let config = service.phone_config(&dial("+888"));
    assert_eq!(config.bounds.min_length, 6);
    assert_eq!(config.bounds.max_length, 12);

    let config = service.phone_config(&dial("+9"));
    assert_eq!(config.bounds.min_length, 6);
    assert_eq!(config.bounds.max_length, 14);
}

#[test]
fn normalize_use_case_derives_the_full_input_state() {
    let use_case = NormalizePhoneInputUseCase::new(stub_service());

    let state = use_case.execute(PhoneInputRequest {
        raw: "0630/123-4567".to_string(),
        fallback_dial_code: dial("+36"),
        detect_dial_code: true,
    });

    assert_eq!(state.dial_code.as_str(), "+36");
    assert_eq!(state.local_digits, "301234567");
    assert_eq!(state.display, "30 123 4567");
    assert_eq!(state.value, "+36 30 123 4567");
    assert!(state.is_valid);
}

#[test]
fn empty_input_produces_an_empty_invalid_state() {
    let use_case = NormalizePhoneInputUseCase::new(stub_service());

    let state = use_case.execute(PhoneInputRequest {
        raw: "   ".to_string(),
        fallback_dial_code: dial("+36"),
        detect_dial_code: true,
    });

    assert!(state.local_digits.is_empty());
    assert_eq!(state.value, "");
    assert!(!state.is_valid);
}

#[test]
fn real_phone_library_validates_a_us_number_end_to_end() {
    let service = libphone_service();
    let us = dial("+1");

    let parsed = service.parse_phone_value("+1 202 555 0123", &us, true);
    assert_eq!(parsed.dial_code.as_str(), "+1");
    assert_eq!(parsed.local_digits, "2025550123");

    let value = service.build_phone_value(&us, &parsed.local_digits);
    assert!(service.is_valid_phone_number(&value, &us));
}

#[test]
fn real_phone_library_keeps_the_hungarian_fast_path() {
    let service = libphone_service();
    assert!(service.is_valid_phone_number("+36 30 123 4567", &dial("+36")));
    assert!(!service.is_valid_phone_number("+36 301 234 56", &dial("+36")));
}
