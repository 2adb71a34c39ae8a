use async_trait::async_trait;
use contact_forms::application::load_dial_codes::dto::LoadDialCodesRequest;
use contact_forms::application::load_dial_codes::use_case::LoadDialCodesUseCase;
use contact_forms::domain::catalog::entity::{CountryDialingRecord, DialCodeCatalog};
use contact_forms::domain::catalog::source::CountryDialingSource;
use contact_forms::domain::errors::DomainError;
use contact_forms::domain::phone::value_objects::DialCode;

struct FailingSource;

#[async_trait]
impl CountryDialingSource for FailingSource {
    async fn fetch_dialing_records(&self) -> Result<Vec<CountryDialingRecord>, DomainError> {
        Err(DomainError::CatalogUnavailable(
            "connection refused".to_string(),
        ))
    }
}

struct FixedSource(Vec<CountryDialingRecord>);

#[async_trait]
impl CountryDialingSource for FixedSource {
    async fn fetch_dialing_records(&self) -> Result<Vec<CountryDialingRecord>, DomainError> {
        Ok(self.0.clone())
    }
}

fn record(iso2: &str, root: &str, suffixes: &[&str]) -> CountryDialingRecord {
    CountryDialingRecord {
        iso2: iso2.to_string(),
        root: root.to_string(),
        suffixes: suffixes.iter().map(|s| s.to_string()).collect(),
    }
}

#[test]
fn shared_dial_codes_group_under_one_label() {
    let catalog = DialCodeCatalog::from_records(&[
        record("KZ", "+7", &["6", "7"]),
        record("RU", "+7", &["3", "4", "9"]),
    ]);

    assert_eq!(catalog.options().len(), 1);
    let option = &catalog.options()[0];
    assert_eq!(option.label, "KZ/RU +7");
    assert_eq!(option.default_country.as_deref(), Some("KZ"));
}

#[test]
fn options_are_sorted_by_label() {
    let catalog = DialCodeCatalog::from_records(&[
        record("US", "+1", &[]),
        record("DE", "+4", &["9"]),
        record("HU", "+3", &["6"]),
    ]);

    let labels: Vec<&str> = catalog
        .options()
        .iter()
        .map(|option| option.label.as_str())
        .collect();
    assert_eq!(labels, vec!["DE +49", "HU +36", "US +1"]);
}

#[tokio::test]
async fn network_failure_leaves_exactly_the_fallback_option() {
    let use_case = LoadDialCodesUseCase::new(Box::new(FailingSource));

    let loaded = use_case
        .execute(LoadDialCodesRequest {
            current_selection: Some(DialCode::new("+49".to_string()).unwrap()),
        })
        .await;

    assert_eq!(loaded.catalog.options().len(), 1);
    let option = &loaded.catalog.options()[0];
    assert_eq!(option.dial_code.as_str(), "+36");
    assert_eq!(option.label, "HU +36");
    assert_eq!(loaded.selected.as_str(), "+36");
}

#[tokio::test]
async fn reload_keeps_a_surviving_selection_and_resets_a_missing_one() {
    let records = vec![record("DE", "+4", &["9"]), record("HU", "+3", &["6"])];

    let use_case = LoadDialCodesUseCase::new(Box::new(FixedSource(records.clone())));
    let kept = use_case
        .execute(LoadDialCodesRequest {
            current_selection: Some(DialCode::new("+36".to_string()).unwrap()),
        })
        .await;
    assert_eq!(kept.selected.as_str(), "+36");

    let use_case = LoadDialCodesUseCase::new(Box::new(FixedSource(records)));
    let reset = use_case
        .execute(LoadDialCodesRequest {
            current_selection: Some(DialCode::new("+44".to_string()).unwrap()),
        })
        .await;
    assert_eq!(reset.selected.as_str(), "+49");
}
