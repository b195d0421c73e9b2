//! Tests for the JSON case input format.

use epistats_cli::input::CaseInput;
use epistats_export::{ExportAudience, project};
use epistats_model::YesNoUnknown;

const CASE_JSON: &str = r#"
{
    "case": {
        "uuid": "ABC-123",
        "epid_number": "SLE-FWT-2020-042",
        "disease": "CHOLERA",
        "report_date": "2020-04-02",
        "region": "Western Area",
        "district": "Freetown",
        "classification": "CONFIRMED",
        "investigation_status": "DONE",
        "outcome": "RECOVERED"
    },
    "person": {
        "first_name": "Amara",
        "last_name": "Conteh",
        "sex": "FEMALE",
        "approximate_age": 34,
        "approximate_age_type": "YEARS"
    },
    "hospitalization": {
        "admitted_to_health_facility": "YES",
        "admission_date": "2020-04-03"
    },
    "country": {
        "uuid": "country-1",
        "default_name": "Mauvania",
        "display_name": "Mauvania",
        "iso_code": "MV"
    },
    "sample_taken": "YES",
    "sample_dates": ["2020-01-01", "2020-01-05"],
    "lab_results": ["PENDING", "POSITIVE"],
    "associated_with_outbreak": true,
    "number_of_clinical_visits": 2
}
"#;

#[test]
fn case_input_builds_an_enriched_export_row() {
    let input: CaseInput = serde_json::from_str(CASE_JSON).unwrap();
    let row = input.into_export_row();

    assert_eq!(row.uuid, "ABC-123");
    assert_eq!(row.person, "Amara CONTEH");
    assert_eq!(row.country, "Mauvania");
    assert_eq!(row.sample_taken, Some(YesNoUnknown::Yes));
    assert_eq!(row.sample_dates, "01.01.2020, 05.01.2020");
    assert_eq!(row.lab_results, "Pending, Positive");
    assert_eq!(row.associated_with_outbreak, Some(true));
    assert_eq!(row.number_of_clinical_visits, Some(2));
    assert_eq!(row.admission_date.map(|d| d.to_string()), Some("2020-04-03".to_string()));
}

#[test]
fn projection_of_a_parsed_case_respects_the_audience() {
    let input: CaseInput = serde_json::from_str(CASE_JSON).unwrap();
    let row = input.into_export_row();

    let surveillance = project(&row, ExportAudience::CaseSurveillance);
    assert!(
        surveillance
            .iter()
            .any(|(name, value)| *name == "sample_dates" && value == "01.01.2020, 05.01.2020")
    );

    let management = project(&row, ExportAudience::CaseManagement);
    assert!(management.iter().all(|(name, _)| *name != "sample_dates"));
    assert!(
        management
            .iter()
            .any(|(name, value)| *name == "number_of_clinical_visits" && value == "2")
    );
}

#[test]
fn missing_optional_sections_default_to_empty() {
    let input: CaseInput = serde_json::from_str(
        r#"{"case":{"uuid":"X-1"},"person":{"first_name":"Sia","last_name":"Kamara"}}"#,
    )
    .unwrap();
    let row = input.into_export_row();
    assert_eq!(row.uuid, "X-1");
    assert_eq!(row.country, "");
    assert_eq!(row.sample_dates, "");
    assert_eq!(row.admitted_to_health_facility, None);
}
