//! Tests for the CSV serialization of export rows.

use chrono::NaiveDate;

use epistats_export::{
    CaseDetails, CaseExportRow, EpiDetails, ExportAudience, HospitalizationDetails,
    PersonDetails, VaccinationDetails, column_names, csv_string, write_csv,
};
use epistats_model::{Disease, Sex, YesNoUnknown};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn exported_row() -> CaseExportRow {
    let case = CaseDetails {
        uuid: "CASE-UUID-1".to_string(),
        epid_number: Some("SLE-FWT-2020-007".to_string()),
        disease: Some(Disease::Lassa),
        disease_details: None,
        report_date: Some(date(2020, 2, 14)),
        region: Some("Western Area".to_string()),
        district: Some("Freetown".to_string()),
        community: None,
        health_facility_name: Some("Connaught Hospital".to_string()),
        health_facility_details: None,
        classification: None,
        investigation_status: None,
        outcome: None,
    };
    let person = PersonDetails {
        first_name: "Fatmata".to_string(),
        last_name: "Bangura".to_string(),
        sex: Some(Sex::Female),
        approximate_age: Some(27),
        approximate_age_type: None,
        birth_day: None,
        birth_month: None,
        birth_year: None,
        present_condition: None,
        death_date: None,
        burial_date: None,
        burial_conductor: None,
        burial_place_description: None,
        phone: None,
        phone_owner: None,
        education_type: None,
        education_details: None,
        occupation_type: None,
        occupation_details: None,
        occupation_facility_name: None,
        occupation_facility_details: None,
    };
    let mut row = CaseExportRow::new(
        case,
        person,
        HospitalizationDetails::default(),
        EpiDetails::default(),
        VaccinationDetails::default(),
    );
    row.set_sample_taken(YesNoUnknown::Yes);
    row.set_sample_dates(&[date(2020, 1, 1), date(2020, 1, 5)]);
    row
}

#[test]
fn header_row_matches_the_visible_column_names() {
    for audience in ExportAudience::ALL {
        let csv = csv_string(audience, &[]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], column_names(audience).join(","));
    }
}

#[test]
fn records_are_projected_per_audience() {
    let row = exported_row();

    let surveillance = csv_string(ExportAudience::CaseSurveillance, &[row.clone()]).unwrap();
    let lines: Vec<&str> = surveillance.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("CASE-UUID-1"));
    assert!(lines[1].contains("Fatmata BANGURA"));
    assert!(lines[1].contains("Lassa Fever"));
    // Joined list values keep their separator inside one quoted cell.
    assert!(lines[1].contains("\"01.01.2020, 05.01.2020\""));

    let management = csv_string(ExportAudience::CaseManagement, &[row]).unwrap();
    let lines: Vec<&str> = management.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("CASE-UUID-1"));
    assert!(!management.contains("01.01.2020"));
}

#[test]
fn record_cell_count_matches_the_header() {
    let row = exported_row();
    for audience in ExportAudience::ALL {
        let csv = csv_string(audience, &[row.clone()]).unwrap();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(csv.as_bytes());
        let headers = reader.headers().unwrap().len();
        let record = reader.records().next().unwrap().unwrap();
        assert_eq!(record.len(), headers);
        assert_eq!(headers, column_names(audience).len());
    }
}

#[test]
fn write_csv_reports_the_record_count() {
    let rows = vec![exported_row(), exported_row()];
    let mut buffer = Vec::new();
    let written = write_csv(&mut buffer, ExportAudience::CaseSurveillance, &rows).unwrap();
    assert_eq!(written, 2);
    assert!(!buffer.is_empty());
}
