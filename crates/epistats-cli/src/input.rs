//! JSON input format for the `export` command.
//!
//! One [`CaseInput`] per case: the denormalized source parts consumed by
//! the export row constructor, plus the values that arrive through the
//! enrichment step (country, samples, lab results, clinical counts).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use epistats_export::{
    CaseDetails, CaseExportRow, EpiDetails, HospitalizationDetails, PersonDetails,
    VaccinationDetails,
};
use epistats_model::{CaseClassification, Country, PathogenTestResult, YesNoUnknown};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseInput {
    pub case: CaseDetails,
    pub person: PersonDetails,
    #[serde(default)]
    pub hospitalization: HospitalizationDetails,
    #[serde(default)]
    pub epi: EpiDetails,
    #[serde(default)]
    pub vaccination: VaccinationDetails,
    #[serde(default)]
    pub country: Option<Country>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub initial_detection_place: Option<String>,
    #[serde(default)]
    pub travel_history: Option<String>,
    #[serde(default)]
    pub sample_taken: Option<YesNoUnknown>,
    #[serde(default)]
    pub sample_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub lab_results: Vec<PathogenTestResult>,
    #[serde(default)]
    pub max_source_case_classification: Option<CaseClassification>,
    #[serde(default)]
    pub associated_with_outbreak: Option<bool>,
    #[serde(default)]
    pub symptoms: Option<String>,
    #[serde(default)]
    pub health_conditions: Option<String>,
    #[serde(default)]
    pub number_of_prescriptions: Option<u32>,
    #[serde(default)]
    pub number_of_treatments: Option<u32>,
    #[serde(default)]
    pub number_of_clinical_visits: Option<u32>,
}

impl CaseInput {
    /// Builds the flat export row: construction from the source parts,
    /// then enrichment with the values joined from other entities.
    pub fn into_export_row(self) -> CaseExportRow {
        let mut row = CaseExportRow::new(
            self.case,
            self.person,
            self.hospitalization,
            self.epi,
            self.vaccination,
        );
        if let Some(country) = &self.country {
            row.set_country(country);
        }
        if let Some(address) = self.address {
            row.set_address(address);
        }
        if let Some(place) = self.initial_detection_place {
            row.set_initial_detection_place(place);
        }
        if let Some(history) = self.travel_history {
            row.set_travel_history(history);
        }
        if let Some(sample_taken) = self.sample_taken {
            row.set_sample_taken(sample_taken);
        }
        if !self.sample_dates.is_empty() {
            row.set_sample_dates(&self.sample_dates);
        }
        if !self.lab_results.is_empty() {
            row.set_lab_results(&self.lab_results);
        }
        if let Some(classification) = self.max_source_case_classification {
            row.set_max_source_case_classification(classification);
        }
        if let Some(associated) = self.associated_with_outbreak {
            row.set_associated_with_outbreak(associated);
        }
        if let Some(symptoms) = self.symptoms {
            row.set_symptoms(symptoms);
        }
        if let Some(conditions) = self.health_conditions {
            row.set_health_conditions(conditions);
        }
        if let Some(count) = self.number_of_prescriptions {
            row.set_number_of_prescriptions(count);
        }
        if let Some(count) = self.number_of_treatments {
            row.set_number_of_treatments(count);
        }
        if let Some(count) = self.number_of_clinical_visits {
            row.set_number_of_clinical_visits(count);
        }
        row
    }
}
