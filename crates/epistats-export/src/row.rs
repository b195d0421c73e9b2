//! The flat case export record.
//!
//! A [`CaseExportRow`] is built once per exported case by combining the
//! denormalized source parts (case, person, hospitalization, epi data,
//! vaccination). Composite display values are formatted at construction;
//! values joined from other entities (samples, lab results, country,
//! clinical counts) arrive later through the enrichment setters.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use epistats_model::{
    ApproximateAgeType, BurialConductor, CaseClassification, CaseOutcome, CaseRef, Country,
    Disease, EducationType, InvestigationStatus, OccupationType, PathogenTestResult,
    PresentCondition, Sex, Vaccination, VaccinationInfoSource, YesNoUnknown,
};

use crate::format::{
    age_group_from_age, build_burial_info, build_education, build_facility, build_occupation,
    build_phone, format_approximate_age, format_birthdate, format_disease, join_display,
    join_short_dates, person_caption,
};

/// Case-level source values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseDetails {
    pub uuid: String,
    #[serde(default)]
    pub epid_number: Option<String>,
    #[serde(default)]
    pub disease: Option<Disease>,
    #[serde(default)]
    pub disease_details: Option<String>,
    #[serde(default)]
    pub report_date: Option<NaiveDate>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub community: Option<String>,
    #[serde(default)]
    pub health_facility_name: Option<String>,
    #[serde(default)]
    pub health_facility_details: Option<String>,
    #[serde(default)]
    pub classification: Option<CaseClassification>,
    #[serde(default)]
    pub investigation_status: Option<InvestigationStatus>,
    #[serde(default)]
    pub outcome: Option<CaseOutcome>,
}

/// Person-level source values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonDetails {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub sex: Option<Sex>,
    #[serde(default)]
    pub approximate_age: Option<u32>,
    #[serde(default)]
    pub approximate_age_type: Option<ApproximateAgeType>,
    #[serde(default)]
    pub birth_day: Option<u32>,
    #[serde(default)]
    pub birth_month: Option<u32>,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub present_condition: Option<PresentCondition>,
    #[serde(default)]
    pub death_date: Option<NaiveDate>,
    #[serde(default)]
    pub burial_date: Option<NaiveDate>,
    #[serde(default)]
    pub burial_conductor: Option<BurialConductor>,
    #[serde(default)]
    pub burial_place_description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub phone_owner: Option<String>,
    #[serde(default)]
    pub education_type: Option<EducationType>,
    #[serde(default)]
    pub education_details: Option<String>,
    #[serde(default)]
    pub occupation_type: Option<OccupationType>,
    #[serde(default)]
    pub occupation_details: Option<String>,
    #[serde(default)]
    pub occupation_facility_name: Option<String>,
    #[serde(default)]
    pub occupation_facility_details: Option<String>,
}

/// Hospitalization source values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HospitalizationDetails {
    #[serde(default)]
    pub admitted_to_health_facility: Option<YesNoUnknown>,
    #[serde(default)]
    pub admission_date: Option<NaiveDate>,
    #[serde(default)]
    pub discharge_date: Option<NaiveDate>,
    #[serde(default)]
    pub left_against_advice: Option<YesNoUnknown>,
}

/// Epidemiological exposure source values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EpiDetails {
    #[serde(default)]
    pub traveled: Option<YesNoUnknown>,
    #[serde(default)]
    pub burial_attended: Option<YesNoUnknown>,
    #[serde(default)]
    pub direct_contact_confirmed_case: Option<YesNoUnknown>,
    #[serde(default)]
    pub contact_with_rodent: Option<YesNoUnknown>,
}

/// Vaccination source values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VaccinationDetails {
    #[serde(default)]
    pub status: Option<Vaccination>,
    #[serde(default)]
    pub doses: Option<String>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub info_source: Option<VaccinationInfoSource>,
}

/// One flat export record. Composite display fields are formatted once at
/// construction; the record is handed to the projection and serializer as
/// a read-only value afterwards.
#[derive(Debug, Clone, Default)]
pub struct CaseExportRow {
    pub country: String,
    pub uuid: String,
    pub epid_number: String,
    pub disease: String,
    pub person: String,
    pub sex: Option<Sex>,
    pub approximate_age: String,
    pub age_group: String,
    pub birthdate: String,
    pub report_date: Option<NaiveDate>,
    pub region: String,
    pub district: String,
    pub community: String,
    pub health_facility: String,
    pub initial_detection_place: String,
    pub case_classification: Option<CaseClassification>,
    pub investigation_status: Option<InvestigationStatus>,
    pub outcome: Option<CaseOutcome>,
    pub max_source_case_classification: Option<CaseClassification>,
    pub associated_with_outbreak: Option<bool>,
    pub admitted_to_health_facility: Option<YesNoUnknown>,
    pub admission_date: Option<NaiveDate>,
    pub discharge_date: Option<NaiveDate>,
    pub left_against_advice: Option<YesNoUnknown>,
    pub present_condition: Option<PresentCondition>,
    pub death_date: Option<NaiveDate>,
    pub burial_info: String,
    pub address: String,
    pub phone: String,
    pub education_type: String,
    pub occupation_type: String,
    pub traveled: Option<YesNoUnknown>,
    pub travel_history: String,
    pub burial_attended: Option<YesNoUnknown>,
    pub direct_contact_confirmed_case: Option<YesNoUnknown>,
    pub contact_with_rodent: Option<YesNoUnknown>,
    pub vaccination: Option<Vaccination>,
    pub vaccination_doses: String,
    pub vaccination_date: Option<NaiveDate>,
    pub vaccination_info_source: Option<VaccinationInfoSource>,
    pub sample_taken: Option<YesNoUnknown>,
    pub sample_dates: String,
    pub lab_results: String,
    pub symptoms: String,
    pub health_conditions: String,
    pub number_of_prescriptions: Option<u32>,
    pub number_of_treatments: Option<u32>,
    pub number_of_clinical_visits: Option<u32>,
}

impl CaseExportRow {
    /// Combines the source parts into one flat record, formatting the
    /// composite display values exactly once.
    pub fn new(
        case: CaseDetails,
        person: PersonDetails,
        hospitalization: HospitalizationDetails,
        epi: EpiDetails,
        vaccination: VaccinationDetails,
    ) -> Self {
        let occupation_facility = build_facility(
            person.occupation_facility_name.as_deref(),
            person.occupation_facility_details.as_deref(),
        );
        Self {
            country: String::new(),
            uuid: case.uuid,
            epid_number: case.epid_number.unwrap_or_default(),
            disease: format_disease(case.disease, case.disease_details.as_deref()),
            person: person_caption(&person.first_name, &person.last_name),
            sex: person.sex,
            approximate_age: format_approximate_age(
                person.approximate_age,
                person.approximate_age_type,
            ),
            age_group: age_group_from_age(person.approximate_age, person.approximate_age_type),
            birthdate: format_birthdate(person.birth_day, person.birth_month, person.birth_year),
            report_date: case.report_date,
            region: case.region.unwrap_or_default(),
            district: case.district.unwrap_or_default(),
            community: case.community.unwrap_or_default(),
            health_facility: build_facility(
                case.health_facility_name.as_deref(),
                case.health_facility_details.as_deref(),
            ),
            initial_detection_place: String::new(),
            case_classification: case.classification,
            investigation_status: case.investigation_status,
            outcome: case.outcome,
            max_source_case_classification: None,
            associated_with_outbreak: None,
            admitted_to_health_facility: hospitalization.admitted_to_health_facility,
            admission_date: hospitalization.admission_date,
            discharge_date: hospitalization.discharge_date,
            left_against_advice: hospitalization.left_against_advice,
            present_condition: person.present_condition,
            death_date: person.death_date,
            burial_info: build_burial_info(
                person.burial_date,
                person.burial_conductor,
                person.burial_place_description.as_deref(),
            ),
            address: String::new(),
            phone: build_phone(person.phone.as_deref(), person.phone_owner.as_deref()),
            education_type: build_education(
                person.education_type,
                person.education_details.as_deref(),
            ),
            occupation_type: build_occupation(
                person.occupation_type,
                person.occupation_details.as_deref(),
                &occupation_facility,
            ),
            traveled: epi.traveled,
            travel_history: String::new(),
            burial_attended: epi.burial_attended,
            direct_contact_confirmed_case: epi.direct_contact_confirmed_case,
            contact_with_rodent: epi.contact_with_rodent,
            vaccination: vaccination.status,
            vaccination_doses: vaccination.doses.unwrap_or_default(),
            vaccination_date: vaccination.date,
            vaccination_info_source: vaccination.info_source,
            sample_taken: None,
            sample_dates: String::new(),
            lab_results: String::new(),
            symptoms: String::new(),
            health_conditions: String::new(),
            number_of_prescriptions: None,
            number_of_treatments: None,
            number_of_clinical_visits: None,
        }
    }

    /// Minimal identity projection, independent of the export audience.
    pub fn to_reference(&self) -> CaseRef {
        CaseRef::new(self.uuid.clone(), self.person.clone())
    }

    pub fn set_country(&mut self, country: &Country) {
        self.country = country.display_name.clone();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn set_initial_detection_place(&mut self, place: impl Into<String>) {
        self.initial_detection_place = place.into();
    }

    pub fn set_travel_history(&mut self, travel_history: impl Into<String>) {
        self.travel_history = travel_history.into();
    }

    pub fn set_sample_taken(&mut self, sample_taken: YesNoUnknown) {
        self.sample_taken = Some(sample_taken);
    }

    /// Flattens the sample dates to a `", "`-joined display string in
    /// source order.
    pub fn set_sample_dates(&mut self, sample_dates: &[NaiveDate]) {
        self.sample_dates = join_short_dates(sample_dates);
    }

    /// Flattens the lab results to a `", "`-joined display string in
    /// source order.
    pub fn set_lab_results(&mut self, lab_results: &[PathogenTestResult]) {
        self.lab_results = join_display(lab_results);
    }

    pub fn set_max_source_case_classification(&mut self, classification: CaseClassification) {
        self.max_source_case_classification = Some(classification);
    }

    pub fn set_associated_with_outbreak(&mut self, associated: bool) {
        self.associated_with_outbreak = Some(associated);
    }

    pub fn set_symptoms(&mut self, symptoms: impl Into<String>) {
        self.symptoms = symptoms.into();
    }

    pub fn set_health_conditions(&mut self, health_conditions: impl Into<String>) {
        self.health_conditions = health_conditions.into();
    }

    pub fn set_number_of_prescriptions(&mut self, count: u32) {
        self.number_of_prescriptions = Some(count);
    }

    pub fn set_number_of_treatments(&mut self, count: u32) {
        self.number_of_treatments = Some(count);
    }

    pub fn set_number_of_clinical_visits(&mut self, count: u32) {
        self.number_of_clinical_visits = Some(count);
    }
}
