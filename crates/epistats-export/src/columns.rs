//! Declarative export column table.
//!
//! Every export cell is described by one [`ExportColumn`]: the header
//! name, an order index that fixes its position, the audiences that
//! receive it, and an accessor producing the display value. The table is
//! the single source of truth for which columns exist. A column missing
//! from an audience's set is absent from that audience's output entirely,
//! not blanked, so the column count differs between audiences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use epistats_model::ModelError;

use crate::format::{display_or_empty, format_optional_date};
use crate::row::CaseExportRow;

/// Consumer profile of a generated export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportAudience {
    CaseSurveillance,
    CaseManagement,
}

impl ExportAudience {
    pub const ALL: [ExportAudience; 2] = [
        ExportAudience::CaseSurveillance,
        ExportAudience::CaseManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportAudience::CaseSurveillance => "Case surveillance",
            ExportAudience::CaseManagement => "Case management",
        }
    }
}

impl fmt::Display for ExportAudience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ExportAudience {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().replace('-', "_").as_str() {
            "SURVEILLANCE" | "CASE_SURVEILLANCE" => Ok(ExportAudience::CaseSurveillance),
            "MANAGEMENT" | "CASE_MANAGEMENT" => Ok(ExportAudience::CaseManagement),
            _ => Err(ModelError::unsupported("export audience", s)),
        }
    }
}

type Accessor = fn(&CaseExportRow) -> String;

/// One column of the flat case export.
pub struct ExportColumn {
    pub name: &'static str,
    /// Position index; ascending, gaps allowed, unique within the visible
    /// set of each audience.
    pub order: u16,
    pub audiences: &'static [ExportAudience],
    accessor: Accessor,
}

impl ExportColumn {
    pub fn is_visible_for(&self, audience: ExportAudience) -> bool {
        self.audiences.contains(&audience)
    }

    pub fn value(&self, row: &CaseExportRow) -> String {
        (self.accessor)(row)
    }
}

impl fmt::Debug for ExportColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportColumn")
            .field("name", &self.name)
            .field("order", &self.order)
            .field("audiences", &self.audiences)
            .finish()
    }
}

const BOTH: &[ExportAudience] = &[
    ExportAudience::CaseSurveillance,
    ExportAudience::CaseManagement,
];
const SURVEILLANCE: &[ExportAudience] = &[ExportAudience::CaseSurveillance];
const MANAGEMENT: &[ExportAudience] = &[ExportAudience::CaseManagement];

/// The full case export column table. Order indices are grouped in tens by
/// topic (identity, person, place, classification, hospitalization,
/// condition, contact details, epi data, vaccination, samples, clinical)
/// which leaves room to slot new columns in without renumbering.
pub static CASE_EXPORT_COLUMNS: &[ExportColumn] = &[
    ExportColumn {
        name: "country",
        order: 0,
        audiences: BOTH,
        accessor: |row| row.country.clone(),
    },
    ExportColumn {
        name: "uuid",
        order: 2,
        audiences: BOTH,
        accessor: |row| row.uuid.clone(),
    },
    ExportColumn {
        name: "epid_number",
        order: 3,
        audiences: BOTH,
        accessor: |row| row.epid_number.clone(),
    },
    ExportColumn {
        name: "disease",
        order: 4,
        audiences: BOTH,
        accessor: |row| row.disease.clone(),
    },
    ExportColumn {
        name: "person",
        order: 10,
        audiences: BOTH,
        accessor: |row| row.person.clone(),
    },
    ExportColumn {
        name: "sex",
        order: 11,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.sex.as_ref()),
    },
    ExportColumn {
        name: "approximate_age",
        order: 12,
        audiences: BOTH,
        accessor: |row| row.approximate_age.clone(),
    },
    ExportColumn {
        name: "age_group",
        order: 13,
        audiences: BOTH,
        accessor: |row| row.age_group.clone(),
    },
    ExportColumn {
        name: "birthdate",
        order: 14,
        audiences: BOTH,
        accessor: |row| row.birthdate.clone(),
    },
    ExportColumn {
        name: "report_date",
        order: 20,
        audiences: BOTH,
        accessor: |row| format_optional_date(row.report_date),
    },
    ExportColumn {
        name: "region",
        order: 21,
        audiences: BOTH,
        accessor: |row| row.region.clone(),
    },
    ExportColumn {
        name: "district",
        order: 22,
        audiences: BOTH,
        accessor: |row| row.district.clone(),
    },
    ExportColumn {
        name: "community",
        order: 23,
        audiences: BOTH,
        accessor: |row| row.community.clone(),
    },
    ExportColumn {
        name: "health_facility",
        order: 24,
        audiences: BOTH,
        accessor: |row| row.health_facility.clone(),
    },
    ExportColumn {
        name: "initial_detection_place",
        order: 25,
        audiences: BOTH,
        accessor: |row| row.initial_detection_place.clone(),
    },
    ExportColumn {
        name: "case_classification",
        order: 30,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.case_classification.as_ref()),
    },
    ExportColumn {
        name: "investigation_status",
        order: 31,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.investigation_status.as_ref()),
    },
    ExportColumn {
        name: "outcome",
        order: 32,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.outcome.as_ref()),
    },
    ExportColumn {
        name: "max_source_case_classification",
        order: 33,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.max_source_case_classification.as_ref()),
    },
    ExportColumn {
        name: "associated_with_outbreak",
        order: 34,
        audiences: SURVEILLANCE,
        accessor: |row| match row.associated_with_outbreak {
            Some(true) => "Yes".to_string(),
            Some(false) => "No".to_string(),
            None => String::new(),
        },
    },
    ExportColumn {
        name: "admitted_to_health_facility",
        order: 40,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.admitted_to_health_facility.as_ref()),
    },
    ExportColumn {
        name: "admission_date",
        order: 41,
        audiences: BOTH,
        accessor: |row| format_optional_date(row.admission_date),
    },
    ExportColumn {
        name: "discharge_date",
        order: 42,
        audiences: BOTH,
        accessor: |row| format_optional_date(row.discharge_date),
    },
    ExportColumn {
        name: "left_against_advice",
        order: 43,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.left_against_advice.as_ref()),
    },
    ExportColumn {
        name: "present_condition",
        order: 50,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.present_condition.as_ref()),
    },
    ExportColumn {
        name: "death_date",
        order: 51,
        audiences: SURVEILLANCE,
        accessor: |row| format_optional_date(row.death_date),
    },
    ExportColumn {
        name: "burial_info",
        order: 52,
        audiences: SURVEILLANCE,
        accessor: |row| row.burial_info.clone(),
    },
    ExportColumn {
        name: "address",
        order: 60,
        audiences: BOTH,
        accessor: |row| row.address.clone(),
    },
    ExportColumn {
        name: "phone",
        order: 61,
        audiences: BOTH,
        accessor: |row| row.phone.clone(),
    },
    ExportColumn {
        name: "education_type",
        order: 62,
        audiences: BOTH,
        accessor: |row| row.education_type.clone(),
    },
    ExportColumn {
        name: "occupation_type",
        order: 63,
        audiences: BOTH,
        accessor: |row| row.occupation_type.clone(),
    },
    ExportColumn {
        name: "travel_history",
        order: 70,
        audiences: SURVEILLANCE,
        accessor: |row| row.travel_history.clone(),
    },
    ExportColumn {
        name: "burial_attended",
        order: 71,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.burial_attended.as_ref()),
    },
    ExportColumn {
        name: "direct_contact_confirmed_case",
        order: 72,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.direct_contact_confirmed_case.as_ref()),
    },
    ExportColumn {
        name: "contact_with_rodent",
        order: 73,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.contact_with_rodent.as_ref()),
    },
    ExportColumn {
        name: "vaccination",
        order: 80,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.vaccination.as_ref()),
    },
    ExportColumn {
        name: "vaccination_doses",
        order: 81,
        audiences: BOTH,
        accessor: |row| row.vaccination_doses.clone(),
    },
    ExportColumn {
        name: "vaccination_date",
        order: 82,
        audiences: BOTH,
        accessor: |row| format_optional_date(row.vaccination_date),
    },
    ExportColumn {
        name: "vaccination_info_source",
        order: 83,
        audiences: BOTH,
        accessor: |row| display_or_empty(row.vaccination_info_source.as_ref()),
    },
    ExportColumn {
        name: "sample_taken",
        order: 100,
        audiences: SURVEILLANCE,
        accessor: |row| display_or_empty(row.sample_taken.as_ref()),
    },
    ExportColumn {
        name: "sample_dates",
        order: 101,
        audiences: SURVEILLANCE,
        accessor: |row| row.sample_dates.clone(),
    },
    ExportColumn {
        name: "lab_results",
        order: 102,
        audiences: SURVEILLANCE,
        accessor: |row| row.lab_results.clone(),
    },
    ExportColumn {
        name: "symptoms",
        order: 110,
        audiences: BOTH,
        accessor: |row| row.symptoms.clone(),
    },
    ExportColumn {
        name: "health_conditions",
        order: 111,
        audiences: MANAGEMENT,
        accessor: |row| row.health_conditions.clone(),
    },
    ExportColumn {
        name: "number_of_prescriptions",
        order: 112,
        audiences: MANAGEMENT,
        accessor: |row| count_or_empty(row.number_of_prescriptions),
    },
    ExportColumn {
        name: "number_of_treatments",
        order: 113,
        audiences: MANAGEMENT,
        accessor: |row| count_or_empty(row.number_of_treatments),
    },
    ExportColumn {
        name: "number_of_clinical_visits",
        order: 114,
        audiences: MANAGEMENT,
        accessor: |row| count_or_empty(row.number_of_clinical_visits),
    },
];

fn count_or_empty(count: Option<u32>) -> String {
    count.map(|value| value.to_string()).unwrap_or_default()
}

/// The columns an audience receives, in final output order. The sort is
/// stable, so equal order indices keep their declaration order.
pub fn visible_columns(audience: ExportAudience) -> Vec<&'static ExportColumn> {
    let mut columns: Vec<&ExportColumn> = CASE_EXPORT_COLUMNS
        .iter()
        .filter(|column| column.is_visible_for(audience))
        .collect();
    columns.sort_by_key(|column| column.order);
    columns
}

/// Header names for an audience, in final output order.
pub fn column_names(audience: ExportAudience) -> Vec<&'static str> {
    visible_columns(audience)
        .into_iter()
        .map(|column| column.name)
        .collect()
}

/// Projects one row to ordered (column name, display value) pairs for the
/// given audience.
pub fn project(row: &CaseExportRow, audience: ExportAudience) -> Vec<(&'static str, String)> {
    visible_columns(audience)
        .into_iter()
        .map(|column| (column.name, column.value(row)))
        .collect()
}
