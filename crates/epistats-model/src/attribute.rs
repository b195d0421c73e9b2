use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::visualization::VisualizationType;

/// Grouping dimension of a statistics query.
///
/// Attributes fall into three families: report/onset time (refined by the
/// calendar sub-attributes), place (refined by region or district), and
/// person/case properties (no refinement). Map visualizations only support
/// the place attribute, since every map cell is a region or district.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CaseAttribute {
    OnsetTime,
    ReportTime,
    RegionDistrict,
    Sex,
    #[serde(rename = "AGE_INTERVAL_1_YEAR")]
    AgeInterval1Year,
    #[serde(rename = "AGE_INTERVAL_5_YEARS")]
    AgeInterval5Years,
    AgeIntervalChildrenCoarse,
    AgeIntervalChildrenFine,
    AgeIntervalChildrenMedium,
    AgeIntervalBasic,
    Disease,
    Classification,
    Outcome,
}

impl CaseAttribute {
    pub const ALL: [CaseAttribute; 13] = [
        CaseAttribute::OnsetTime,
        CaseAttribute::ReportTime,
        CaseAttribute::RegionDistrict,
        CaseAttribute::Sex,
        CaseAttribute::AgeInterval1Year,
        CaseAttribute::AgeInterval5Years,
        CaseAttribute::AgeIntervalChildrenCoarse,
        CaseAttribute::AgeIntervalChildrenFine,
        CaseAttribute::AgeIntervalChildrenMedium,
        CaseAttribute::AgeIntervalBasic,
        CaseAttribute::Disease,
        CaseAttribute::Classification,
        CaseAttribute::Outcome,
    ];

    /// Returns true for every age-interval attribute.
    ///
    /// Only [`CaseAttribute::AgeInterval5Years`] has matching population
    /// denominator data; the other intervals can group cases but cannot be
    /// joined against population figures.
    pub fn is_age_group(&self) -> bool {
        matches!(
            self,
            CaseAttribute::AgeInterval1Year
                | CaseAttribute::AgeInterval5Years
                | CaseAttribute::AgeIntervalChildrenCoarse
                | CaseAttribute::AgeIntervalChildrenFine
                | CaseAttribute::AgeIntervalChildrenMedium
                | CaseAttribute::AgeIntervalBasic
        )
    }

    /// The sub-attributes that refine this attribute. Empty for attributes
    /// without refinement (sex, age intervals, disease, ...).
    pub fn sub_attributes(&self) -> &'static [SubAttribute] {
        const TIME: &[SubAttribute] = &[
            SubAttribute::Year,
            SubAttribute::Quarter,
            SubAttribute::Month,
            SubAttribute::EpiWeek,
            SubAttribute::QuarterOfYear,
            SubAttribute::MonthOfYear,
            SubAttribute::EpiWeekOfYear,
            SubAttribute::DateRange,
        ];
        const PLACE: &[SubAttribute] = &[SubAttribute::Region, SubAttribute::District];
        match self {
            CaseAttribute::OnsetTime | CaseAttribute::ReportTime => TIME,
            CaseAttribute::RegionDistrict => PLACE,
            _ => &[],
        }
    }

    /// Whether this attribute can be selected as a grouping for the given
    /// visualization type. Maps permit only region/district granularity.
    pub fn is_valid_for(&self, visualization_type: VisualizationType) -> bool {
        match visualization_type {
            VisualizationType::Map => matches!(self, CaseAttribute::RegionDistrict),
            VisualizationType::Table | VisualizationType::Chart => true,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseAttribute::OnsetTime => "ONSET_TIME",
            CaseAttribute::ReportTime => "REPORT_TIME",
            CaseAttribute::RegionDistrict => "REGION_DISTRICT",
            CaseAttribute::Sex => "SEX",
            CaseAttribute::AgeInterval1Year => "AGE_INTERVAL_1_YEAR",
            CaseAttribute::AgeInterval5Years => "AGE_INTERVAL_5_YEARS",
            CaseAttribute::AgeIntervalChildrenCoarse => "AGE_INTERVAL_CHILDREN_COARSE",
            CaseAttribute::AgeIntervalChildrenFine => "AGE_INTERVAL_CHILDREN_FINE",
            CaseAttribute::AgeIntervalChildrenMedium => "AGE_INTERVAL_CHILDREN_MEDIUM",
            CaseAttribute::AgeIntervalBasic => "AGE_INTERVAL_BASIC",
            CaseAttribute::Disease => "DISEASE",
            CaseAttribute::Classification => "CLASSIFICATION",
            CaseAttribute::Outcome => "OUTCOME",
        }
    }
}

impl fmt::Display for CaseAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CaseAttribute {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        CaseAttribute::ALL
            .iter()
            .find(|attribute| attribute.as_str() == normalized)
            .copied()
            .ok_or_else(|| ModelError::unsupported("case attribute", s))
    }
}

/// Refinement of a primary grouping attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubAttribute {
    Year,
    Quarter,
    Month,
    EpiWeek,
    QuarterOfYear,
    MonthOfYear,
    EpiWeekOfYear,
    DateRange,
    Region,
    District,
}

impl SubAttribute {
    pub const ALL: [SubAttribute; 10] = [
        SubAttribute::Year,
        SubAttribute::Quarter,
        SubAttribute::Month,
        SubAttribute::EpiWeek,
        SubAttribute::QuarterOfYear,
        SubAttribute::MonthOfYear,
        SubAttribute::EpiWeekOfYear,
        SubAttribute::DateRange,
        SubAttribute::Region,
        SubAttribute::District,
    ];

    /// Whether this sub-attribute refines the given attribute.
    pub fn belongs_to(&self, attribute: CaseAttribute) -> bool {
        attribute.sub_attributes().contains(self)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubAttribute::Year => "YEAR",
            SubAttribute::Quarter => "QUARTER",
            SubAttribute::Month => "MONTH",
            SubAttribute::EpiWeek => "EPI_WEEK",
            SubAttribute::QuarterOfYear => "QUARTER_OF_YEAR",
            SubAttribute::MonthOfYear => "MONTH_OF_YEAR",
            SubAttribute::EpiWeekOfYear => "EPI_WEEK_OF_YEAR",
            SubAttribute::DateRange => "DATE_RANGE",
            SubAttribute::Region => "REGION",
            SubAttribute::District => "DISTRICT",
        }
    }
}

impl fmt::Display for SubAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubAttribute {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        SubAttribute::ALL
            .iter()
            .find(|sub| sub.as_str() == normalized)
            .copied()
            .ok_or_else(|| ModelError::unsupported("sub-attribute", s))
    }
}
