pub mod attribute;
pub mod case;
pub mod contact;
pub mod country;
pub mod error;
pub mod visualization;

pub use attribute::{CaseAttribute, SubAttribute};
pub use case::{
    ApproximateAgeType, BurialConductor, CaseClassification, CaseOutcome, CaseRef, Disease,
    EducationType, InvestigationStatus, OccupationType, PathogenTestResult, PresentCondition, Sex,
    Vaccination, VaccinationInfoSource, YesNoUnknown,
};
pub use country::Country;
pub use error::{ModelError, Result};
pub use visualization::{ChartType, MapType, VisualizationType};

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn sub_attributes_belong_to_their_attribute() {
        assert!(SubAttribute::Region.belongs_to(CaseAttribute::RegionDistrict));
        assert!(SubAttribute::District.belongs_to(CaseAttribute::RegionDistrict));
        assert!(SubAttribute::EpiWeek.belongs_to(CaseAttribute::OnsetTime));
        assert!(!SubAttribute::Region.belongs_to(CaseAttribute::Sex));
        assert!(!SubAttribute::Year.belongs_to(CaseAttribute::RegionDistrict));
    }

    #[test]
    fn map_mode_only_permits_geographic_grouping() {
        for attribute in CaseAttribute::ALL {
            let valid = attribute.is_valid_for(VisualizationType::Map);
            assert_eq!(valid, attribute == CaseAttribute::RegionDistrict);
            assert!(attribute.is_valid_for(VisualizationType::Table));
            assert!(attribute.is_valid_for(VisualizationType::Chart));
        }
    }

    #[test]
    fn age_group_attributes_are_tagged() {
        assert!(CaseAttribute::AgeInterval5Years.is_age_group());
        assert!(CaseAttribute::AgeIntervalBasic.is_age_group());
        assert!(!CaseAttribute::Sex.is_age_group());
        assert!(!CaseAttribute::RegionDistrict.is_age_group());
    }

    #[test]
    fn attribute_parses_round_trip() {
        for attribute in CaseAttribute::ALL {
            let parsed = CaseAttribute::from_str(attribute.as_str()).unwrap();
            assert_eq!(parsed, attribute);
        }
        let error = CaseAttribute::from_str("HAIR_COLOR").unwrap_err();
        assert!(error.to_string().contains("HAIR_COLOR"));
    }

    #[test]
    fn chart_type_parses_hyphenated_input() {
        assert_eq!(
            ChartType::from_str("stacked-column").unwrap(),
            ChartType::StackedColumn
        );
        assert!(ChartType::from_str("donut").is_err());
    }

    #[test]
    fn vocabulary_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&CaseAttribute::AgeInterval5Years).unwrap();
        assert_eq!(json, "\"AGE_INTERVAL_5_YEARS\"");
        let json = serde_json::to_string(&VisualizationType::Table).unwrap();
        assert_eq!(json, "\"TABLE\"");
    }
}
