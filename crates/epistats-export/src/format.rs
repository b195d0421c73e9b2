//! Display formatting for export values.
//!
//! Export cells are plain strings. Everything here turns structured source
//! values into the short display forms used across generated files: dates
//! as `dd.mm.yyyy`, list values joined with `", "`, missing values as the
//! empty string (never a literal "null").

use std::fmt;

use chrono::NaiveDate;

use epistats_model::{
    ApproximateAgeType, BurialConductor, Disease, EducationType, OccupationType,
};

/// Short date format used in export cells.
pub fn format_short_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_short_date).unwrap_or_default()
}

/// Joins dates with `", "` in source order; an empty list yields "".
pub fn join_short_dates(dates: &[NaiveDate]) -> String {
    dates
        .iter()
        .map(|date| format_short_date(*date))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Joins displayable values with `", "` in source order.
pub fn join_display<T: fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn display_or_empty<T: fmt::Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Person caption: first name as entered, last name upper-cased.
pub fn person_caption(first_name: &str, last_name: &str) -> String {
    format!("{} {}", first_name.trim(), last_name.trim().to_uppercase())
        .trim()
        .to_string()
}

/// Approximate age display: plain number for years, unit-qualified for
/// anything else ("5 Months").
pub fn format_approximate_age(
    age: Option<u32>,
    age_type: Option<ApproximateAgeType>,
) -> String {
    match (age, age_type) {
        (None, _) => String::new(),
        (Some(age), None | Some(ApproximateAgeType::Years)) => age.to_string(),
        (Some(age), Some(age_type)) => format!("{age} {age_type}"),
    }
}

/// Five-year age bucket for an approximate age ("30-34", "120+"). Ages
/// captured in months fall into the first bucket unless they exceed a
/// year boundary.
pub fn age_group_from_age(age: Option<u32>, age_type: Option<ApproximateAgeType>) -> String {
    let Some(age) = age else {
        return String::new();
    };
    let years = match age_type {
        Some(ApproximateAgeType::Months) => age / 12,
        _ => age,
    };
    if years >= 120 {
        return "120+".to_string();
    }
    let lower = years / 5 * 5;
    format!("{}-{}", lower, lower + 4)
}

/// Birthdate display from the separately captured components. Missing
/// components render as placeholders; a fully unknown birthdate renders
/// as the empty string.
pub fn format_birthdate(day: Option<u32>, month: Option<u32>, year: Option<i32>) -> String {
    if day.is_none() && month.is_none() && year.is_none() {
        return String::new();
    }
    let day = day.map(|value| format!("{value:02}")).unwrap_or_else(|| "??".to_string());
    let month = month
        .map(|value| format!("{value:02}"))
        .unwrap_or_else(|| "??".to_string());
    let year = year
        .map(|value| value.to_string())
        .unwrap_or_else(|| "????".to_string());
    format!("{day}.{month}.{year}")
}

/// Combined burial information: date, conductor and place description,
/// skipping whatever was not captured.
pub fn build_burial_info(
    burial_date: Option<NaiveDate>,
    burial_conductor: Option<BurialConductor>,
    burial_place_description: Option<&str>,
) -> String {
    let mut parts = Vec::new();
    if let Some(date) = burial_date {
        parts.push(format_short_date(date));
    }
    if let Some(conductor) = burial_conductor {
        parts.push(conductor.to_string());
    }
    if let Some(place) = burial_place_description {
        if !place.trim().is_empty() {
            parts.push(place.trim().to_string());
        }
    }
    parts.join(", ")
}

/// Phone number with the owner appended when the phone belongs to someone
/// else ("+230555123 (father)").
pub fn build_phone(phone: Option<&str>, phone_owner: Option<&str>) -> String {
    match (non_empty(phone), non_empty(phone_owner)) {
        (Some(phone), Some(owner)) => format!("{phone} ({owner})"),
        (Some(phone), None) => phone.to_string(),
        (None, Some(owner)) => owner.to_string(),
        (None, None) => String::new(),
    }
}

/// Education display; free-text details qualify the catch-all type.
pub fn build_education(education: Option<EducationType>, details: Option<&str>) -> String {
    compose_typed(education.map(|e| e.to_string()), education == Some(EducationType::Other), details)
}

/// Occupation display with the occupation facility appended when known.
pub fn build_occupation(
    occupation: Option<OccupationType>,
    details: Option<&str>,
    facility: &str,
) -> String {
    let base = compose_typed(
        occupation.map(|o| o.to_string()),
        occupation == Some(OccupationType::Other),
        details,
    );
    match (base.is_empty(), facility.is_empty()) {
        (false, false) => format!("{base}, {facility}"),
        (false, true) => base,
        (true, false) => facility.to_string(),
        (true, true) => String::new(),
    }
}

/// Facility display: name plus free-text details for "other" entries.
pub fn build_facility(name: Option<&str>, details: Option<&str>) -> String {
    match (non_empty(name), non_empty(details)) {
        (Some(name), Some(details)) => format!("{name} ({details})"),
        (Some(name), None) => name.to_string(),
        (None, Some(details)) => details.to_string(),
        (None, None) => String::new(),
    }
}

/// Disease display; the catch-all entries defer to the free-text details.
pub fn format_disease(disease: Option<Disease>, details: Option<&str>) -> String {
    match disease {
        Some(Disease::Other) | Some(Disease::Undefined) => non_empty(details)
            .map(str::to_string)
            .unwrap_or_else(|| display_or_empty(disease.as_ref())),
        Some(disease) => disease.to_string(),
        None => String::new(),
    }
}

fn compose_typed(label: Option<String>, is_catch_all: bool, details: Option<&str>) -> String {
    match label {
        Some(label) => match (is_catch_all, non_empty(details)) {
            (true, Some(details)) => format!("{label} ({details})"),
            _ => label,
        },
        None => String::new(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn joins_dates_with_comma_and_space() {
        let dates = [date(2020, 1, 1), date(2020, 1, 5)];
        assert_eq!(join_short_dates(&dates), "01.01.2020, 05.01.2020");
        assert_eq!(join_short_dates(&[]), "");
    }

    #[test]
    fn approximate_age_only_qualifies_months() {
        assert_eq!(
            format_approximate_age(Some(34), Some(ApproximateAgeType::Years)),
            "34"
        );
        assert_eq!(
            format_approximate_age(Some(5), Some(ApproximateAgeType::Months)),
            "5 Months"
        );
        assert_eq!(format_approximate_age(None, None), "");
    }

    #[test]
    fn age_groups_are_five_year_buckets() {
        assert_eq!(age_group_from_age(Some(0), None), "0-4");
        assert_eq!(age_group_from_age(Some(34), None), "30-34");
        assert_eq!(age_group_from_age(Some(125), None), "120+");
        assert_eq!(
            age_group_from_age(Some(7), Some(ApproximateAgeType::Months)),
            "0-4"
        );
        assert_eq!(age_group_from_age(None, None), "");
    }

    #[test]
    fn birthdate_uses_placeholders_for_partial_dates() {
        assert_eq!(format_birthdate(Some(3), Some(7), Some(1987)), "03.07.1987");
        assert_eq!(format_birthdate(None, Some(7), Some(1987)), "??.07.1987");
        assert_eq!(format_birthdate(None, None, Some(1987)), "??.??.1987");
        assert_eq!(format_birthdate(None, None, None), "");
    }

    #[test]
    fn burial_info_skips_missing_parts() {
        assert_eq!(
            build_burial_info(
                Some(date(2020, 2, 10)),
                Some(BurialConductor::OutbreakTeam),
                Some("village cemetery"),
            ),
            "10.02.2020, Outbreak burial team, village cemetery"
        );
        assert_eq!(build_burial_info(None, None, None), "");
    }

    #[test]
    fn phone_appends_the_owner() {
        assert_eq!(
            build_phone(Some("+230555123"), Some("father")),
            "+230555123 (father)"
        );
        assert_eq!(build_phone(Some("+230555123"), None), "+230555123");
        assert_eq!(build_phone(None, None), "");
    }

    #[test]
    fn catch_all_types_carry_their_details() {
        assert_eq!(
            build_education(Some(EducationType::Other), Some("vocational school")),
            "Other (vocational school)"
        );
        assert_eq!(
            build_education(Some(EducationType::Primary), Some("ignored")),
            "Primary"
        );
        assert_eq!(
            build_occupation(Some(OccupationType::HealthcareWorker), None, "District hospital"),
            "Healthcare worker, District hospital"
        );
        assert_eq!(
            format_disease(Some(Disease::Other), Some("rift valley fever")),
            "rift valley fever"
        );
        assert_eq!(format_disease(Some(Disease::Cholera), None), "Cholera");
    }

    #[test]
    fn person_caption_uppercases_the_last_name() {
        assert_eq!(person_caption("Amara", "Conteh"), "Amara CONTEH");
        assert_eq!(person_caption("Amara", ""), "Amara");
    }
}
