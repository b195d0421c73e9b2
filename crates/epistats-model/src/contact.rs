//! Contact follow-up window resolution.
//!
//! A contact's follow-up window starts at the last contact with the source
//! case when that date is known, otherwise at the report date. It ends at
//! the explicit follow-up-until date when one has been set.

use chrono::NaiveDate;

/// Maximum number of days a reported last-contact date may lie before the
/// report date and still be accepted during data entry.
pub const ALLOWED_CONTACT_DATE_OFFSET_DAYS: i64 = 30;

/// Start of the follow-up window.
pub fn follow_up_start_date(
    last_contact_date: Option<NaiveDate>,
    report_date: NaiveDate,
) -> NaiveDate {
    last_contact_date.unwrap_or(report_date)
}

/// End of the follow-up window. An explicit follow-up-until date wins over
/// the derived start date.
pub fn follow_up_end_date(
    last_contact_date: Option<NaiveDate>,
    report_date: NaiveDate,
    follow_up_until: Option<NaiveDate>,
) -> NaiveDate {
    follow_up_until.unwrap_or_else(|| follow_up_start_date(last_contact_date, report_date))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn start_prefers_last_contact_date() {
        let last_contact = date(2020, 3, 1);
        let report = date(2020, 3, 10);
        assert_eq!(follow_up_start_date(Some(last_contact), report), last_contact);
        assert_eq!(follow_up_start_date(None, report), report);
    }

    #[test]
    fn end_prefers_follow_up_until() {
        let last_contact = date(2020, 3, 1);
        let report = date(2020, 3, 10);
        let until = date(2020, 3, 22);
        assert_eq!(
            follow_up_end_date(Some(last_contact), report, Some(until)),
            until
        );
        assert_eq!(
            follow_up_end_date(Some(last_contact), report, None),
            last_contact
        );
        assert_eq!(follow_up_end_date(None, report, None), report);
    }
}
