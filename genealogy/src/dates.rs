//! Calendar helpers: date construction, exact ages, and birthday keys.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::{GenealogyError, Result};

/// Leap year used to render month/day labels, so February 29 has a name.
const LABEL_REFERENCE_YEAR: i32 = 2000;

/// Build a calendar date, rejecting impossible ones (2001-02-29, month 13, ...).
pub fn ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(GenealogyError::InvalidDate { year, month, day })
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| GenealogyError::MalformedDate(input.to_string()))
}

/// Completed years between `birth` and `on`.
///
/// One year is subtracted when the birthday has not yet come round in the
/// year of `on`.
pub fn age_on(birth: NaiveDate, on: NaiveDate) -> i32 {
    let before_birthday = (on.month(), on.day()) < (birth.month(), birth.day());
    on.year() - birth.year() - i32::from(before_birthday)
}

/// "Month DD, YYYY", e.g. "March 15, 1980".
pub fn long_label(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Month and day of a birthday, ignoring the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct BirthdayKey {
    pub month: u32,
    pub day: u32,
}

impl BirthdayKey {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// "Month DD", e.g. "May 15" or "May 05".
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(LABEL_REFERENCE_YEAR, self.month, self.day) {
            Some(date) => date.format("%B %d").to_string(),
            None => format!("{:02}-{:02}", self.month, self.day),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_before_birthday_in_death_year() {
        let birth = ymd(1935, 10, 10).unwrap();
        let death = ymd(2005, 5, 25).unwrap();
        assert_eq!(age_on(birth, death), 69);
    }

    #[test]
    fn test_age_on_birthday() {
        let birth = ymd(1938, 2, 5).unwrap();
        assert_eq!(age_on(birth, ymd(2010, 2, 5).unwrap()), 72);
        assert_eq!(age_on(birth, ymd(2010, 2, 4).unwrap()), 71);
    }

    #[test]
    fn test_invalid_dates_rejected() {
        assert!(matches!(
            ymd(2001, 2, 29),
            Err(GenealogyError::InvalidDate { year: 2001, month: 2, day: 29 })
        ));
        assert!(ymd(2000, 13, 1).is_err());
        assert!(matches!(parse("1990/05/15"), Err(GenealogyError::MalformedDate(_))));
        assert_eq!(parse(" 1990-05-15 ").unwrap(), ymd(1990, 5, 15).unwrap());
    }

    #[test]
    fn test_labels() {
        assert_eq!(BirthdayKey::of(ymd(1980, 3, 15).unwrap()).label(), "March 15");
        assert_eq!(BirthdayKey::of(ymd(2010, 5, 5).unwrap()).label(), "May 05");
        assert_eq!(BirthdayKey::of(ymd(2004, 2, 29).unwrap()).label(), "February 29");
        assert_eq!(long_label(ymd(1980, 3, 15).unwrap()), "March 15, 1980");
    }

    #[test]
    fn test_keys_order_by_month_then_day() {
        let mut keys = vec![
            BirthdayKey { month: 12, day: 25 },
            BirthdayKey { month: 2, day: 5 },
            BirthdayKey { month: 2, day: 1 },
        ];
        keys.sort();
        assert_eq!(keys[0], BirthdayKey { month: 2, day: 1 });
        assert_eq!(keys[2], BirthdayKey { month: 12, day: 25 });
    }
}
