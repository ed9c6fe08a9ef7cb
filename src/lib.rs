//! Icelandic public holidays, business days and bank days.
//!
//! ```
//! use chrono::NaiveDate;
//! use icelandic_holidays::{get_holiday_name, is_bankday, is_businessday, HolidayName};
//!
//! let date = NaiveDate::from_ymd_opt(2013, 4, 25).unwrap();
//! assert_eq!(get_holiday_name(date), Some(HolidayName::FirstDayOfSummer));
//! assert!(!is_businessday(date));
//! assert!(is_bankday(NaiveDate::from_ymd_opt(2013, 12, 31).unwrap()));
//! ```
//!
//! The free functions derive the holidays of the date's year on every call.
//! [`Calendar`] precomputes a range of years for repeated lookups.

pub mod calendar;
pub mod config;
pub mod easter;
pub mod error;
pub mod holiday;

pub use calendar::{Calendar, HolidayCalendar, Iceland};
pub use config::CalendarConfig;
pub use easter::{easter_sunday, is_easter_sunday};
pub use error::{HolidayError, Result};
pub use holiday::{holidays_for_year, HalfHoliday, HolidayName, Rule, YearHolidays};

use chrono::NaiveDate;

/// Returns true if `date` is an Icelandic public holiday
pub fn is_holiday(date: NaiveDate) -> bool {
    Iceland.is_holiday(date)
}

/// Returns true if `date` is neither a weekend nor a holiday
pub fn is_businessday(date: NaiveDate) -> bool {
    Iceland.is_business_day(date)
}

/// Returns true if banks are open on `date`
pub fn is_bankday(date: NaiveDate) -> bool {
    Iceland.is_bank_day(date)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    Iceland.is_weekend(date)
}

/// Name of the holiday on `date`, `None` if it is not a holiday
pub fn get_holiday_name(date: NaiveDate) -> Option<HolidayName> {
    Iceland.holiday_name(date)
}

pub fn is_half_holiday(date: NaiveDate) -> bool {
    Iceland.is_half_holiday(date)
}

pub fn get_half_holiday_name(date: NaiveDate) -> Option<HalfHoliday> {
    Iceland.half_holiday(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn from_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_holiday_names_2013() {
        let holidays = holidays_for_year(2013).unwrap();
        for (name, date) in holidays.iter() {
            assert!(is_holiday(date));
            assert!(!is_businessday(date));
            assert_eq!(get_holiday_name(date), Some(name));
        }
        assert_eq!(get_holiday_name(from_ymd(2013, 1, 8)), None);
        assert_eq!(get_holiday_name(from_ymd(2013, 12, 31)), None);
    }

    #[test]
    fn test_bankday() {
        assert!(is_bankday(from_ymd(2013, 12, 31)));
        assert!(is_bankday(from_ymd(2014, 12, 31)));
        assert!(is_bankday(from_ymd(2015, 12, 31)));
        assert!(!is_bankday(from_ymd(2016, 12, 31)));
        assert!(is_weekend(from_ymd(2016, 12, 31)));
    }

    #[test]
    fn test_half_holiday() {
        assert!(is_half_holiday(from_ymd(2013, 12, 24)));
        assert_eq!(
            get_half_holiday_name(from_ymd(2013, 12, 31)),
            Some(HalfHoliday::NewYearsEve)
        );
        assert!(is_businessday(from_ymd(2013, 12, 24)));
    }

    #[test]
    fn test_time_of_day_ignored() {
        let evening: NaiveDateTime = from_ymd(2013, 6, 17).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(get_holiday_name(evening.date()), Some(HolidayName::June17th));
    }

    #[test]
    fn test_idempotent() {
        let date = from_ymd(2013, 5, 9);
        for _ in 0..3 {
            assert_eq!(get_holiday_name(date), Some(HolidayName::AscensionOfJesus));
            assert!(!is_bankday(date));
        }
    }
}
