//! Gregorian Easter Sunday, computed with Gauss's remainder algorithm.

use crate::error::{HolidayError, Result};
use chrono::{Datelike, NaiveDate};

/// Month and day of Easter Sunday in the Gregorian calendar.
///
/// `a` is the position in the 19 year Metonic cycle (golden number - 1), `p`
/// and `q` are the lunar and solar century corrections. `d` counts the days
/// from March 21 to the paschal full moon and `e` the days from there to the
/// following Sunday, so Easter falls `d + e` days after March 22.
fn easter_month_day(year: i32) -> (u32, u32) {
    let a = year.rem_euclid(19);
    let b = year.rem_euclid(4);
    let c = year.rem_euclid(7);
    let k = year.div_euclid(100);
    let p = (13 + 8 * k).div_euclid(25);
    let q = k.div_euclid(4);
    let m = (15 - p + k - q).rem_euclid(30);
    let n = (4 + k - q).rem_euclid(7);
    let d = (19 * a + m).rem_euclid(30);
    let e = (2 * b + 4 * c + 6 * d + n).rem_euclid(7);

    // April 26 is never Easter
    if d == 29 && e == 6 {
        return (4, 19);
    }
    // April 25 moves back a week when the golden number is above 11
    if d == 28 && e == 6 && a > 10 {
        return (4, 18);
    }
    let offset = (d + e) as u32;
    if offset < 10 {
        (3, 22 + offset)
    } else {
        (4, offset - 9)
    }
}

/// Returns Easter Sunday of `year`.
///
/// Years before the Gregorian reform (1583) are computed proleptically.
pub fn easter_sunday(year: i32) -> Result<NaiveDate> {
    let (month, day) = easter_month_day(year);
    NaiveDate::from_ymd_opt(year, month, day).ok_or(HolidayError::YearOutOfRange { year })
}

/// Returns true if `date` is Easter Sunday of its year
pub fn is_easter_sunday(date: NaiveDate) -> bool {
    let (month, day) = easter_month_day(date.year());
    date.month() == month && date.day() == day
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Weekday};

    fn from_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_known_easter_sundays() {
        let sundays = vec![
            from_ymd(2013, 3, 31),
            from_ymd(2008, 3, 23),
            from_ymd(1736, 4, 1),
            from_ymd(1709, 3, 31),
            from_ymd(1734, 4, 25),
            from_ymd(1784, 4, 11),
            from_ymd(1710, 4, 20),
            from_ymd(2215, 4, 16),
            from_ymd(2240, 4, 12),
            from_ymd(2292, 4, 10),
        ];
        for sunday in sundays {
            assert_eq!(easter_sunday(sunday.year()).unwrap(), sunday);
            assert!(is_easter_sunday(sunday), "{} wasn't an easter sunday", sunday);
        }
    }

    #[test]
    fn test_correction_rules() {
        // d = 29, e = 6
        assert_eq!(easter_sunday(1981).unwrap(), from_ymd(1981, 4, 19));
        assert_eq!(easter_sunday(2076).unwrap(), from_ymd(2076, 4, 19));
        // d = 28, e = 6, golden number above 11
        assert_eq!(easter_sunday(1954).unwrap(), from_ymd(1954, 4, 18));
        assert_eq!(easter_sunday(2049).unwrap(), from_ymd(2049, 4, 18));
        // earliest possible
        assert_eq!(easter_sunday(1818).unwrap(), from_ymd(1818, 3, 22));
        assert_eq!(easter_sunday(2285).unwrap(), from_ymd(2285, 3, 22));
    }

    #[test]
    fn test_single_easter_sunday_per_year() {
        for year in 1800..2200 {
            let mut date = from_ymd(year, 1, 1);
            let mut num_easter = 0;
            while date.year() == year {
                if is_easter_sunday(date) {
                    num_easter += 1;
                }
                date = date + Duration::days(1);
            }
            assert_eq!(num_easter, 1, "year {}", year);
        }
    }

    #[test]
    fn test_agrees_with_computus() {
        for year in 1583..=9999 {
            let expected = computus::gregorian(year).unwrap();
            let easter = easter_sunday(year).unwrap();
            assert_eq!(
                (easter.month(), easter.day()),
                (expected.month, expected.day),
                "year {}",
                year
            );
            assert_eq!(easter.weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn test_year_out_of_range() {
        assert!(matches!(
            easter_sunday(i32::MAX),
            Err(HolidayError::YearOutOfRange { year: i32::MAX })
        ));
    }
}
