//! Business day and bank day calendars for Iceland.
//! [`Calendar`] computes the holidays of a range of years once and derives
//! other years on demand.

use crate::config::CalendarConfig;
use crate::error::{HolidayError, Result};
use crate::holiday::{HalfHoliday, HolidayName, YearHolidays};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Holiday lookups plus the business and bank day rules built on them
pub trait HolidayCalendar {
    /// Name of the public holiday falling on `date`, if any
    fn holiday_name(&self, date: NaiveDate) -> Option<HolidayName>;

    /// Half-day holiday falling on `date`, if any
    fn half_holiday(&self, date: NaiveDate) -> Option<HalfHoliday>;

    /// Returns true if the specified day is a public holiday
    fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_name(date).is_some()
    }

    /// Returns true if the specified day is Christmas Eve or New Year's Eve
    fn is_half_holiday(&self, date: NaiveDate) -> bool {
        self.half_holiday(date).is_some()
    }

    /// Returns true if the date falls on a Saturday or Sunday
    fn is_weekend(&self, date: NaiveDate) -> bool {
        matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Returns true if the specified day is neither a weekend nor a holiday
    fn is_business_day(&self, date: NaiveDate) -> bool {
        !self.is_weekend(date) && !self.is_holiday(date)
    }

    /// Business days, and December 31st whenever it is a weekday
    fn is_bank_day(&self, date: NaiveDate) -> bool {
        let new_years_eve = date.month() == 12 && date.day() == 31;
        self.is_business_day(date) || (new_years_eve && !self.is_weekend(date))
    }

    /// Calculate the next business day, `None` at the end of the supported range
    fn next_business_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = date.succ_opt()?;
        while !self.is_business_day(date) {
            date = date.succ_opt()?;
        }
        Some(date)
    }

    /// Calculate the previous business day
    fn prev_business_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = date.pred_opt()?;
        while !self.is_business_day(date) {
            date = date.pred_opt()?;
        }
        Some(date)
    }

    fn next_bank_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = date.succ_opt()?;
        while !self.is_bank_day(date) {
            date = date.succ_opt()?;
        }
        Some(date)
    }

    fn prev_bank_day(&self, date: NaiveDate) -> Option<NaiveDate> {
        let mut date = date.pred_opt()?;
        while !self.is_bank_day(date) {
            date = date.pred_opt()?;
        }
        Some(date)
    }
}

/// Stateless calendar deriving the holidays of a date's year on every call
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Iceland;

impl HolidayCalendar for Iceland {
    fn holiday_name(&self, date: NaiveDate) -> Option<HolidayName> {
        YearHolidays::for_year(date.year())
            .ok()?
            .name_of(date)
    }

    fn half_holiday(&self, date: NaiveDate) -> Option<HalfHoliday> {
        YearHolidays::for_year(date.year())
            .ok()?
            .half_holiday_of(date)
    }
}

/// Calendar with the holidays of a range of years precomputed
#[derive(Debug, Clone)]
pub struct Calendar {
    holidays: BTreeMap<NaiveDate, HolidayName>,
    halfdays: BTreeMap<NaiveDate, HalfHoliday>,
    start: i32,
    end: i32,
}

impl Calendar {
    /// Calculate all holidays for the years from `start` to `end` (inclusively)
    pub fn calc_calendar(start: i32, end: i32) -> Result<Calendar> {
        if start > end {
            return Err(HolidayError::InvalidRange { start, end });
        }
        let mut holidays = BTreeMap::new();
        let mut halfdays = BTreeMap::new();
        for year in start..=end {
            let year_holidays = YearHolidays::for_year(year)?;
            // two holidays may share a date, the first in calendar order names it
            for (name, date) in year_holidays.iter() {
                holidays.entry(date).or_insert(name);
            }
            halfdays.extend(year_holidays.half_holidays().map(|(name, date)| (date, name)));
        }
        debug!(start, end, holidays = holidays.len(), "populated holiday calendar");
        Ok(Calendar {
            holidays,
            halfdays,
            start,
            end,
        })
    }

    /// Calendar populated for the range given by `config`
    pub fn from_config(config: &CalendarConfig) -> Result<Calendar> {
        Self::calc_calendar(config.start, config.end)
    }

    /// Calendar populated for the default range (2000-2050)
    pub fn with_default_range() -> Result<Calendar> {
        Self::from_config(&CalendarConfig::default())
    }

    /// First and last year held in memory
    pub fn range(&self) -> (i32, i32) {
        (self.start, self.end)
    }

    /// All precomputed holidays in date order
    pub fn holidays(&self) -> impl Iterator<Item = (NaiveDate, HolidayName)> + '_ {
        self.holidays.iter().map(|(date, name)| (*date, *name))
    }

    fn covers(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date.year())
    }
}

impl HolidayCalendar for Calendar {
    fn holiday_name(&self, date: NaiveDate) -> Option<HolidayName> {
        if self.covers(date) {
            return self.holidays.get(&date).copied();
        }
        trace!(%date, "date outside precomputed range");
        Iceland.holiday_name(date)
    }

    fn half_holiday(&self, date: NaiveDate) -> Option<HalfHoliday> {
        if self.covers(date) {
            return self.halfdays.get(&date).copied();
        }
        Iceland.half_holiday(date)
    }
}
