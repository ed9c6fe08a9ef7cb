//! Icelandic public holidays and the rules that place them in a year.
//!
//! As of 2013 the public holidays are
//!
//! - New Year's Day, January 1st (Nýársdagur)
//! - Holy Thursday, three days before Easter (Skírdagur)
//! - Good Friday, the Friday before Easter (Föstudagurinn langi)
//! - Easter Sunday (Páskadagur)
//! - Easter Monday (Annar í páskum)
//! - First Day of Summer, the first Thursday after April 18th (Sumardagurinn fyrsti)
//! - Labour Day, May 1st (Verkalýðsdagurinn)
//! - Ascension of Jesus, 39 days after Easter (Uppstigningardagur)
//! - Whit Monday, 50 days after Easter (Annar í hvítasunnu)
//! - National Day, June 17th (Þjóðhátíðardagurinn)
//! - Merchant Holiday, the first Monday of August (Frídagur verslunarmanna)
//! - Christmas Day, December 25th (Jóladagur)
//! - Second Day of Christmas, December 26th (Annar í jólum)
//!
//! Christmas Eve and New Year's Eve are observed from 13:00 and are modelled
//! as [`HalfHoliday`]s.

use crate::easter::easter_sunday;
use crate::error::{HolidayError, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The named Icelandic public holidays, in calendar order
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HolidayName {
    January1st,
    HolyThursday,
    GoodFriday,
    EasterSunday,
    EasterMonday,
    FirstDayOfSummer,
    May1st,
    AscensionOfJesus,
    WhitMonday,
    June17th,
    MerchantHoliday,
    ChristmasDay,
    SecondDayOfChristmas,
}

impl HolidayName {
    pub const ALL: [HolidayName; 13] = [
        HolidayName::January1st,
        HolidayName::HolyThursday,
        HolidayName::GoodFriday,
        HolidayName::EasterSunday,
        HolidayName::EasterMonday,
        HolidayName::FirstDayOfSummer,
        HolidayName::May1st,
        HolidayName::AscensionOfJesus,
        HolidayName::WhitMonday,
        HolidayName::June17th,
        HolidayName::MerchantHoliday,
        HolidayName::ChristmasDay,
        HolidayName::SecondDayOfChristmas,
    ];

    /// The rule placing this holiday within a year
    pub fn rule(self) -> Rule {
        match self {
            HolidayName::January1st => Rule::FixedDay { month: 1, day: 1 },
            HolidayName::HolyThursday => Rule::EasterOffset { offset: -3 },
            HolidayName::GoodFriday => Rule::EasterOffset { offset: -2 },
            HolidayName::EasterSunday => Rule::EasterOffset { offset: 0 },
            HolidayName::EasterMonday => Rule::EasterOffset { offset: 1 },
            HolidayName::FirstDayOfSummer => Rule::WeekdayOnOrAfter {
                month: 4,
                day: 19,
                weekday: Weekday::Thu,
            },
            HolidayName::May1st => Rule::FixedDay { month: 5, day: 1 },
            HolidayName::AscensionOfJesus => Rule::EasterOffset { offset: 39 },
            HolidayName::WhitMonday => Rule::EasterOffset { offset: 50 },
            HolidayName::June17th => Rule::FixedDay { month: 6, day: 17 },
            HolidayName::MerchantHoliday => Rule::WeekdayOnOrAfter {
                month: 8,
                day: 1,
                weekday: Weekday::Mon,
            },
            HolidayName::ChristmasDay => Rule::FixedDay { month: 12, day: 25 },
            HolidayName::SecondDayOfChristmas => Rule::FixedDay { month: 12, day: 26 },
        }
    }
}

/// Days on which businesses close at 13:00
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HalfHoliday {
    ChristmasEve,
    NewYearsEve,
}

impl HalfHoliday {
    pub const ALL: [HalfHoliday; 2] = [HalfHoliday::ChristmasEve, HalfHoliday::NewYearsEve];

    pub fn rule(self) -> Rule {
        match self {
            HalfHoliday::ChristmasEve => Rule::FixedDay { month: 12, day: 24 },
            HalfHoliday::NewYearsEve => Rule::FixedDay { month: 12, day: 31 },
        }
    }

    /// Local time from which the day is observed as a holiday
    pub fn closes_at(self) -> NaiveTime {
        NaiveTime::MIN + Duration::hours(13)
    }
}

/// How a holiday is placed within a given year
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub enum Rule {
    /// Same month and day every year
    FixedDay { month: u32, day: u32 },
    /// Days relative to Easter Sunday, e.g. -2 for Good Friday
    EasterOffset { offset: i64 },
    /// The first `weekday` falling on or after `month`/`day`
    WeekdayOnOrAfter {
        month: u32,
        day: u32,
        weekday: Weekday,
    },
}

impl Rule {
    /// Resolve the rule for `year`, given that year's Easter Sunday.
    /// `None` if the date can not be represented.
    pub fn resolve(&self, year: i32, easter: NaiveDate) -> Option<NaiveDate> {
        match self {
            Rule::FixedDay { month, day } => NaiveDate::from_ymd_opt(year, *month, *day),
            Rule::EasterOffset { offset } => {
                easter.checked_add_signed(Duration::days(*offset))
            }
            Rule::WeekdayOnOrAfter {
                month,
                day,
                weekday,
            } => {
                let start = NaiveDate::from_ymd_opt(year, *month, *day)?;
                let ahead = (7 + weekday.num_days_from_monday()
                    - start.weekday().num_days_from_monday())
                    % 7;
                start.checked_add_signed(Duration::days(ahead as i64))
            }
        }
    }
}

/// All holidays of a single year
#[derive(Debug, Clone, PartialEq)]
pub struct YearHolidays {
    year: i32,
    dates: [NaiveDate; 13],
    half_days: [NaiveDate; 2],
}

impl YearHolidays {
    /// Derive the holidays of `year` from its Easter Sunday and the fixed rules
    pub fn for_year(year: i32) -> Result<YearHolidays> {
        let easter = easter_sunday(year)?;
        let mut dates = [easter; 13];
        for (slot, holiday) in dates.iter_mut().zip(HolidayName::ALL) {
            *slot = holiday
                .rule()
                .resolve(year, easter)
                .ok_or(HolidayError::DateOutOfRange { year, holiday })?;
        }
        let mut half_days = [easter; 2];
        for (slot, half) in half_days.iter_mut().zip(HalfHoliday::ALL) {
            *slot = half
                .rule()
                .resolve(year, easter)
                .ok_or(HolidayError::YearOutOfRange { year })?;
        }
        Ok(YearHolidays {
            year,
            dates,
            half_days,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn easter_sunday(&self) -> NaiveDate {
        self.get(HolidayName::EasterSunday)
    }

    /// Date of `holiday` in this year
    pub fn get(&self, holiday: HolidayName) -> NaiveDate {
        self.dates[holiday as usize]
    }

    /// Holidays in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (HolidayName, NaiveDate)> + '_ {
        HolidayName::ALL.into_iter().zip(self.dates.iter().copied())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    /// Name of the holiday falling on `date`, if any. When two holidays
    /// coincide the one earlier in [`HolidayName::ALL`] is returned.
    pub fn name_of(&self, date: NaiveDate) -> Option<HolidayName> {
        self.iter()
            .find(|(_, holiday)| *holiday == date)
            .map(|(name, _)| name)
    }

    pub fn half_holidays(&self) -> impl Iterator<Item = (HalfHoliday, NaiveDate)> + '_ {
        HalfHoliday::ALL.into_iter().zip(self.half_days.iter().copied())
    }

    pub fn half_holiday_of(&self, date: NaiveDate) -> Option<HalfHoliday> {
        self.half_holidays()
            .find(|(_, half)| *half == date)
            .map(|(name, _)| name)
    }

    pub fn to_map(&self) -> BTreeMap<HolidayName, NaiveDate> {
        self.iter().collect()
    }
}

/// Returns the holidays of `year`
pub fn holidays_for_year(year: i32) -> Result<YearHolidays> {
    YearHolidays::for_year(year)
}
