use crate::holiday::HolidayName;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HolidayError {
    /// Dates in `year` can not be represented by `chrono::NaiveDate`
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange { year: i32 },

    #[error("{holiday:?} in {year} is outside the supported date range")]
    DateOutOfRange { year: i32, holiday: HolidayName },

    /// `start` must not come after `end`
    #[error("invalid year range {start}..={end}")]
    InvalidRange { start: i32, end: i32 },

    #[error("invalid calendar configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HolidayError>;
