use crate::errors::AppResult;
use crate::utils::time::ClockTime;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

/// Work record for one calendar date of a period.
///
/// Times are wall-clock only; they get a date component when anchored
/// to the date the record is stored under (see [`DayRecord::anchored`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub worked: bool,
    pub start: ClockTime,
    pub end: ClockTime,
}

impl DayRecord {
    pub fn new(worked: bool, start: ClockTime, end: ClockTime) -> Self {
        Self { worked, start, end }
    }

    /// Combine both times with `date`, producing absolute timestamps.
    /// `24:00` lands on the following midnight.
    pub fn anchored(&self, date: NaiveDate) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
        Ok((self.start.on(date)?, self.end.on(date)?))
    }
}

impl Default for DayRecord {
    /// Not worked, 08:00–16:00.
    fn default() -> Self {
        Self {
            worked: false,
            start: ClockTime::At(NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default()),
            end: ClockTime::At(NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default()),
        }
    }
}
