//! Time utilities: parsing wall-clock input in 24 h and 12 h notation,
//! converting 12 h components and formatting times for display.

use crate::errors::{AppError, AppResult};
use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use clap::ValueEnum;
use regex::Regex;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Meridiem {
    Am,
    Pm,
}

/// How start/end times are shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

/// A wall-clock value inside one day, `00:00` up to and including `24:00`.
///
/// `EndOfDay` is the midnight that closes the day, so a `16:00-24:00` shift
/// lasts eight hours. Variant order makes it sort after every `At` value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ClockTime {
    At(NaiveTime),
    EndOfDay,
}

impl ClockTime {
    pub fn hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self::At)
    }

    /// Absolute timestamp of this value on `date`.
    pub fn on(self, date: NaiveDate) -> AppResult<NaiveDateTime> {
        match self {
            Self::At(t) => Ok(date.and_time(t)),
            Self::EndOfDay => date
                .checked_add_days(Days::new(1))
                .map(|next| next.and_time(NaiveTime::MIN))
                .ok_or_else(|| AppError::DateOutOfRange(format!("{date} 24:00"))),
        }
    }

    /// Inverse of [`ClockTime::on`] for timestamps derived from `date`.
    pub fn of(date: NaiveDate, at: NaiveDateTime) -> Self {
        if at.date() > date && at.time() == NaiveTime::MIN {
            Self::EndOfDay
        } else {
            Self::At(at.time())
        }
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(t: NaiveTime) -> Self {
        Self::At(t)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_time(*self, TimeFormat::H24))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Build a time of day from 12-hour clock components.
///
/// `12:xx AM` is just after midnight and `12:xx PM` just after noon.
pub fn from_12h(hour: u32, minute: u32, meridiem: Meridiem) -> AppResult<NaiveTime> {
    if !(1..=12).contains(&hour) || minute > 59 {
        return Err(AppError::InvalidTime(format!(
            "{hour}:{minute:02} {} (hour must be 1-12, minute 0-59)",
            meridiem_str(meridiem)
        )));
    }

    let h24 = match (hour, meridiem) {
        (12, Meridiem::Am) => 0,
        (12, Meridiem::Pm) => 12,
        (h, Meridiem::Am) => h,
        (h, Meridiem::Pm) => h + 12,
    };

    NaiveTime::from_hms_opt(h24, minute, 0)
        .ok_or_else(|| AppError::InvalidTime(format!("{hour}:{minute:02}")))
}

/// Split a time of day back into 12-hour clock components.
pub fn to_12h(t: NaiveTime) -> (u32, u32, Meridiem) {
    let (is_pm, hour) = t.hour12();
    let meridiem = if is_pm { Meridiem::Pm } else { Meridiem::Am };
    (hour, t.minute(), meridiem)
}

fn meridiem_str(m: Meridiem) -> &'static str {
    match m {
        Meridiem::Am => "AM",
        Meridiem::Pm => "PM",
    }
}

fn time_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?i)\s*(\d{1,2})(?::(\d{2}))?\s*(am|pm)?\s*$").expect("valid time regex")
    })
}

/// Parse user time input.
///
/// Accepted forms:
/// - `HH:MM` (24 h, e.g. `08:00`, `17:30`)
/// - `H` (whole hour, 0-24)
/// - `24:00` or `24`, the midnight closing the day
/// - `h[:MM]AM|PM` with optional space, case-insensitive (e.g. `9pm`, `12:15 AM`)
pub fn parse_time(input: &str) -> AppResult<ClockTime> {
    let invalid = || AppError::InvalidTime(input.to_string());

    let caps = time_regex().captures(input).ok_or_else(invalid)?;

    let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 0,
    };

    match caps.get(3) {
        Some(m) => {
            let meridiem = if m.as_str().eq_ignore_ascii_case("am") {
                Meridiem::Am
            } else {
                Meridiem::Pm
            };
            from_12h(hour, minute, meridiem)
                .map(ClockTime::At)
                .map_err(|_| invalid())
        }
        None if hour == 24 && minute == 0 => Ok(ClockTime::EndOfDay),
        None => ClockTime::hm(hour, minute).ok_or_else(invalid),
    }
}

/// Parse a `START-END` range such as `08:00-16:00` or `9am-5pm`.
pub fn parse_time_range(input: &str) -> AppResult<(ClockTime, ClockTime)> {
    let (start, end) = input
        .split_once('-')
        .ok_or_else(|| AppError::InvalidTime(format!("{input} (expected START-END)")))?;

    Ok((parse_time(start)?, parse_time(end)?))
}

/// `24:00` is shown as-is in 24 h style and as `12:00 AM+1` in 12 h style.
pub fn format_time(t: ClockTime, fmt: TimeFormat) -> String {
    let t = match (t, fmt) {
        (ClockTime::At(t), _) => t,
        (ClockTime::EndOfDay, TimeFormat::H24) => return "24:00".to_string(),
        (ClockTime::EndOfDay, TimeFormat::H12) => return "12:00 AM+1".to_string(),
    };

    match fmt {
        TimeFormat::H24 => t.format("%H:%M").to_string(),
        TimeFormat::H12 => {
            let (h, m, mer) = to_12h(t);
            format!("{:02}:{:02} {}", h, m, meridiem_str(mer))
        }
    }
}
