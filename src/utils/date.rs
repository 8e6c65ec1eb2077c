use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Monday of the week containing `d`.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_monday() as u64;
    d.checked_sub_days(Days::new(back)).unwrap_or(d)
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// How the weekday is shown next to a date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekdayStyle {
    None,
    #[default]
    Short,
    Medium,
    Long,
}

pub fn weekday_label(w: Weekday, style: WeekdayStyle) -> &'static str {
    let (short, medium, long) = match w {
        Weekday::Mon => ("Mo", "Mon", "Monday"),
        Weekday::Tue => ("Tu", "Tue", "Tuesday"),
        Weekday::Wed => ("We", "Wed", "Wednesday"),
        Weekday::Thu => ("Th", "Thu", "Thursday"),
        Weekday::Fri => ("Fr", "Fri", "Friday"),
        Weekday::Sat => ("Sa", "Sat", "Saturday"),
        Weekday::Sun => ("Su", "Sun", "Sunday"),
    };

    match style {
        WeekdayStyle::None => "",
        WeekdayStyle::Short => short,
        WeekdayStyle::Medium => medium,
        WeekdayStyle::Long => long,
    }
}

/// `2024-01-01` or `Mo 2024-01-01` depending on the style.
pub fn date_label(d: NaiveDate, style: WeekdayStyle) -> String {
    match style {
        WeekdayStyle::None => d.format("%Y-%m-%d").to_string(),
        _ => format!("{} {}", weekday_label(d.weekday(), style), d.format("%Y-%m-%d")),
    }
}

/// Short tile caption like `Mon, Jan 01`.
pub fn tile_label(d: NaiveDate) -> String {
    d.format("%a, %b %d").to_string()
}
