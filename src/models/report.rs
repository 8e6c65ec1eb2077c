use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Computed result for one included day. Never stored: rebuilt on every refresh.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedRow {
    pub date: NaiveDate,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub total_hours: f64,
    pub pay: f64,
}

/// Rows of a period plus their aggregates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayReport {
    pub hourly_pay: f64,
    pub rows: Vec<DerivedRow>,
    pub total_hours: f64,
    pub total_pay: f64,
}

impl PayReport {
    pub fn row(&self, date: NaiveDate) -> Option<&DerivedRow> {
        self.rows.iter().find(|r| r.date == date)
    }
}
