// src/export/model.rs

use crate::models::report::{DerivedRow, PayReport};
use chrono::NaiveDate;
use serde::Serialize;

/// Flat row used for CSV and for the `rows` array of the JSON export.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RowExport {
    pub date: String,
    pub start: String,
    pub end: String,
    pub total_hours: f64,
    pub pay: f64,
}

impl From<&DerivedRow> for RowExport {
    fn from(r: &DerivedRow) -> Self {
        Self {
            date: r.date.format("%Y-%m-%d").to_string(),
            start: r.start.format("%Y-%m-%d %H:%M").to_string(),
            end: r.end.format("%Y-%m-%d %H:%M").to_string(),
            total_hours: round2(r.total_hours),
            pay: round2(r.pay),
        }
    }
}

/// Whole report as written to JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportExport {
    pub anchor: String,
    pub hourly_pay: f64,
    pub total_hours: f64,
    pub total_pay: f64,
    pub rows: Vec<RowExport>,
}

impl ReportExport {
    pub fn new(anchor: NaiveDate, report: &PayReport) -> Self {
        Self {
            anchor: anchor.format("%Y-%m-%d").to_string(),
            hourly_pay: report.hourly_pay,
            total_hours: round2(report.total_hours),
            total_pay: round2(report.total_pay),
            rows: report.rows.iter().map(RowExport::from).collect(),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
