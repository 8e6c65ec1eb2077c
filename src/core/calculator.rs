//! Turn included day records into per-day hours/pay rows and totals.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::interval_policy::IntervalPolicy;
use crate::models::report::{DerivedRow, PayReport};
use chrono::NaiveDate;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy)]
pub struct PayCalculator {
    hourly_pay: f64,
    policy: IntervalPolicy,
}

impl PayCalculator {
    pub fn new(hourly_pay: f64, policy: IntervalPolicy) -> Self {
        Self { hourly_pay, policy }
    }

    /// Hours and pay for a single record anchored to `date`.
    pub fn derive_row(&self, date: NaiveDate, record: &DayRecord) -> AppResult<DerivedRow> {
        let (start, end) = record.anchored(date)?;

        if self.policy == IntervalPolicy::Reject && end <= start {
            return Err(AppError::InvertedInterval {
                date,
                start: record.start,
                end: record.end,
            });
        }

        let total_hours = (end - start).num_seconds() as f64 / SECONDS_PER_HOUR;

        Ok(DerivedRow {
            date,
            start,
            end,
            total_hours,
            pay: total_hours * self.hourly_pay,
        })
    }

    /// Compute the report for the given included records.
    ///
    /// Rows are ordered by date before summing, so the totals do not depend
    /// on the order of the input. An empty input is `EmptySelection`.
    pub fn compute<I>(&self, included: I) -> AppResult<PayReport>
    where
        I: IntoIterator<Item = (NaiveDate, DayRecord)>,
    {
        let mut records: Vec<(NaiveDate, DayRecord)> = included.into_iter().collect();
        if records.is_empty() {
            return Err(AppError::EmptySelection);
        }
        records.sort_by_key(|(d, _)| *d);

        let rows = records
            .iter()
            .map(|(d, r)| self.derive_row(*d, r))
            .collect::<AppResult<Vec<_>>>()?;

        let total_hours = rows.iter().map(|r| r.total_hours).sum();
        let total_pay = rows.iter().map(|r| r.pay).sum();

        Ok(PayReport {
            hourly_pay: self.hourly_pay,
            rows,
            total_hours,
            total_pay,
        })
    }
}
