//! Authoritative state of a session: settings plus one `DayRecord` per date.

use crate::core::calculator::PayCalculator;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::inclusion::InclusionRule;
use crate::models::interval_policy::IntervalPolicy;
use crate::models::report::PayReport;
use crate::models::settings::Settings;
use crate::utils::time::ClockTime;
use chrono::{Days, NaiveDate};
use std::collections::BTreeMap;

/// Number of days in a pay period.
pub const PERIOD_DAYS: u64 = 14;

#[derive(Debug, Clone)]
pub struct PeriodStore {
    settings: Settings,
    template: DayRecord,
    records: BTreeMap<NaiveDate, DayRecord>,
}

impl PeriodStore {
    /// `template` is copied into every record created by `ensure_record`.
    pub fn new(settings: Settings, template: DayRecord) -> AppResult<Self> {
        check_rate(settings.hourly_pay)?;
        Ok(Self {
            settings,
            template,
            records: BTreeMap::new(),
        })
    }

    pub fn anchor(&self) -> NaiveDate {
        self.settings.anchor
    }

    pub fn hourly_pay(&self) -> f64 {
        self.settings.hourly_pay
    }

    pub fn rule(&self) -> InclusionRule {
        self.settings.rule
    }

    /// Rejects negative (and non-finite) rates, keeping the previous value.
    pub fn set_hourly_pay(&mut self, rate: f64) -> AppResult<()> {
        check_rate(rate)?;
        self.settings.hourly_pay = rate;
        Ok(())
    }

    pub fn set_anchor(&mut self, date: NaiveDate) {
        self.settings.anchor = date;
    }

    pub fn set_rule(&mut self, rule: InclusionRule) {
        self.settings.rule = rule;
    }

    /// Move the anchor by `delta_periods * 14` days.
    pub fn shift_period(&mut self, delta_periods: i64) -> AppResult<NaiveDate> {
        let out_of_range = || {
            AppError::DateOutOfRange(format!(
                "cannot move {} by {} period(s)",
                self.settings.anchor, delta_periods
            ))
        };

        let days = delta_periods
            .unsigned_abs()
            .checked_mul(PERIOD_DAYS)
            .ok_or_else(out_of_range)?;

        let anchor = if delta_periods >= 0 {
            self.settings.anchor.checked_add_days(Days::new(days))
        } else {
            self.settings.anchor.checked_sub_days(Days::new(days))
        }
        .ok_or_else(out_of_range)?;

        self.settings.anchor = anchor;
        Ok(anchor)
    }

    /// The 14 consecutive dates starting at the anchor.
    ///
    /// Shorter only when the window runs past the last date chrono can
    /// represent.
    pub fn visible_dates(&self) -> Vec<NaiveDate> {
        self.settings
            .anchor
            .iter_days()
            .take(PERIOD_DAYS as usize)
            .collect()
    }

    /// Create the record for `date` with default values unless it exists.
    pub fn ensure_record(&mut self, date: NaiveDate) -> &DayRecord {
        self.records.entry(date).or_insert(self.template)
    }

    /// `ensure_record` for every visible date.
    pub fn ensure_window(&mut self) {
        for date in self.visible_dates() {
            self.ensure_record(date);
        }
    }

    pub fn get_record(&self, date: NaiveDate) -> AppResult<&DayRecord> {
        self.records
            .get(&date)
            .ok_or(AppError::RecordNotFound(date))
    }

    fn record_mut(&mut self, date: NaiveDate) -> AppResult<&mut DayRecord> {
        self.records
            .get_mut(&date)
            .ok_or(AppError::RecordNotFound(date))
    }

    /// Flip the worked flag; returns the new value.
    pub fn toggle_worked(&mut self, date: NaiveDate) -> AppResult<bool> {
        let rec = self.record_mut(date)?;
        rec.worked = !rec.worked;
        Ok(rec.worked)
    }

    pub fn set_worked(&mut self, date: NaiveDate, worked: bool) -> AppResult<()> {
        self.record_mut(date)?.worked = worked;
        Ok(())
    }

    /// Overwrite both times. The order of `start` and `end` is not checked here.
    pub fn set_times(&mut self, date: NaiveDate, start: ClockTime, end: ClockTime) -> AppResult<()> {
        let rec = self.record_mut(date)?;
        rec.start = start;
        rec.end = end;
        Ok(())
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Existing records of the visible window that the active rule includes,
    /// in ascending date order.
    pub fn included(&self) -> Vec<(NaiveDate, DayRecord)> {
        let rule = self.settings.rule;
        self.visible_dates()
            .into_iter()
            .filter_map(|d| self.records.get(&d).map(|r| (d, *r)))
            .filter(|(_, r)| rule.includes(r))
            .collect()
    }

    /// Ensure the window, then compute the report of its included records.
    pub fn report(&mut self, policy: IntervalPolicy) -> AppResult<PayReport> {
        self.ensure_window();
        PayCalculator::new(self.settings.hourly_pay, policy).compute(self.included())
    }
}

fn check_rate(rate: f64) -> AppResult<()> {
    if rate.is_finite() && rate >= 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidRate(rate))
    }
}
