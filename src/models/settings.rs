use crate::models::inclusion::InclusionRule;
use chrono::NaiveDate;

/// Mutable state of one running session: pay rate, period anchor and the
/// active inclusion rule. Owned by `PeriodStore`.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub hourly_pay: f64,
    pub anchor: NaiveDate,
    pub rule: InclusionRule,
}

impl Settings {
    pub fn new(hourly_pay: f64, anchor: NaiveDate, rule: InclusionRule) -> Self {
        Self {
            hourly_pay,
            anchor,
            rule,
        }
    }
}
