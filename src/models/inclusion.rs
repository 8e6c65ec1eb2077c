use crate::models::day_record::DayRecord;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which records of the window count toward pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InclusionRule {
    /// Only days explicitly marked as worked (lock/unlock tiles).
    #[default]
    Worked,
    /// Every day of the window that has a time range.
    #[value(name = "every_day", alias = "every-day")]
    EveryDay,
}

impl InclusionRule {
    pub fn includes(&self, record: &DayRecord) -> bool {
        match self {
            InclusionRule::Worked => record.worked,
            InclusionRule::EveryDay => true,
        }
    }

    /// Whether the `worked` flag has any meaning under this rule.
    pub fn uses_worked_flag(&self) -> bool {
        matches!(self, InclusionRule::Worked)
    }

    pub fn code(&self) -> &'static str {
        match self {
            InclusionRule::Worked => "worked",
            InclusionRule::EveryDay => "every_day",
        }
    }
}
