use serde::{Deserialize, Serialize};

/// What to do with a record whose end time is not after its start time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntervalPolicy {
    /// Keep the zero or negative hours as computed.
    #[default]
    Allow,
    /// Fail the computation with `AppError::InvertedInterval`.
    Reject,
}
