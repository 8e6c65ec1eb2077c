pub mod calculator;
pub mod log;
pub mod period_store;
pub mod session;

pub use calculator::PayCalculator;
pub use period_store::{PERIOD_DAYS, PeriodStore};
pub use session::{Flow, Session};
