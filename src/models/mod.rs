pub mod day_record;
pub mod inclusion;
pub mod interval_policy;
pub mod log_entry;
pub mod report;
pub mod settings;
