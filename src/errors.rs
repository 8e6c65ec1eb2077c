//! Unified application error type.
//! Every module (core, cli, config, export, utils) returns AppError so that
//! the interaction loop can report any failure the same way.

use crate::utils::time::ClockTime;
use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Period / pay domain
    // ---------------------------
    #[error("Invalid hourly pay: {0} (must be a number >= 0)")]
    InvalidRate(f64),

    #[error("No record exists for {0}")]
    RecordNotFound(NaiveDate),

    #[error("No days included in this period: no data available")]
    EmptySelection,

    #[error("Inverted interval on {date}: end {end} is not after start {start}")]
    InvertedInterval {
        date: NaiveDate,
        start: ClockTime,
        end: ClockTime,
    },

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
