//! Grammar of the lines typed inside `rbiweekly session`.

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::models::inclusion::InclusionRule;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "Commands:\n{subcommands}"
)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// `<day>` arguments take either a date (YYYY-MM-DD) or a position 1-14 in the window.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Show the period tiles and the pay report
    Show,
    /// Show only the pay report
    Report,
    /// Go to the next bi-week
    Next,
    /// Go to the previous bi-week
    #[command(alias = "previous")]
    Prev,
    /// Move by a number of bi-weeks (negative goes back)
    Shift {
        #[arg(allow_negative_numbers = true)]
        periods: i64,
    },
    /// Set the first day of the period
    Anchor { date: String },
    /// Start the period on the Monday of the current week
    Today,
    /// Set the hourly pay
    Rate {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Choose which days count toward pay
    Rule {
        #[arg(value_enum)]
        rule: InclusionRule,
    },
    /// Lock/unlock a day
    Toggle { day: String },
    /// Mark a day as worked
    Work { day: String },
    /// Mark a day as not worked
    Rest { day: String },
    /// Set start and end time of a day (08:00, 8, 24, 9:30pm, 9:30 pm, "12 AM")
    Times {
        day: String,
        start: String,
        end: String,
    },
    /// Print the stored record of a day
    Get { day: String },
    /// Export the current report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
        #[arg(long, value_name = "FILE")]
        file: String,
        #[arg(long, short = 'f')]
        force: bool,
    },
    /// Print the session log
    Log,
    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Split a line into words. A double-quoted span is a single word, and a bare
/// `AM`/`PM` word is glued to the time before it.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words: Vec<(String, bool)> = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if quoted || !current.is_empty() {
                    words.push((std::mem::take(&mut current), quoted));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }
    if quoted || !current.is_empty() {
        words.push((current, quoted));
    }

    let mut out: Vec<String> = Vec::new();
    for (word, quoted) in words {
        let is_meridiem =
            !quoted && (word.eq_ignore_ascii_case("am") || word.eq_ignore_ascii_case("pm"));
        match out.last_mut() {
            Some(prev) if is_meridiem && prev.ends_with(|c: char| c.is_ascii_digit()) => {
                prev.push_str(&word);
            }
            _ => out.push(word),
        }
    }

    out
}

/// What a non-empty line turned into.
#[derive(Debug)]
pub enum ParsedLine {
    Command(SessionCommand),
    /// Help or usage text requested by the user.
    Help(String),
}

/// Parse one session line. Blank lines and `#` comments yield `None`.
pub fn parse_line(line: &str) -> AppResult<Option<ParsedLine>> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    match SessionLine::try_parse_from(tokenize(trimmed)) {
        Ok(parsed) => Ok(Some(ParsedLine::Command(parsed.command))),
        Err(e)
            if matches!(
                e.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            ) =>
        {
            Ok(Some(ParsedLine::Help(e.render().to_string())))
        }
        Err(e) => Err(AppError::InvalidCommand(
            e.render().to_string().trim_end().to_string(),
        )),
    }
}
