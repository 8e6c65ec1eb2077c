use crate::export::ExportFormat;
use crate::models::inclusion::InclusionRule;
use clap::{Args, Parser, Subcommand};

/// Command-line interface definition for rbiweekly
#[derive(Parser)]
#[command(
    name = "rbiweekly",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fill a bi-weekly timesheet and calculate the pay for the period",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path (useful for tests or multiple profiles)
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Initial state of the period, shared by `session` and `calc`.
#[derive(Args, Debug, Clone, Default)]
pub struct PeriodArgs {
    /// First day of the period (YYYY-MM-DD); default: Monday of the current week
    #[arg(long, value_name = "DATE")]
    pub anchor: Option<String>,

    /// Hourly pay; default: `hourly_pay` from the configuration
    #[arg(long, value_name = "RATE", allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Which days count toward pay; default: `inclusion_rule` from the configuration
    #[arg(long, value_enum)]
    pub rule: Option<InclusionRule>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields with their default values")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Start an interactive session over one period (type `help` inside)
    Session {
        #[command(flatten)]
        period: PeriodArgs,

        /// Read session commands from a file instead of stdin
        #[arg(long, value_name = "FILE")]
        script: Option<String>,
    },

    /// Compute the pay of one period in a single shot
    Calc {
        #[command(flatten)]
        period: PeriodArgs,

        /// Day to include: DAY or DAY=START-END, where DAY is YYYY-MM-DD or 1-14
        #[arg(long = "day", short = 'd', value_name = "SPEC")]
        days: Vec<String>,

        /// Also export the report to this file (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Export format used with --file
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f', requires = "file")]
        force: bool,
    },
}
