//! The interaction loop: one command in, one full recomputation out.

use crate::cli::session_parser::{ParsedLine, SessionCommand, parse_line};
use crate::config::Config;
use crate::core::log::SessionLog;
use crate::core::period_store::{PERIOD_DAYS, PeriodStore};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::inclusion::InclusionRule;
use crate::models::report::PayReport;
use crate::models::settings::Settings;
use crate::ui::messages::{error, info, success, warning};
use crate::ui::render;
use crate::utils::date::{parse_date, today, week_start};
use crate::utils::formatting::{format_hours, format_money};
use crate::utils::time::{format_time, parse_time, parse_time_range};
use chrono::NaiveDate;
use std::io::{self, BufRead, Write};

/// Whether the loop keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: PeriodStore,
    cfg: Config,
    log: SessionLog,
}

impl Session {
    /// Build a session from the configuration; `anchor`, `rate` and `rule`
    /// override the configured/default values when given.
    pub fn new(
        cfg: Config,
        anchor: Option<NaiveDate>,
        rate: Option<f64>,
        rule: Option<InclusionRule>,
    ) -> AppResult<Self> {
        let anchor = anchor.unwrap_or_else(|| week_start(today()));
        let settings = Settings::new(
            rate.unwrap_or(cfg.hourly_pay),
            anchor,
            rule.unwrap_or(cfg.inclusion_rule),
        );
        let store = PeriodStore::new(settings, cfg.default_record()?)?;

        let mut log = SessionLog::new();
        log.ttlog(
            "start",
            &anchor.to_string(),
            &format!(
                "Session started: rate {}, rule {}",
                format_money(store.hourly_pay()),
                store.rule().code()
            ),
        );

        let mut session = Self { store, cfg, log };
        session.store.ensure_window();
        Ok(session)
    }

    pub fn store(&self) -> &PeriodStore {
        &self.store
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn log(&self) -> &SessionLog {
        &self.log
    }

    /// Recompute the report of the visible window.
    pub fn report(&mut self) -> AppResult<PayReport> {
        self.store.report(self.cfg.inverted_interval)
    }

    /// `<day>` argument: a 1-based position in the window or an ISO date.
    pub fn resolve_day(&self, token: &str) -> AppResult<NaiveDate> {
        if let Ok(pos) = token.trim().parse::<u64>() {
            let dates = self.store.visible_dates();
            if pos == 0 || pos > PERIOD_DAYS || pos as usize > dates.len() {
                return Err(AppError::InvalidDate(format!(
                    "{token} (day position must be 1-{PERIOD_DAYS})"
                )));
            }
            return Ok(dates[pos as usize - 1]);
        }

        parse_date(token)
    }

    /// Apply a `DAY` or `DAY=START-END` spec, marking the day as worked.
    pub fn apply_day_spec(&mut self, spec: &str) -> AppResult<NaiveDate> {
        let (day, range) = match spec.split_once('=') {
            Some((d, r)) => (d, Some(r)),
            None => (spec, None),
        };

        let date = self.resolve_day(day)?;
        let times = range.map(parse_time_range).transpose()?;

        if self.store.rule().uses_worked_flag() {
            self.store.set_worked(date, true)?;
        } else {
            self.store.get_record(date)?;
        }

        if let Some((start, end)) = times {
            self.store.set_times(date, start, end)?;
        }

        Ok(date)
    }

    /// Period tiles followed by the report (or the no-data notice).
    pub fn show(&mut self) -> AppResult<()> {
        self.store.ensure_window();
        render::render_period(&self.store, &self.cfg);
        self.show_report()
    }

    /// Report only. An empty selection is a normal state here, not an error.
    pub fn show_report(&mut self) -> AppResult<()> {
        match self.report() {
            Ok(report) => {
                render::render_report(&report, &self.store, &self.cfg);
                Ok(())
            }
            Err(AppError::EmptySelection) => {
                render::render_no_data(&self.store);
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    /// One-line total printed after edits.
    fn show_total(&mut self) -> AppResult<()> {
        match self.report() {
            Ok(report) => info(format!(
                "Total: {} over {} day(s), {} h",
                format_money(report.total_pay),
                report.rows.len(),
                format_hours(report.total_hours)
            )),
            Err(AppError::EmptySelection) => info("Total: no days included"),
            Err(e) => return Err(e),
        }
        Ok(())
    }

    fn require_worked_flag(&self, command: &str) -> AppResult<()> {
        if self.store.rule().uses_worked_flag() {
            Ok(())
        } else {
            Err(AppError::InvalidCommand(format!(
                "`{command}` needs the `worked` rule (every day is already included)"
            )))
        }
    }

    fn navigate(&mut self, delta: i64) -> AppResult<()> {
        let anchor = self.store.shift_period(delta)?;
        self.log.ttlog(
            "shift",
            &anchor.to_string(),
            &format!("Moved by {delta} period(s)"),
        );
        self.show()
    }

    fn mark_day(&mut self, day: &str, worked: bool) -> AppResult<()> {
        let (op, state) = if worked {
            ("work", "worked")
        } else {
            ("rest", "not worked")
        };
        self.require_worked_flag(op)?;

        let date = self.resolve_day(day)?;
        self.store.set_worked(date, worked)?;
        self.log
            .ttlog(op, &date.to_string(), &format!("Day marked as {state}"));
        success(format!("{date} {state}"));
        self.show_total()
    }

    pub fn execute(&mut self, cmd: SessionCommand) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Show => self.show()?,
            SessionCommand::Report => self.show_report()?,

            SessionCommand::Next => self.navigate(1)?,
            SessionCommand::Prev => self.navigate(-1)?,
            SessionCommand::Shift { periods } => self.navigate(periods)?,

            SessionCommand::Anchor { date } => {
                let d = parse_date(&date)?;
                self.store.set_anchor(d);
                self.log
                    .ttlog("anchor", &d.to_string(), "Period start date set");
                self.show()?;
            }

            SessionCommand::Today => {
                let d = week_start(today());
                self.store.set_anchor(d);
                self.log
                    .ttlog("anchor", &d.to_string(), "Period moved to the current week");
                self.show()?;
            }

            SessionCommand::Rate { value } => {
                self.store.set_hourly_pay(value)?;
                self.log.ttlog(
                    "rate",
                    "",
                    &format!("Hourly pay set to {}", format_money(value)),
                );
                success(format!("Hourly pay set to {}", format_money(value)));
                self.show_total()?;
            }

            SessionCommand::Rule { rule } => {
                self.store.set_rule(rule);
                self.log
                    .ttlog("rule", rule.code(), "Inclusion rule changed");
                self.show()?;
            }

            SessionCommand::Toggle { day } => {
                self.require_worked_flag("toggle")?;
                let date = self.resolve_day(&day)?;
                let worked = self.store.toggle_worked(date)?;
                let state = if worked { "unlocked" } else { "locked" };
                self.log
                    .ttlog("toggle", &date.to_string(), &format!("Day {state}"));
                success(format!("{date} {state}"));
                self.show_total()?;
            }

            SessionCommand::Work { day } => self.mark_day(&day, true)?,
            SessionCommand::Rest { day } => self.mark_day(&day, false)?,

            SessionCommand::Times { day, start, end } => {
                let date = self.resolve_day(&day)?;
                let start = parse_time(&start)?;
                let end = parse_time(&end)?;
                self.store.set_times(date, start, end)?;

                let range = format!(
                    "{}-{}",
                    format_time(start, self.cfg.time_format),
                    format_time(end, self.cfg.time_format)
                );
                self.log.ttlog("times", &date.to_string(), &range);
                if end <= start {
                    warning(format!("{date}: end time is not after start time"));
                }
                success(format!("{date} set to {range}"));
                self.show_total()?;
            }

            SessionCommand::Get { day } => {
                let date = self.resolve_day(&day)?;
                let rec = *self.store.get_record(date)?;
                render::render_record(date, &rec, &self.store, &self.cfg);
            }

            SessionCommand::Export {
                format,
                file,
                force,
            } => self.export(format, &file, force)?,

            SessionCommand::Log => self.log.print(),

            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Export the current report. Never prompts: the session owns stdin.
    pub fn export(&mut self, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let report = self.report()?;
        let path = ExportLogic::export(&report, self.store.anchor(), format, file, force, false)?;
        self.log.ttlog(
            "export",
            format.as_str(),
            &format!("Report written to {}", path.display()),
        );
        Ok(())
    }

    pub fn execute_line(&mut self, line: &str) -> AppResult<Flow> {
        match parse_line(line)? {
            None => Ok(Flow::Continue),
            Some(ParsedLine::Help(text)) => {
                println!("{text}");
                Ok(Flow::Continue)
            }
            Some(ParsedLine::Command(cmd)) => self.execute(cmd),
        }
    }

    /// Read commands until `quit` or end of input. Errors of a single command
    /// are reported and the loop goes on with the state left untouched.
    pub fn run<R: BufRead>(&mut self, input: R, prompt: bool) -> AppResult<()> {
        if let Err(e) = self.show() {
            error(e);
        }

        let mut lines = input.lines();
        loop {
            if prompt {
                print!("\nrbiweekly> ");
                io::stdout().flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };

            match self.execute_line(&line?) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => error(e),
            }
        }

        Ok(())
    }
}
