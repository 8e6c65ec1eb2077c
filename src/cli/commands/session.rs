use crate::cli::parser::{Commands, PeriodArgs};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::AppResult;
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

/// Build a session from the config plus the command-line overrides.
pub fn open_session(period: &PeriodArgs, cfg: &Config) -> AppResult<Session> {
    let anchor = period.anchor.as_deref().map(parse_date).transpose()?;
    Session::new(cfg.clone(), anchor, period.rate, period.rule)
}

/// Handle the `session` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Session { period, script } = cmd {
        let mut session = open_session(period, cfg)?;

        match script {
            Some(file) => {
                let reader = BufReader::new(File::open(expand_tilde(file))?);
                session.run(reader, false)?;
            }
            None => {
                let stdin = io::stdin();
                let prompt = stdin.is_terminal();
                session.run(stdin.lock(), prompt)?;
            }
        }
    }
    Ok(())
}
