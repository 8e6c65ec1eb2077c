use crate::cli::commands::session::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

/// Handle the `calc` command: apply the day specs, print the period and
/// its report, optionally export it.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc {
        period,
        days,
        file,
        format,
        force,
    } = cmd
    {
        let mut session = open_session(period, cfg)?;

        for spec in days {
            session.apply_day_spec(spec)?;
        }

        session.show()?;

        if let Some(file) = file {
            let report = session.report()?;
            ExportLogic::export(
                &report,
                session.store().anchor(),
                *format,
                file,
                *force,
                true,
            )?;
        }
    }
    Ok(())
}
