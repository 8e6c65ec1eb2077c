use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: create the config directory and a default
/// configuration file.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = Config::resolve_path(cli.config.as_deref());

    info("Initializing rbiweekly…");
    Config::init_all(&path, cli.test)?;

    if cli.test {
        info(format!("Test mode: config file not written ({})", path.display()));
    } else {
        success(format!("Config file: {}", path.display()));
    }

    success("rbiweekly initialization completed!");
    Ok(())
}
