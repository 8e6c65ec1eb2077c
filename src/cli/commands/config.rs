use crate::cli::parser::Commands;
use crate::config::{Config, migrate};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate: run_migrate,
        edit_config,
        editor,
    } = cmd
    {
        // ---- PRINT CONFIG ----
        if *print_config {
            let cfg = Config::load_from(path)?;
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", cfg.to_yaml()?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            require_file(path)?;
            let missing = migrate::missing_keys(path)?;
            if missing.is_empty() {
                success("Configuration file is complete.");
            } else {
                warning(format!("Missing fields: {}", missing.join(", ")));
                info("Run `rbiweekly config --migrate` to add them with default values.");
            }
        }

        // ---- MIGRATE CONFIG ----
        if *run_migrate {
            require_file(path)?;
            let added = migrate::migrate(path)?;
            if added.is_empty() {
                info("Configuration already up to date.");
            } else {
                success(format!("Added fields: {}", added.join(", ")));
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(path, editor.as_deref());
        }
    }

    Ok(())
}

fn require_file(path: &Path) -> AppResult<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(AppError::Config(format!(
            "{} not found (run `rbiweekly init` first)",
            path.display()
        )))
    }
}

fn edit(path: &Path, requested: Option<&str>) {
    // Default editor basato sulla piattaforma
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested.map(str::to_string).unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => success(format!(
                    "Configuration file edited successfully using fallback '{}'",
                    default_editor
                )),
                Ok(_) | Err(_) => error(format!(
                    "Failed to edit configuration file using fallback '{}'",
                    default_editor
                )),
            }
        }
    }
}
