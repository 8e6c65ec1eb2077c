use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::inclusion::InclusionRule;
use crate::models::interval_policy::IntervalPolicy;
use crate::utils::date::WeekdayStyle;
use crate::utils::path::expand_tilde;
use crate::utils::time::{TimeFormat, parse_time};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub mod migrate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_hourly_pay")]
    pub hourly_pay: f64,
    #[serde(default)]
    pub inclusion_rule: InclusionRule,
    #[serde(default = "default_start")]
    pub default_start: String,
    #[serde(default = "default_end")]
    pub default_end: String,
    #[serde(default)]
    pub inverted_interval: IntervalPolicy,
    #[serde(default)]
    pub time_format: TimeFormat,
    #[serde(default)]
    pub show_weekday: WeekdayStyle,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_hourly_pay() -> f64 {
    20.0
}
fn default_start() -> String {
    "08:00".to_string()
}
fn default_end() -> String {
    "16:00".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hourly_pay: default_hourly_pay(),
            inclusion_rule: InclusionRule::default(),
            default_start: default_start(),
            default_end: default_end(),
            inverted_interval: IntervalPolicy::default(),
            time_format: TimeFormat::default(),
            show_weekday: WeekdayStyle::default(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("rbiweekly")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".rbiweekly")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rbiweekly.conf")
    }

    /// Config file to use: the `--config` override if given, the default otherwise.
    pub fn resolve_path(custom: Option<&str>) -> PathBuf {
        match custom {
            Some(p) => expand_tilde(p),
            None => Self::config_file(),
        }
    }

    /// Load configuration from `path`, or return defaults if the file does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values the rest of the program cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if !self.hourly_pay.is_finite() || self.hourly_pay < 0.0 {
            return Err(AppError::Config(format!(
                "hourly_pay must be >= 0 (found {})",
                self.hourly_pay
            )));
        }
        self.default_record()?;
        if self.separator_char.chars().count() != 1 {
            return Err(AppError::Config(format!(
                "separator_char must be a single character (found '{}')",
                self.separator_char
            )));
        }
        Ok(())
    }

    /// Template for records created the first time a date becomes visible.
    pub fn default_record(&self) -> AppResult<DayRecord> {
        let start = parse_time(&self.default_start)
            .map_err(|e| AppError::Config(format!("default_start: {e}")))?;
        let end = parse_time(&self.default_end)
            .map_err(|e| AppError::Config(format!("default_end: {e}")))?;
        Ok(DayRecord::new(false, start, end))
    }

    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> AppResult<()> {
        let yaml = self.to_yaml()?;
        fs::write(path, yaml).map_err(|_| AppError::ConfigSave)
    }

    /// Initialize the configuration file at `path` with default values.
    ///
    /// In test mode nothing is written.
    pub fn init_all(path: &Path, is_test: bool) -> AppResult<()> {
        if is_test {
            return Ok(());
        }

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        Config::default().save(path)
    }
}
