use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file looked up when `--config` is not given.
const DEFAULT_CONFIG: &str = "workcal.toml";

/// Top-level workcal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WorkcalConfig {
    /// Calendar selection defaults.
    #[serde(default)]
    pub calendar: CalendarToml,
}

/// `[calendar]` section: defaults applied when the CLI flags are absent.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    /// Working-week pattern name (e.g. "monday-friday").
    pub pattern: Option<String>,
    /// Path to an .ics file or directory of holiday calendars.
    pub holidays: Option<PathBuf>,
}

impl WorkcalConfig {
    /// Loads configuration from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    /// Loads configuration from the given path, from `workcal.toml` when no
    /// path was given and the file exists, or falls back to the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG);
                if default.exists() {
                    Self::load(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_calendar_section() {
        let config: WorkcalConfig = toml::from_str(
            r#"
            [calendar]
            pattern = "sunday-thursday"
            holidays = "holidays/"
            "#,
        )
        .unwrap();
        assert_eq!(config.calendar.pattern.as_deref(), Some("sunday-thursday"));
        assert_eq!(
            config.calendar.holidays,
            Some(PathBuf::from("holidays/"))
        );
    }

    #[test]
    fn empty_config_is_valid() {
        let config: WorkcalConfig = toml::from_str("").unwrap();
        assert!(config.calendar.pattern.is_none());
        assert!(config.calendar.holidays.is_none());
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<WorkcalConfig>("[calendar]\nweekend = 2\n").is_err());
    }
}
