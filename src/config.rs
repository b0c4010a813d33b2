use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

#[cfg(target_os = "macos")]
const DEFAULT_OPENER: &str = "/usr/bin/open";
#[cfg(not(target_os = "macos"))]
const DEFAULT_OPENER: &str = "xdg-open";

/// Settings shared by both binaries. Every field has a default, so a missing
/// config file is not an error.
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub music: MusicConfig,
    pub reminder: ReminderConfig,
}

#[derive(Debug, Clone)]
pub struct MusicConfig {
    /// Apple Music storefront used in the search URL path.
    pub storefront: String,
    /// Program that opens the `music://` URL.
    pub opener: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ReminderConfig {
    pub timezone: TimezonePolicy,
    pub require_ordered_times: bool,
}

/// How naive `YYYY-MM-DD HH:MM` input is pinned to an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimezonePolicy {
    Local,
    Named(Tz),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            music: MusicConfig::default(),
            reminder: ReminderConfig::default(),
        }
    }
}

impl Default for MusicConfig {
    fn default() -> Self {
        Self {
            storefront: "us".to_string(),
            opener: PathBuf::from(DEFAULT_OPENER),
        }
    }
}

impl Default for ReminderConfig {
    fn default() -> Self {
        Self {
            timezone: TimezonePolicy::Local,
            require_ordered_times: true,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults if there is
    /// no config file.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content).map_err(|message| Error::Config {
            path: path.to_path_buf(),
            message,
        })
    }

    fn from_toml(content: &str) -> std::result::Result<Self, String> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| e.message().to_string())?;
        file.into_config()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("macbridge").join("config.toml"))
}

// ── TOML config types ──

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    log_level: Option<String>,
    #[serde(default)]
    music: MusicSection,
    #[serde(default)]
    reminder: ReminderSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct MusicSection {
    storefront: Option<String>,
    opener: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ReminderSection {
    timezone: Option<String>,
    require_ordered_times: Option<bool>,
}

impl ConfigFile {
    fn into_config(self) -> std::result::Result<Config, String> {
        let defaults = Config::default();

        let storefront = match self.music.storefront {
            Some(s) if is_storefront(&s) => s.to_ascii_lowercase(),
            Some(s) => return Err(format!("storefront {s:?} is not a two-letter region code")),
            None => defaults.music.storefront,
        };

        let timezone = match self.reminder.timezone.as_deref() {
            None | Some("local") => TimezonePolicy::Local,
            Some(name) => TimezonePolicy::Named(
                name.parse::<Tz>()
                    .map_err(|_| format!("unknown timezone {name:?}"))?,
            ),
        };

        let log_level = match self.log_level {
            Some(level) => {
                EnvFilter::try_new(&level)
                    .map_err(|e| format!("log_level {level:?} is not a valid filter: {e}"))?;
                level
            }
            None => defaults.log_level,
        };

        Ok(Config {
            log_level,
            music: MusicConfig {
                storefront,
                opener: self.music.opener.unwrap_or(defaults.music.opener),
            },
            reminder: ReminderConfig {
                timezone,
                require_ordered_times: self
                    .reminder
                    .require_ordered_times
                    .unwrap_or(defaults.reminder.require_ordered_times),
            },
        })
    }
}

fn is_storefront(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.log_level, "warn");
        assert_eq!(config.music.storefront, "us");
        assert_eq!(config.music.opener, PathBuf::from(DEFAULT_OPENER));
        assert_eq!(config.reminder.timezone, TimezonePolicy::Local);
        assert!(config.reminder.require_ordered_times);
    }

    #[test]
    fn reads_all_sections() {
        let config = Config::from_toml(
            r#"
            log_level = "debug"

            [music]
            storefront = "GB"
            opener = "/opt/bin/open"

            [reminder]
            timezone = "Europe/Helsinki"
            require_ordered_times = false
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.music.storefront, "gb");
        assert_eq!(config.music.opener, PathBuf::from("/opt/bin/open"));
        assert_eq!(
            config.reminder.timezone,
            TimezonePolicy::Named(chrono_tz::Europe::Helsinki)
        );
        assert!(!config.reminder.require_ordered_times);
    }

    #[test]
    fn local_keyword_means_process_timezone() {
        let config = Config::from_toml("[reminder]\ntimezone = \"local\"\n").unwrap();
        assert_eq!(config.reminder.timezone, TimezonePolicy::Local);
    }

    #[test]
    fn rejects_unknown_timezone() {
        let err = Config::from_toml("[reminder]\ntimezone = \"Mars/Olympus\"\n").unwrap_err();
        assert!(err.contains("Mars/Olympus"));
    }

    #[test]
    fn rejects_bad_storefront() {
        assert!(Config::from_toml("[music]\nstorefront = \"usa\"\n").is_err());
    }

    #[test]
    fn rejects_bad_log_level() {
        let err = Config::from_toml("log_level = \"macbridge=loud\"\n").unwrap_err();
        assert!(err.contains("log_level"));
    }

    #[test]
    fn accepts_directive_log_level() {
        let config = Config::from_toml("log_level = \"info,macbridge=debug\"\n").unwrap();
        assert_eq!(config.log_level, "info,macbridge=debug");
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_toml("[music]\nvolume = 11\n").is_err());
    }
}
