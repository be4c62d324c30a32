//! Client configuration.
//!
//! All settings live in a single `config.toml` file at
//! `~/.config/confsched/config.toml` by default. Every section is optional;
//! an absent file means "DEF CON 33 from the public Firestore database,
//! Las Vegas time".

use std::path::{Path, PathBuf};
use std::time::Duration;

use confsched_core::{DEFAULT_TIMEZONE, FormatOptions, TimeFormat, parse_timezone};
use confsched_providers::FirestoreConfig;
use confsched_providers::firestore::{
    DEFAULT_BASE_URL, DEFAULT_CONFERENCE, DEFAULT_PROJECT, DEFAULT_TIMEOUT_SECS,
};
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, ClientResult};

// ---------------------------------------------------------------------------
// ClientConfig (config.toml)
// ---------------------------------------------------------------------------

/// Configuration for the confsched client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// IANA timezone used to group events into days.
    pub timezone: String,

    /// Debug mode.
    pub debug: bool,

    /// Where events come from.
    pub source: SourceSettings,

    /// Tag catalog settings.
    pub catalog: CatalogSettings,

    /// Display settings.
    pub display: DisplaySettings,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE.to_string(),
            debug: false,
            source: SourceSettings::default(),
            catalog: CatalogSettings::default(),
            display: DisplaySettings::default(),
        }
    }
}

/// Kind of event source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    /// Query the Firestore REST API.
    #[default]
    Firestore,
    /// Read a saved `runQuery` response.
    File,
}

/// Event source settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSettings {
    pub kind: SourceKind,
    pub project: String,
    pub conference: String,
    pub base_url: String,
    /// Request timeout in seconds.
    pub timeout: u64,
    /// Saved response, for `kind = "file"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            kind: SourceKind::Firestore,
            project: DEFAULT_PROJECT.to_string(),
            conference: DEFAULT_CONFERENCE.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            path: None,
        }
    }
}

impl SourceSettings {
    /// Converts to the Firestore source configuration.
    pub fn firestore_config(&self) -> FirestoreConfig {
        FirestoreConfig::default()
            .with_base_url(&self.base_url)
            .with_project(&self.project)
            .with_conference(&self.conference)
            .with_timeout(Duration::from_secs(self.timeout))
    }
}

/// Tag catalog settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// JSON catalog replacing the built-in one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Display settings for output formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Print JSON instead of text.
    pub json: bool,

    /// Maximum title length (truncated with ellipsis).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_title_length: Option<usize>,

    /// 24-hour or 12-hour clock.
    pub time_format: TimeFormat,

    /// Separator between hours and minutes.
    pub hour_separator: String,

    /// Append the organizer/subject tag to each event line.
    pub show_detail_tag: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let options = FormatOptions::default();
        Self {
            json: false,
            max_title_length: options.max_title_length,
            time_format: options.time_format,
            hour_separator: options.hour_separator,
            show_detail_tag: options.show_detail_tag,
        }
    }
}

impl DisplaySettings {
    /// Converts to formatter options.
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_title_length: self.max_title_length,
            hour_separator: self.hour_separator.clone(),
            time_format: self.time_format,
            show_detail_tag: self.show_detail_tag,
        }
    }
}

impl ClientConfig {
    /// Loads configuration from the default path.
    pub fn load() -> Result<Self, String> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("failed to read config: {}", e))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("failed to parse config: {}", e))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_config_dir().join("config.toml")
    }

    /// Returns the default configuration directory.
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("confsched")
    }

    /// Checks the settings that would otherwise only fail at load time.
    pub fn validate(&self) -> ClientResult<()> {
        parse_timezone(&self.timezone).map_err(|e| ClientError::Config(e.to_string()))?;

        match self.source.kind {
            SourceKind::Firestore => {
                self.source
                    .firestore_config()
                    .query_url()
                    .map_err(|e| ClientError::Config(e.message().to_string()))?;
                if self.source.timeout == 0 {
                    return Err(ClientError::Config(
                        "source timeout must be at least 1 second".to_string(),
                    ));
                }
            }
            SourceKind::File => match self.source.path {
                Some(ref path) if !path.is_file() => {
                    return Err(ClientError::Config(format!(
                        "source file {} does not exist",
                        path.display()
                    )));
                }
                Some(_) => {}
                None => {
                    return Err(ClientError::Config(
                        "source kind \"file\" requires a path".to_string(),
                    ));
                }
            },
        }

        if let Some(ref path) = self.catalog.path {
            if !path.is_file() {
                return Err(ClientError::Config(format!(
                    "catalog file {} does not exist",
                    path.display()
                )));
            }
        }

        if self.display.max_title_length == Some(0) {
            return Err(ClientError::Config(
                "max_title_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    mod parsing {
        use super::*;

        #[test]
        fn empty_file_uses_defaults() {
            let config = ClientConfig::from_toml("").unwrap();
            assert_eq!(config.timezone, "America/Los_Angeles");
            assert_eq!(config.source.kind, SourceKind::Firestore);
            assert_eq!(config.source.conference, "DEFCON33");
            assert_eq!(config.source.timeout, 30);
            assert!(config.catalog.path.is_none());
            assert!(!config.display.json);
            assert_eq!(config.display.time_format, TimeFormat::H24);
        }

        #[test]
        fn full_file() {
            let config = ClientConfig::from_toml(
                r#"
timezone = "Europe/Paris"
debug = true

[source]
kind = "file"
path = "/tmp/events.json"

[catalog]
path = "/tmp/tags.json"

[display]
json = true
max_title_length = 40
time_format = "h12"
hour_separator = "h"
show_detail_tag = false
"#,
            )
            .unwrap();

            assert_eq!(config.timezone, "Europe/Paris");
            assert!(config.debug);
            assert_eq!(config.source.kind, SourceKind::File);
            assert_eq!(config.source.path, Some(PathBuf::from("/tmp/events.json")));
            assert_eq!(config.source.project, "junctor-hackertracker");
            assert_eq!(config.catalog.path, Some(PathBuf::from("/tmp/tags.json")));

            let options = config.display.format_options();
            assert_eq!(options.max_title_length, Some(40));
            assert_eq!(options.time_format, TimeFormat::H12);
            assert_eq!(options.hour_separator, "h");
            assert!(!options.show_detail_tag);
        }

        #[test]
        fn unknown_source_kind() {
            let err = ClientConfig::from_toml("[source]\nkind = \"ftp\"\n").unwrap_err();
            assert!(err.starts_with("failed to parse config"));
        }

        #[test]
        fn firestore_settings() {
            let config = ClientConfig::from_toml(
                "[source]\nconference = \"DEFCON32\"\ntimeout = 5\n",
            )
            .unwrap();
            let firestore = config.source.firestore_config();
            assert_eq!(firestore.conference, "DEFCON32");
            assert_eq!(firestore.timeout, Duration::from_secs(5));
        }

        #[test]
        fn dump_roundtrip() {
            let config = ClientConfig::default();
            let text = toml::to_string_pretty(&config).unwrap();
            let parsed = ClientConfig::from_toml(&text).unwrap();
            assert_eq!(parsed.timezone, config.timezone);
            assert_eq!(parsed.source.base_url, config.source.base_url);
        }
    }

    mod loading {
        use super::*;

        #[test]
        fn load_from_file() {
            let mut file = tempfile::NamedTempFile::new().unwrap();
            writeln!(file, "timezone = \"UTC\"").unwrap();
            let config = ClientConfig::load_from(file.path()).unwrap();
            assert_eq!(config.timezone, "UTC");
        }

        #[test]
        fn load_missing_file() {
            let dir = tempfile::tempdir().unwrap();
            let err = ClientConfig::load_from(&dir.path().join("missing.toml")).unwrap_err();
            assert!(err.starts_with("failed to read config"));
        }

        #[test]
        fn default_path_ends_with_app_dir() {
            let path = ClientConfig::default_path();
            assert!(path.ends_with("confsched/config.toml"));
        }
    }

    mod validation {
        use super::*;

        #[test]
        fn defaults_are_valid() {
            assert!(ClientConfig::default().validate().is_ok());
        }

        #[test]
        fn bad_timezone() {
            let config = ClientConfig {
                timezone: "Mars/Olympus_Mons".to_string(),
                ..Default::default()
            };
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("Mars/Olympus_Mons"));
        }

        #[test]
        fn file_source_needs_existing_path() {
            let mut config = ClientConfig::default();
            config.source.kind = SourceKind::File;
            assert!(config.validate().is_err());

            let dir = tempfile::tempdir().unwrap();
            config.source.path = Some(dir.path().join("absent.json"));
            assert!(config.validate().is_err());

            let file = tempfile::NamedTempFile::new().unwrap();
            config.source.path = Some(file.path().to_path_buf());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn bad_base_url() {
            let mut config = ClientConfig::default();
            config.source.base_url = "no scheme".to_string();
            assert!(matches!(config.validate(), Err(ClientError::Config(_))));
        }

        #[test]
        fn zero_timeout_and_title_length() {
            let mut config = ClientConfig::default();
            config.source.timeout = 0;
            assert!(config.validate().is_err());

            let mut config = ClientConfig::default();
            config.display.max_title_length = Some(0);
            assert!(config.validate().is_err());
        }

        #[test]
        fn missing_catalog_file() {
            let mut config = ClientConfig::default();
            config.catalog.path = Some(PathBuf::from("/definitely/not/here/tags.json"));
            assert!(config.validate().is_err());
        }
    }
}
