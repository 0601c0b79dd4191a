use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::defaults;

/// Supported logging output formats.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LogFormat {
    /// Structured JSON suitable for ingestion by logging stacks.
    #[default]
    Json,
    /// Human-readable single line output.
    Compact,
}

/// Errors encountered while parsing a [`LogFormat`] from text.
pub type LogFormatParseError = strum::ParseError;

/// Logging configuration consumed by telemetry initialisation.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LogSettings {
    /// Filter expression in `tracing_subscriber::EnvFilter` syntax.
    pub filter: String,
    /// Output format for emitted events.
    pub format: LogFormat,
    /// Optional log file; events go to stderr when absent.
    pub file: Option<Utf8PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: defaults::default_log_filter_string(),
            format: LogFormat::default(),
            file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_format_case_insensitively() {
        let format: LogFormat = "COMPACT".parse().unwrap();
        assert_eq!(format, LogFormat::Compact);
    }

    #[test]
    fn default_settings_use_info_filter() {
        let settings = LogSettings::default();
        assert_eq!(settings.filter, "info");
        assert_eq!(settings.format, LogFormat::Json);
        assert!(settings.file.is_none());
    }

    #[test]
    fn deserialises_partial_settings() {
        let settings: LogSettings =
            serde_json::from_str(r#"{"format":"compact"}"#).unwrap();
        assert_eq!(settings.format, LogFormat::Compact);
        assert_eq!(settings.filter, "info");
    }
}
