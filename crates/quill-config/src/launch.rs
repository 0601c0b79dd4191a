use serde::{Deserialize, Serialize};

use crate::defaults;
use crate::endpoint::ServerEndpoint;
use crate::logging::LogSettings;

/// Options the caller assembles before creating an editing session.
///
/// The endpoint is optional: a session without one is a plain highlighted
/// editor with no language-server connection.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct LaunchOptions {
    /// Identifier of the language the buffer opens with.
    pub language: String,
    /// Name of the theme applied at creation time.
    pub theme: String,
    /// Address of the language server, when one should be attached.
    pub endpoint: Option<ServerEndpoint>,
    /// Logging configuration for the session.
    pub logging: LogSettings,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            language: defaults::default_language_string(),
            theme: defaults::default_theme_string(),
            endpoint: None,
            logging: LogSettings::default(),
        }
    }
}
