//! Boundary trait for the grammar/theme provider collaborator.

use std::error::Error;
use std::fmt;

use serde_json::Value;

use thiserror::Error;

use crate::language::LanguageId;
use crate::theme::ThemeDescription;

/// Tokenizer artifact and editor configuration for one language.
///
/// Both payloads are opaque to the surface: the provider produced them and
/// the editor widget consumes them.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageInfo {
    /// Tokens provider backing syntax highlighting.
    pub tokens: Value,
    /// Language configuration (brackets, comments, folding, …).
    pub configuration: Value,
}

/// Behaviour required from the external grammar/theme provider.
///
/// The transport core has no dependency on this seam; only the session
/// glue calls it.
pub trait GrammarThemeProvider {
    /// Resolves the tokenizer artifact and configuration for a language.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the language is unknown to the
    /// provider or its grammar fails to load.
    fn fetch_language_info(&mut self, language: &LanguageId)
    -> Result<LanguageInfo, ProviderError>;

    /// Installs a theme into the tokenizer registry.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the theme payload is unusable.
    fn set_theme(&mut self, theme: &ThemeDescription) -> Result<(), ProviderError>;

    /// Regenerates and injects the provider's token CSS.
    fn inject_css(&mut self);
}

impl fmt::Debug for dyn GrammarThemeProvider {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("GrammarThemeProvider")
    }
}

/// Errors reported by grammar/theme provider implementations.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ProviderError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ProviderError {
    /// Builds an error without an underlying source.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Builds an error that wraps an underlying source.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl Into<Box<dyn Error + Send + Sync>>,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    /// Human-friendly description without the optional source.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
