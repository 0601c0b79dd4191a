//! Error types surfaced by the editing-surface session.

use std::fmt;

use thiserror::Error;

use crate::language::LanguageIdError;
use crate::provider::ProviderError;

/// Operation being executed when an error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOperation {
    /// Applying a theme to provider and widget.
    ApplyTheme,
    /// Switching the buffer language.
    ChangeLanguage,
}

impl fmt::Display for SurfaceOperation {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::ApplyTheme => "apply-theme",
            Self::ChangeLanguage => "change-language",
        };
        formatter.write_str(label)
    }
}

/// Errors returned by [`crate::EditorSession`].
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The session was disposed before the call.
    #[error("editor session is disposed")]
    Disposed,

    /// The requested language identifier failed validation.
    #[error(transparent)]
    Language(#[from] LanguageIdError),

    /// A language-server session is already attached.
    #[error("a language-server session is already attached")]
    ClientAlreadyAttached,

    /// The grammar/theme provider failed.
    #[error("provider failed during {operation}: {source}")]
    Provider {
        /// Operation that failed.
        operation: SurfaceOperation,
        /// Underlying provider error.
        #[source]
        source: ProviderError,
    },
}

impl SurfaceError {
    /// Wraps an underlying provider failure.
    pub(crate) fn provider(operation: SurfaceOperation, source: ProviderError) -> Self {
        Self::Provider { operation, source }
    }
}
