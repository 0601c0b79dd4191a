//! Boundary trait for the text-editing widget collaborator.

use std::fmt;

use crate::language::LanguageId;
use crate::provider::LanguageInfo;

/// Behaviour required from the external editor widget.
///
/// The widget is created by the embedder with a language, initial text,
/// and theme name; the session only steers it afterwards.
pub trait EditorWidget {
    /// Replaces the buffer contents.
    fn set_text(&mut self, text: &str);

    /// Switches the buffer to another language using a resolved artifact.
    fn set_language(&mut self, language: &LanguageId, info: &LanguageInfo);

    /// Applies a theme by name; the provider has already installed it.
    fn set_theme(&mut self, name: &str);
}

impl fmt::Debug for dyn EditorWidget {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("EditorWidget")
    }
}
