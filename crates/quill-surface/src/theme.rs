//! Theme payloads handed to the grammar provider and widget.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Base flavour a theme builds on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    /// Dark base.
    Dark,
    /// Light base.
    Light,
}

/// A theme as shipped by an editor-extension bundle.
///
/// `colors` maps UI colour keys (`editor.foreground`, …) to hex values;
/// `token_colors` holds the TextMate token rules as opaque JSON, because
/// only the grammar provider interprets them.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ThemeDescription {
    /// Display name of the theme.
    pub name: String,
    /// Base flavour.
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    /// UI colour assignments.
    #[serde(default)]
    pub colors: BTreeMap<String, String>,
    /// TextMate token rules, passed through to the provider untouched.
    #[serde(default, rename = "tokenColors")]
    pub token_colors: Vec<Value>,
}

impl ThemeDescription {
    /// Token rules for the tokenizer registry: the shipped rules plus a
    /// trailing default rule carrying the editor foreground/background, so
    /// unstyled scopes fall back to the theme's base colours.
    #[must_use]
    pub fn registry_settings(&self) -> Vec<Value> {
        let mut settings = self.token_colors.clone();
        settings.push(json!({
            "settings": {
                "foreground": self.colors.get("editor.foreground"),
                "background": self.colors.get("editor.background"),
            }
        }));
        settings
    }
}
