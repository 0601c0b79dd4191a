//! Validated language identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a language known to the grammar provider.
///
/// Identifiers are lower-case ASCII with digits, `-`, `.` and `+`
/// permitted after the first letter (`rust`, `objective-c`, `c++`). The
/// set of valid languages is open: which identifiers the provider can
/// actually resolve is its own concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageId(String);

impl LanguageId {
    /// The identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl From<LanguageId> for String {
    fn from(id: LanguageId) -> Self {
        id.0
    }
}

impl TryFrom<String> for LanguageId {
    type Error = LanguageIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Errors raised when parsing language identifiers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid language identifier '{0}'")]
pub struct LanguageIdError(String);

impl LanguageIdError {
    /// Returns the input that failed to parse.
    #[must_use]
    pub fn input(&self) -> &str {
        self.0.as_str()
    }
}

impl FromStr for LanguageId {
    type Err = LanguageIdError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let normalised = input.trim().to_ascii_lowercase();
        let mut characters = normalised.chars();
        let starts_with_letter = characters
            .next()
            .is_some_and(|first| first.is_ascii_lowercase());
        let rest_is_valid = characters
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '.' | '+'));
        if starts_with_letter && rest_is_valid {
            Ok(Self(normalised))
        } else {
            Err(LanguageIdError(input.to_owned()))
        }
    }
}
