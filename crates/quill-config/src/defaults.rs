//! Default values shared by the surface and its callers.

/// Default log filter expression used by telemetry initialisation.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Language the surface opens with when the caller does not choose one.
pub const DEFAULT_LANGUAGE: &str = "json";

/// Theme the surface opens with when the caller does not choose one.
pub const DEFAULT_THEME: &str = "vs-dark";

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Owned default language identifier.
pub fn default_language_string() -> String {
    DEFAULT_LANGUAGE.to_owned()
}

/// Owned default theme name.
pub fn default_theme_string() -> String {
    DEFAULT_THEME.to_owned()
}
