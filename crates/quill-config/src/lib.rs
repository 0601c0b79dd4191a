//! Declarative configuration shared by the editing surface and transport.
//!
//! Resolution of *which* language server to talk to, and how the session
//! should present itself (language, theme, logging), are caller concerns.
//! This crate gives those decisions a typed home so the transport and
//! surface crates only ever consume validated values.

mod defaults;
mod endpoint;
mod launch;
mod logging;

pub use defaults::{DEFAULT_LANGUAGE, DEFAULT_LOG_FILTER, DEFAULT_THEME};
pub use endpoint::{EndpointParseError, ServerEndpoint};
pub use launch::LaunchOptions;
pub use logging::{LogFormat, LogFormatParseError, LogSettings};
