//! Editing-surface session glue around the transport.
//!
//! The highlighting pipeline, grammar/theme provider, and editor widget
//! are external collaborators; this crate pins them behind narrow traits
//! and replaces the window-scoped handles of browser-editor bootstraps
//! with an explicit [`EditorSession`] that has a single-owner
//! `create → use → dispose` lifecycle. It also owns telemetry
//! initialisation for the whole surface.

mod errors;
mod language;
mod provider;
mod session;
pub mod telemetry;
mod theme;
mod widget;

pub use errors::{SurfaceError, SurfaceOperation};
pub use language::{LanguageId, LanguageIdError};
pub use provider::{GrammarThemeProvider, LanguageInfo, ProviderError};
pub use session::EditorSession;
pub use theme::{ThemeDescription, ThemeKind};
pub use widget::EditorWidget;

pub(crate) const SURFACE_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::surface");
