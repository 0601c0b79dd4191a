//! Single-owner editing session tying the collaborators together.

use std::fmt;

use quill_config::LaunchOptions;
use tracing::{debug, info};

use crate::SURFACE_TARGET;
use crate::errors::{SurfaceError, SurfaceOperation};
use crate::language::LanguageId;
use crate::provider::GrammarThemeProvider;
use crate::theme::ThemeDescription;
use crate::widget::EditorWidget;

/// One editing surface: a widget, a grammar/theme provider, and at most
/// one attached language-server session.
///
/// The session is single-use. Every operation after [`Self::dispose`]
/// answers [`SurfaceError::Disposed`]; disposal itself is idempotent and
/// closes the attached language-server session, if any.
pub struct EditorSession {
    provider: Box<dyn GrammarThemeProvider>,
    widget: Box<dyn EditorWidget>,
    lsp: Option<quill_channel::Session>,
    language: LanguageId,
    theme_name: String,
    disposed: bool,
}

impl EditorSession {
    /// Builds a session from launch options and the two collaborators.
    ///
    /// The widget arrives already constructed with its initial text,
    /// language, and theme; this only validates the requested language
    /// and records where the surface starts from.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Language`] when the configured language
    /// identifier is malformed.
    pub fn create(
        options: &LaunchOptions,
        provider: Box<dyn GrammarThemeProvider>,
        widget: Box<dyn EditorWidget>,
    ) -> Result<Self, SurfaceError> {
        let language: LanguageId = options.language.parse()?;
        info!(
            target: SURFACE_TARGET,
            language = %language,
            theme = %options.theme,
            "editor session created"
        );
        Ok(Self {
            provider,
            widget,
            lsp: None,
            language,
            theme_name: options.theme.clone(),
            disposed: false,
        })
    }

    /// Installs a theme in the provider, refreshes its CSS, and points
    /// the widget at the theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Disposed`] after disposal and
    /// [`SurfaceError::Provider`] when the provider rejects the theme.
    pub fn apply_theme(&mut self, theme: &ThemeDescription) -> Result<(), SurfaceError> {
        self.guard()?;
        self.provider
            .set_theme(theme)
            .map_err(|source| SurfaceError::provider(SurfaceOperation::ApplyTheme, source))?;
        self.provider.inject_css();
        self.widget.set_theme(&theme.name);
        self.theme_name = theme.name.clone();
        debug!(target: SURFACE_TARGET, theme = %theme.name, "theme applied");
        Ok(())
    }

    /// Switches the buffer to another language.
    ///
    /// The provider resolves the tokenizer artifact first; the widget is
    /// only retargeted once that succeeds, so a failed switch leaves the
    /// surface on its previous language.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Disposed`] after disposal,
    /// [`SurfaceError::Language`] for a malformed identifier, and
    /// [`SurfaceError::Provider`] when the grammar cannot be resolved.
    pub fn change_language(&mut self, language: &str) -> Result<(), SurfaceError> {
        self.guard()?;
        let language: LanguageId = language.parse()?;
        let info = self
            .provider
            .fetch_language_info(&language)
            .map_err(|source| SurfaceError::provider(SurfaceOperation::ChangeLanguage, source))?;
        self.widget.set_language(&language, &info);
        debug!(target: SURFACE_TARGET, language = %language, "language changed");
        self.language = language;
        Ok(())
    }

    /// Replaces the buffer contents.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Disposed`] after disposal.
    pub fn set_text(&mut self, text: &str) -> Result<(), SurfaceError> {
        self.guard()?;
        self.widget.set_text(text);
        Ok(())
    }

    /// Attaches the language-server session serving this surface.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError::Disposed`] after disposal and
    /// [`SurfaceError::ClientAlreadyAttached`] when a session is already
    /// attached; detaching requires disposing the whole surface.
    pub fn attach_language_server(
        &mut self,
        session: quill_channel::Session,
    ) -> Result<(), SurfaceError> {
        self.guard()?;
        if self.lsp.is_some() {
            return Err(SurfaceError::ClientAlreadyAttached);
        }
        self.lsp = Some(session);
        info!(target: SURFACE_TARGET, "language server attached");
        Ok(())
    }

    /// The attached language-server session, when one exists.
    #[must_use]
    pub fn language_server(&self) -> Option<&quill_channel::Session> {
        self.lsp.as_ref()
    }

    /// Mutable access to the attached language-server session.
    pub fn language_server_mut(&mut self) -> Option<&mut quill_channel::Session> {
        self.lsp.as_mut()
    }

    /// Current buffer language.
    #[must_use]
    pub fn language(&self) -> &LanguageId {
        &self.language
    }

    /// Name of the theme currently applied.
    #[must_use]
    pub fn theme_name(&self) -> &str {
        self.theme_name.as_str()
    }

    /// Whether the session has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Tears the surface down; idempotent.
    ///
    /// Closes the attached language-server session (which stops its
    /// client and disposes both transport halves) and marks the surface
    /// disposed. The widget and provider stay with their owner.
    pub fn dispose(&mut self) {
        if self.disposed {
            debug!(target: SURFACE_TARGET, "ignoring dispose of disposed session");
            return;
        }
        if let Some(mut lsp) = self.lsp.take() {
            lsp.handle_close();
        }
        self.disposed = true;
        info!(target: SURFACE_TARGET, "editor session disposed");
    }

    fn guard(&self) -> Result<(), SurfaceError> {
        if self.disposed {
            Err(SurfaceError::Disposed)
        } else {
            Ok(())
        }
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EditorSession")
            .field("language", &self.language)
            .field("theme_name", &self.theme_name)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use quill_channel::{
        LanguageClient, MessageConnection, MessageSocket, SessionPhase, SocketSendError,
    };
    use serde_json::json;

    use super::*;
    use crate::provider::{LanguageInfo, ProviderError};
    use crate::theme::ThemeKind;

    #[derive(Debug, Clone, PartialEq)]
    enum SurfaceEvent {
        ThemeInstalled(String),
        CssInjected,
        LanguageFetched(String),
        WidgetText(String),
        WidgetLanguage(String),
        WidgetTheme(String),
    }

    type EventLog = Arc<Mutex<Vec<SurfaceEvent>>>;

    fn push(log: &EventLog, event: SurfaceEvent) {
        log.lock().expect("event log poisoned").push(event);
    }

    struct StubProvider {
        log: EventLog,
        failing: bool,
    }

    impl GrammarThemeProvider for StubProvider {
        fn fetch_language_info(
            &mut self,
            language: &LanguageId,
        ) -> Result<LanguageInfo, ProviderError> {
            if self.failing {
                return Err(ProviderError::new(format!("no grammar for {language}")));
            }
            push(
                &self.log,
                SurfaceEvent::LanguageFetched(language.to_string()),
            );
            Ok(LanguageInfo {
                tokens: json!({"language": language.as_str()}),
                configuration: json!({}),
            })
        }

        fn set_theme(&mut self, theme: &ThemeDescription) -> Result<(), ProviderError> {
            if self.failing {
                return Err(ProviderError::new("registry rejected theme"));
            }
            push(&self.log, SurfaceEvent::ThemeInstalled(theme.name.clone()));
            Ok(())
        }

        fn inject_css(&mut self) {
            push(&self.log, SurfaceEvent::CssInjected);
        }
    }

    struct StubWidget {
        log: EventLog,
    }

    impl EditorWidget for StubWidget {
        fn set_text(&mut self, text: &str) {
            push(&self.log, SurfaceEvent::WidgetText(text.to_owned()));
        }

        fn set_language(&mut self, language: &LanguageId, _info: &LanguageInfo) {
            push(
                &self.log,
                SurfaceEvent::WidgetLanguage(language.to_string()),
            );
        }

        fn set_theme(&mut self, name: &str) {
            push(&self.log, SurfaceEvent::WidgetTheme(name.to_owned()));
        }
    }

    #[derive(Debug)]
    struct NullSocket;

    impl MessageSocket for NullSocket {
        fn send_text(&self, _frame: &str) -> Result<(), SocketSendError> {
            Ok(())
        }
    }

    struct NullClient;

    impl LanguageClient for NullClient {
        fn start(&mut self, _connection: &MessageConnection) {}
        fn stop(&mut self) {}
    }

    fn lsp_session() -> quill_channel::Session {
        quill_channel::Session::new(Arc::new(NullSocket), Box::new(NullClient))
    }

    fn surface(failing_provider: bool) -> (EditorSession, EventLog) {
        let log: EventLog = Arc::default();
        let provider = StubProvider {
            log: Arc::clone(&log),
            failing: failing_provider,
        };
        let widget = StubWidget {
            log: Arc::clone(&log),
        };
        let session = EditorSession::create(
            &LaunchOptions::default(),
            Box::new(provider),
            Box::new(widget),
        )
        .expect("default options should validate");
        (session, log)
    }

    fn sample_theme() -> ThemeDescription {
        ThemeDescription {
            name: String::from("Nightfall"),
            kind: ThemeKind::Dark,
            colors: std::collections::BTreeMap::new(),
            token_colors: Vec::new(),
        }
    }

    #[test]
    fn create_rejects_invalid_language() {
        let (session, _log) = surface(false);
        drop(session);

        let options = LaunchOptions {
            language: String::from("not a language"),
            ..LaunchOptions::default()
        };
        let log: EventLog = Arc::default();
        let error = EditorSession::create(
            &options,
            Box::new(StubProvider {
                log: Arc::clone(&log),
                failing: false,
            }),
            Box::new(StubWidget { log }),
        )
        .expect_err("should reject");
        assert!(matches!(error, SurfaceError::Language(_)));
    }

    #[test]
    fn apply_theme_reaches_provider_then_widget() {
        let (mut session, log) = surface(false);

        session
            .apply_theme(&sample_theme())
            .expect("theme should apply");

        assert_eq!(
            *log.lock().expect("event log poisoned"),
            vec![
                SurfaceEvent::ThemeInstalled(String::from("Nightfall")),
                SurfaceEvent::CssInjected,
                SurfaceEvent::WidgetTheme(String::from("Nightfall")),
            ]
        );
        assert_eq!(session.theme_name(), "Nightfall");
    }

    #[test]
    fn failed_theme_leaves_widget_untouched() {
        let (mut session, log) = surface(true);

        let error = session
            .apply_theme(&sample_theme())
            .expect_err("provider should fail");

        assert!(matches!(
            error,
            SurfaceError::Provider {
                operation: SurfaceOperation::ApplyTheme,
                ..
            }
        ));
        assert!(log.lock().expect("event log poisoned").is_empty());
        assert_eq!(session.theme_name(), "vs-dark");
    }

    #[test]
    fn change_language_resolves_grammar_before_retargeting() {
        let (mut session, log) = surface(false);

        session
            .change_language("rust")
            .expect("language should change");

        assert_eq!(
            *log.lock().expect("event log poisoned"),
            vec![
                SurfaceEvent::LanguageFetched(String::from("rust")),
                SurfaceEvent::WidgetLanguage(String::from("rust")),
            ]
        );
        assert_eq!(session.language().as_str(), "rust");
    }

    #[test]
    fn failed_language_switch_keeps_previous_language() {
        let (mut session, log) = surface(true);

        let error = session
            .change_language("rust")
            .expect_err("provider should fail");

        assert!(matches!(
            error,
            SurfaceError::Provider {
                operation: SurfaceOperation::ChangeLanguage,
                ..
            }
        ));
        assert!(log.lock().expect("event log poisoned").is_empty());
        assert_eq!(session.language().as_str(), "json");
    }

    #[test]
    fn at_most_one_language_server_attaches() {
        let (mut session, _log) = surface(false);

        session
            .attach_language_server(lsp_session())
            .expect("first attach should succeed");
        let error = session
            .attach_language_server(lsp_session())
            .expect_err("second attach should fail");

        assert!(matches!(error, SurfaceError::ClientAlreadyAttached));
        assert!(session.language_server().is_some());
    }

    #[test]
    fn dispose_closes_the_language_server_and_is_terminal() {
        let (mut session, _log) = surface(false);
        let mut lsp = lsp_session();
        lsp.handle_open();
        assert_eq!(lsp.phase(), SessionPhase::Active);
        session
            .attach_language_server(lsp)
            .expect("attach should succeed");

        session.dispose();
        session.dispose();

        assert!(session.is_disposed());
        assert!(session.language_server().is_none());
        assert!(matches!(
            session.set_text("late"),
            Err(SurfaceError::Disposed)
        ));
        assert!(matches!(
            session.change_language("rust"),
            Err(SurfaceError::Disposed)
        ));
        assert!(matches!(
            session.apply_theme(&sample_theme()),
            Err(SurfaceError::Disposed)
        ));
        assert!(matches!(
            session.attach_language_server(lsp_session()),
            Err(SurfaceError::Disposed)
        ));
    }

    #[test]
    fn set_text_forwards_to_the_widget() {
        let (mut session, log) = surface(false);

        session.set_text("{}").expect("set_text should succeed");

        assert_eq!(
            *log.lock().expect("event log poisoned"),
            vec![SurfaceEvent::WidgetText(String::from("{}"))]
        );
    }
}
