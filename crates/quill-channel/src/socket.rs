//! Seam between the transport and whatever owns the socket.
//!
//! The transport requires only a way to push one text frame; incoming
//! frames, open, and close events are delivered by the socket owner calling
//! into [`SocketInbound`](crate::SocketInbound) and
//! [`Session`](crate::Session) directly.

use std::error::Error;
use std::fmt;

use thiserror::Error;

/// Outbound capability of a full-duplex, message-oriented text socket.
///
/// One call to [`MessageSocket::send_text`] transmits exactly one frame,
/// which carries exactly one JSON-RPC message. Sends are fire-and-forget:
/// the transport never awaits delivery confirmation.
pub trait MessageSocket: Send + Sync {
    /// Sends one text frame.
    ///
    /// # Errors
    ///
    /// Returns [`SocketSendError`] when the socket cannot accept the frame.
    fn send_text(&self, frame: &str) -> Result<(), SocketSendError>;
}

impl fmt::Debug for dyn MessageSocket {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("MessageSocket")
    }
}

/// Errors reported by socket implementations on a failed send.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct SocketSendError {
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl SocketSendError {
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
