//! Session orchestration: one socket, one connection, one client.
//!
//! A [`Session`] is single-use. It starts its protocol client when the
//! socket reports open, relays frames while active, and tears everything
//! down exactly once when the socket closes. A closed session is never
//! resumed; a fresh socket requires a fresh session.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::CHANNEL_TARGET;
use crate::errors::ChannelError;
use crate::inbound::{MessageCallback, SocketInbound};
use crate::jsonrpc::ProtocolMessage;
use crate::outbound::SocketOutbound;
use crate::socket::MessageSocket;

/// Reader/writer pair bound to one socket.
///
/// The two halves are independent in data flow; they share only the
/// underlying socket resource, which neither of them owns.
pub struct MessageConnection {
    inbound: Arc<SocketInbound>,
    outbound: Arc<SocketOutbound>,
}

impl MessageConnection {
    /// Builds both channel halves over the supplied socket.
    #[must_use]
    pub fn new(socket: Arc<dyn MessageSocket>) -> Self {
        Self {
            inbound: Arc::new(SocketInbound::new()),
            outbound: Arc::new(SocketOutbound::new(socket)),
        }
    }

    /// Registers the single inbound consumer; see [`SocketInbound::listen`].
    pub fn listen(&self, callback: MessageCallback) {
        self.inbound.listen(callback);
    }

    /// Sends one protocol message; see [`SocketOutbound::write`].
    ///
    /// # Errors
    ///
    /// Propagates [`ChannelError`] from the outbound channel.
    pub fn write(&self, message: &ProtocolMessage) -> Result<(), ChannelError> {
        self.outbound.write(message)
    }

    /// Feeds one raw inbound frame from the socket.
    pub fn handle_frame(&self, raw: &str) {
        self.inbound.handle_frame(raw);
    }

    /// Closes both halves; idempotent.
    pub fn dispose(&self) {
        self.inbound.dispose();
        self.outbound.dispose();
    }

    /// The inbound half.
    #[must_use]
    pub fn inbound(&self) -> &SocketInbound {
        &self.inbound
    }

    /// The outbound half.
    #[must_use]
    pub fn outbound(&self) -> &SocketOutbound {
        &self.outbound
    }
}

/// Behaviour required from the protocol client bound to a connection.
///
/// Starting makes the client eligible to send and receive; frames that
/// arrived earlier wait in the inbound queue until the client listens.
pub trait LanguageClient: Send {
    /// Binds the client to the connection and starts it.
    fn start(&mut self, connection: &MessageConnection);

    /// Tears the client down; the connection is already unusable.
    fn stop(&mut self);
}

impl fmt::Debug for dyn LanguageClient {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LanguageClient")
    }
}

/// How the client layer should react to an isolated transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorDirective {
    /// Keep the session running.
    Continue,
    /// Tear the client down.
    Shutdown,
}

/// How the client layer should react to the connection closing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseDirective {
    /// The session is over; whoever owns the socket decides what is next.
    DoNotRestart,
    /// Reconnect with a fresh session.
    Restart,
}

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Constructed; the socket has not reported open yet.
    Idle,
    /// The client is started and traffic flows.
    Active,
    /// Terminal; the client is stopped and the connection disposed.
    Closed,
}

/// Owns one connection and one client for the lifetime of one socket.
pub struct Session {
    connection: MessageConnection,
    client: Box<dyn LanguageClient>,
    phase: SessionPhase,
}

impl Session {
    /// Builds an idle session over an open-pending socket.
    #[must_use]
    pub fn new(socket: Arc<dyn MessageSocket>, client: Box<dyn LanguageClient>) -> Self {
        Self {
            connection: MessageConnection::new(socket),
            client,
            phase: SessionPhase::Idle,
        }
    }

    /// The connection this session runs over.
    #[must_use]
    pub fn connection(&self) -> &MessageConnection {
        &self.connection
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Reacts to the socket reporting open: starts the client once.
    ///
    /// Repeated or late opens are no-ops; the transition is one way.
    pub fn handle_open(&mut self) {
        if self.phase != SessionPhase::Idle {
            debug!(
                target: CHANNEL_TARGET,
                phase = ?self.phase,
                "ignoring open on non-idle session"
            );
            return;
        }
        self.client.start(&self.connection);
        self.phase = SessionPhase::Active;
        info!(target: CHANNEL_TARGET, "language client started");
    }

    /// Feeds one raw inbound frame from the socket.
    pub fn handle_frame(&self, raw: &str) {
        self.connection.handle_frame(raw);
    }

    /// Policy for isolated transport errors during an active session.
    ///
    /// Always [`ErrorDirective::Continue`]: one failed write or dropped
    /// frame does not justify tearing down a healthy client.
    pub fn report_fault(&self, error: &ChannelError) -> ErrorDirective {
        warn!(
            target: CHANNEL_TARGET,
            error = %error,
            "transport fault; session continues"
        );
        ErrorDirective::Continue
    }

    /// Reacts to the socket closing: one-shot terminal teardown.
    ///
    /// Stops the client (when it was started), disposes both channel
    /// halves, and answers [`CloseDirective::DoNotRestart`] — reconnection
    /// policy belongs to whoever owns the socket lifecycle. Idempotent.
    pub fn handle_close(&mut self) -> CloseDirective {
        match self.phase {
            SessionPhase::Closed => {}
            SessionPhase::Active => {
                self.client.stop();
                self.connection.dispose();
                self.phase = SessionPhase::Closed;
                info!(target: CHANNEL_TARGET, "session closed");
            }
            SessionPhase::Idle => {
                self.connection.dispose();
                self.phase = SessionPhase::Closed;
                info!(target: CHANNEL_TARGET, "session closed before client start");
            }
        }
        CloseDirective::DoNotRestart
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Session")
            .field("phase", &self.phase)
            .finish_non_exhaustive()
    }
}
