//! Error types surfaced by the outbound channel.
//!
//! Inbound decode failures never reach this module: the reader drops
//! malformed frames and keeps the session alive, so only writers have
//! errors worth returning to a caller.

use thiserror::Error;

use crate::socket::SocketSendError;

/// Errors returned by [`SocketOutbound::write`](crate::SocketOutbound::write).
#[derive(Debug, Error)]
pub enum ChannelError {
    /// The channel was disposed before the call.
    #[error("channel is disposed")]
    Disposed,

    /// The outgoing message could not be serialised.
    #[error("failed to encode outgoing message: {0}")]
    Encode(#[from] serde_json::Error),

    /// The socket refused the outbound frame. Fatal to this write only;
    /// the session is not torn down.
    #[error("socket send failed: {source}")]
    Send {
        /// The error reported by the socket implementation.
        #[source]
        source: SocketSendError,
    },
}
