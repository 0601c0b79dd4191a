//! Session-scoped JSON-RPC message transport for a language-server client.
//!
//! The crate turns one bidirectional, message-oriented text socket into a
//! reliable, ordered message channel: the inbound half buffers frames that
//! arrive before a consumer listens and replays them in arrival order; the
//! outbound half normalises specific outgoing protocol messages before
//! serialising them onto the socket. A [`Session`] ties both halves to one
//! protocol client and owns the one-shot open/close lifecycle.
//!
//! The socket itself stays behind the [`MessageSocket`] seam so tests and
//! embedders can supply lightweight implementations; the transport never
//! dials, reconnects, or otherwise manages the socket's lifetime.

mod errors;
mod inbound;
mod jsonrpc;
mod outbound;
mod session;
mod socket;
mod state;

#[cfg(test)]
mod tests;

pub use errors::ChannelError;
pub use inbound::{MessageCallback, SocketInbound};
pub use jsonrpc::{
    JsonRpcError, JsonRpcNotification, JsonRpcRequest, JsonRpcResponse, ProtocolMessage,
    RequestId, decode_frame, encode_frame, next_request_id,
};
pub use outbound::SocketOutbound;
pub use session::{
    CloseDirective, ErrorDirective, LanguageClient, MessageConnection, Session, SessionPhase,
};
pub use socket::{MessageSocket, SocketSendError};
pub use state::ChannelState;

pub(crate) const CHANNEL_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::channel");
