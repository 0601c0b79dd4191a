//! Inbound half of the transport: the socket's incoming message stream.
//!
//! Frames that arrive before a consumer listens are buffered raw, in
//! arrival order, and flushed synchronously on the first `listen` call.
//! Parsing is deferred until flush so a channel disposed before anyone
//! listens never does decode work. Malformed frames are dropped and
//! logged; one bad frame from a language server must not end an otherwise
//! healthy session.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::CHANNEL_TARGET;
use crate::jsonrpc::{ProtocolMessage, decode_frame};
use crate::state::ChannelState;

/// Consumer callback invoked once per successfully decoded inbound message.
pub type MessageCallback = Box<dyn FnMut(ProtocolMessage) + Send>;

/// Inbound channel bound to one socket's receive direction.
///
/// The state transition and queue drain on `listen` happen under one lock,
/// so a concurrent [`SocketInbound::handle_frame`] cannot interleave with
/// the flush. The callback runs under that same lock and must not call
/// back into the channel that invoked it.
pub struct SocketInbound {
    inner: Mutex<Inner>,
}

struct Inner {
    state: ChannelState,
    pending: VecDeque<String>,
    callback: Option<MessageCallback>,
}

impl SocketInbound {
    /// Creates a channel in the `Initial` state with an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                state: ChannelState::Initial,
                pending: VecDeque::new(),
                callback: None,
            }),
        }
    }

    /// Registers the single consumer callback.
    ///
    /// On the first call the channel transitions to `Listening` and every
    /// buffered frame is decoded and delivered to the callback in original
    /// arrival order, synchronously, before this method returns. Calling
    /// again, or calling on a closed channel, is a silent no-op.
    pub fn listen(&self, callback: MessageCallback) {
        let mut inner = self.lock();
        if inner.state != ChannelState::Initial {
            debug!(
                target: CHANNEL_TARGET,
                state = ?inner.state,
                "ignoring listen on non-initial channel"
            );
            return;
        }

        inner.state = ChannelState::Listening;
        inner.callback = Some(callback);
        let buffered = std::mem::take(&mut inner.pending);
        if let Some(consumer) = inner.callback.as_mut() {
            for raw in buffered {
                dispatch(consumer, &raw);
            }
        }
    }

    /// Accepts one raw frame from the socket.
    ///
    /// Before a consumer listens the frame is queued unparsed; while
    /// listening it is decoded and delivered; after closure it is dropped.
    pub fn handle_frame(&self, raw: &str) {
        let mut inner = self.lock();
        match inner.state {
            ChannelState::Initial => inner.pending.push_back(raw.to_owned()),
            ChannelState::Listening => {
                if let Some(consumer) = inner.callback.as_mut() {
                    dispatch(consumer, raw);
                }
            }
            ChannelState::Closed => {
                debug!(target: CHANNEL_TARGET, "dropping frame on closed channel");
            }
        }
    }

    /// Closes the channel unconditionally.
    ///
    /// Clears the queue and releases the callback. Idempotent; later
    /// `listen` and `handle_frame` calls are no-ops.
    pub fn dispose(&self) {
        let mut inner = self.lock();
        inner.state = ChannelState::Closed;
        inner.pending.clear();
        inner.callback = None;
    }

    /// Current lifecycle state, for callers that care.
    #[must_use]
    pub fn state(&self) -> ChannelState {
        self.lock().state
    }

    #[cfg(test)]
    pub(crate) fn pending_len(&self) -> usize {
        self.lock().pending.len()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking consumer callback must not wedge the channel.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SocketInbound {
    fn default() -> Self {
        Self::new()
    }
}

fn dispatch(consumer: &mut MessageCallback, raw: &str) {
    match decode_frame(raw) {
        Ok(message) => consumer(message),
        Err(error) => warn!(
            target: CHANNEL_TARGET,
            error = %error,
            "dropping malformed inbound frame"
        ),
    }
}
