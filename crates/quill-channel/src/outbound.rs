//! Outbound half of the transport: structured messages onto the socket.
//!
//! One `write` is one socket send; there is no buffering, batching, or
//! retry, and a failed send is fatal to that call alone. The only
//! in-flight mutation is the `initialize` normalisation: the surface runs
//! without a meaningful process identity, and a real pid would leak local
//! environment detail to the remote server, so `params.processId` is
//! forced to null before the frame leaves.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde_json::Value;

use crate::errors::ChannelError;
use crate::jsonrpc::{ProtocolMessage, encode_frame};
use crate::socket::MessageSocket;

/// Method whose outgoing params are normalised before send.
const INITIALIZE_METHOD: &str = "initialize";

/// The one field the writer is allowed to touch.
const PROCESS_ID_FIELD: &str = "processId";

/// Outbound channel bound to one socket's send direction.
pub struct SocketOutbound {
    socket: Mutex<Option<Arc<dyn MessageSocket>>>,
}

impl SocketOutbound {
    /// Creates a writer over the supplied socket.
    #[must_use]
    pub fn new(socket: Arc<dyn MessageSocket>) -> Self {
        Self {
            socket: Mutex::new(Some(socket)),
        }
    }

    /// Normalises, serialises, and sends one protocol message.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError::Disposed`] after [`SocketOutbound::dispose`],
    /// [`ChannelError::Encode`] when serialisation fails, and
    /// [`ChannelError::Send`] when the socket refuses the frame. None of
    /// these tear the session down.
    pub fn write(&self, message: &ProtocolMessage) -> Result<(), ChannelError> {
        let socket = self.lock().clone().ok_or(ChannelError::Disposed)?;
        let mut outgoing = message.clone();
        scrub_process_id(&mut outgoing);
        let frame = encode_frame(&outgoing)?;
        socket
            .send_text(&frame)
            .map_err(|source| ChannelError::Send { source })
    }

    /// Releases the writer's socket reference; idempotent.
    pub fn dispose(&self) {
        *self.lock() = None;
    }

    /// Whether the writer has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.lock().is_none()
    }

    fn lock(&self) -> MutexGuard<'_, Option<Arc<dyn MessageSocket>>> {
        self.socket.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Forces `params.processId` to null on an outgoing `initialize` message.
///
/// The transform touches only this one known field; every other message
/// passes through structurally unchanged.
fn scrub_process_id(message: &mut ProtocolMessage) {
    let Some((method, params)) = message.method_and_params_mut() else {
        return;
    };
    if method != INITIALIZE_METHOD {
        return;
    }
    if let Some(Value::Object(fields)) = params {
        fields.insert(PROCESS_ID_FIELD.to_owned(), Value::Null);
    }
}
