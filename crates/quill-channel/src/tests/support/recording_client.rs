//! Recording language client used in tests.

use std::sync::{Arc, Mutex};

use crate::jsonrpc::ProtocolMessage;
use crate::session::{LanguageClient, MessageConnection};

/// Lifecycle events recorded by the stub client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientEvent {
    /// `start` was invoked.
    Started,
    /// `stop` was invoked.
    Stopped,
}

/// Test double that listens on the connection as soon as it starts and
/// records every message and lifecycle event it observes.
#[derive(Clone, Default)]
pub struct RecordingClient {
    shared: Arc<Mutex<ClientState>>,
}

#[derive(Default)]
struct ClientState {
    events: Vec<ClientEvent>,
    received: Vec<ProtocolMessage>,
}

impl RecordingClient {
    /// Creates a client with no recorded history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lifecycle events in the order they happened.
    pub fn events(&self) -> Vec<ClientEvent> {
        with_state(&self.shared, |state| state.events.clone())
    }

    /// Messages delivered through the connection, in order.
    pub fn received(&self) -> Vec<ProtocolMessage> {
        with_state(&self.shared, |state| state.received.clone())
    }

    /// Methods of the received messages, for compact assertions.
    pub fn received_methods(&self) -> Vec<String> {
        self.received()
            .iter()
            .map(|message| message.method().unwrap_or("<response>").to_owned())
            .collect()
    }
}

impl LanguageClient for RecordingClient {
    fn start(&mut self, connection: &MessageConnection) {
        with_state(&self.shared, |state| state.events.push(ClientEvent::Started));
        let sink = Arc::clone(&self.shared);
        connection.listen(Box::new(move |message| {
            with_state(&sink, |state| state.received.push(message));
        }));
    }

    fn stop(&mut self) {
        with_state(&self.shared, |state| state.events.push(ClientEvent::Stopped));
    }
}

fn with_state<R, F>(shared: &Arc<Mutex<ClientState>>, action: F) -> R
where
    F: FnOnce(&mut ClientState) -> R,
{
    let mut guard = shared.lock().unwrap_or_else(|poison| poison.into_inner());
    action(&mut guard)
}
