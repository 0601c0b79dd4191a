//! Session under test together with its observable doubles.

use std::sync::Arc;

use crate::session::Session;

use super::{RecordingClient, RecordingSocket};

/// Bundles a session with handles onto its socket and client doubles.
pub struct TestWorld {
    /// Socket double observed by outbound assertions.
    pub socket: RecordingSocket,
    /// Client double observed by inbound and lifecycle assertions.
    pub client: RecordingClient,
    /// The session under test.
    pub session: Session,
}

impl TestWorld {
    /// Builds an idle session over fresh doubles.
    pub fn new() -> Self {
        let socket = RecordingSocket::new();
        let client = RecordingClient::new();
        let session = Session::new(
            Arc::new(socket.clone()),
            Box::new(client.clone()),
        );
        Self {
            socket,
            client,
            session,
        }
    }
}
