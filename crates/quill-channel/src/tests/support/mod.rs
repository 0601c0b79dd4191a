//! Shared fixtures and helpers for transport tests.

mod recording_client;
mod recording_socket;
mod world;

pub use recording_client::{ClientEvent, RecordingClient};
pub use recording_socket::RecordingSocket;
pub use world::TestWorld;

/// Builds the raw frame for a notification with the supplied method.
#[must_use]
pub fn notification_frame(method: &str) -> String {
    format!(r#"{{"jsonrpc":"2.0","method":"{method}"}}"#)
}
