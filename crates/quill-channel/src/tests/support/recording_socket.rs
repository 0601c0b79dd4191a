//! Recording socket double used in tests.

use std::sync::{Arc, Mutex};

use crate::socket::{MessageSocket, SocketSendError};

/// Test double that records every frame pushed through it and can be
/// switched into a failing mode.
#[derive(Clone, Default)]
pub struct RecordingSocket {
    shared: Arc<Mutex<SocketState>>,
}

#[derive(Default)]
struct SocketState {
    sent: Vec<String>,
    failing: bool,
}

impl RecordingSocket {
    /// Creates a socket that accepts every frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent send fail.
    pub fn start_failing(&self) {
        with_state(&self.shared, |state| state.failing = true);
    }

    /// Frames sent so far, in order.
    pub fn sent(&self) -> Vec<String> {
        with_state(&self.shared, |state| state.sent.clone())
    }
}

impl MessageSocket for RecordingSocket {
    fn send_text(&self, frame: &str) -> Result<(), SocketSendError> {
        with_state(&self.shared, |state| {
            if state.failing {
                return Err(SocketSendError::new("recording socket is failing"));
            }
            state.sent.push(frame.to_owned());
            Ok(())
        })
    }
}

fn with_state<R, F>(shared: &Arc<Mutex<SocketState>>, action: F) -> R
where
    F: FnOnce(&mut SocketState) -> R,
{
    let mut guard = shared.lock().unwrap_or_else(|poison| poison.into_inner());
    action(&mut guard)
}
