//! Lifecycle state of the inbound channel.

/// Lifecycle of the inbound channel.
///
/// `Initial` becomes `Listening` exactly once, when a consumer attaches;
/// either state becomes `Closed` on socket closure or disposal. `Closed`
/// is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// No consumer yet; inbound frames queue unparsed.
    Initial,
    /// A consumer is attached; inbound frames are decoded and delivered.
    Listening,
    /// The channel is finished; inbound frames are dropped.
    Closed,
}

impl ChannelState {
    /// Whether the channel has reached its terminal state.
    #[must_use]
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed)
    }
}
