use api::ModeToken;

use crate::channels::ChannelBank;
use crate::protocol;

/// Single-slot holder for the next outbound mode token.
///
/// Commands coalesce rather than queue: a newly confirmed gesture overwrites
/// whatever token is still waiting, and building a line consumes the slot
/// even when the write that follows never happens.
#[derive(Debug, Clone, Default)]
pub struct CommandCoalescer {
    pending: Option<ModeToken>,
}

impl CommandCoalescer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, token: ModeToken) {
        self.pending = Some(token);
    }

    pub fn pending(&self) -> Option<ModeToken> {
        self.pending
    }

    /// Render the next outbound line from the live channel values, consuming
    /// the pending token.
    pub fn build_line(&mut self, bank: &ChannelBank) -> String {
        protocol::encode_command_line(bank, self.pending.take())
    }
}
