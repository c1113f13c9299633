use super::OutboundChannel;
use crate::protocol::OutboundRequest;

/// No-transport channel used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullChannel;

impl NullChannel {
    pub const fn new() -> Self {
        Self
    }
}

impl OutboundChannel for NullChannel {
    type Error = core::convert::Infallible;

    fn send(&mut self, _request: OutboundRequest) -> Result<(), Self::Error> {
        Ok(())
    }
}
