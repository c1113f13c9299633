//! Outbound transport seam toward the companion device.

use crate::protocol::OutboundRequest;

pub mod mock;

/// Message transport toward the companion app.
pub trait OutboundChannel {
    type Error;

    /// Queue one request for delivery. A failure is reported by the
    /// caller and never retried.
    fn send(&mut self, request: OutboundRequest) -> Result<(), Self::Error>;
}
