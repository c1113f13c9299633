//! Watch-face application: navigation state machine and field dispatch.

use core::fmt::Write;

use heapless::String;
use log::{debug, warn};

use crate::{
    channel::OutboundChannel,
    clock::{self, DateReading, WallClock},
    input::{ShakeEvent, TickEvent, UnitsChanged},
    protocol::{self, Entry, OutboundRequest, RemoteUpdate},
    render::{Renderer, TextField},
    store::ContentStore,
};

/// How long manual navigation mode lasts after the most recent shake.
pub const MANUAL_MODE_TIMEOUT_MS: u64 = 120_000;

const PAGE_TEXT_BYTES: usize = 12;
const PLACEHOLDER_TIME: &str = "00:00";

/// Navigation mode for paginated scripture content.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NavState {
    /// Content advances only when the companion pushes a new chunk.
    Automatic,
    /// Entered on an accepted shake; reverts when the expiry fires.
    Manual { expires_at_ms: u64 },
}

/// One-shot timer the platform schedules on the app's behalf. Each
/// request carries a generation; only the latest generation's expiry is
/// honored, so superseded timers cancel by going stale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TimerRequest {
    pub fire_at_ms: u64,
    pub generation: u32,
}

/// Core application state, owned by the platform's single-threaded event
/// loop. All handlers complete synchronously.
pub struct WatchfaceApp<CH, RD>
where
    CH: OutboundChannel,
    RD: Renderer,
{
    channel: CH,
    renderer: RD,
    store: ContentStore,
    nav: NavState,
    timer_generation: u32,
    pending_timer: Option<TimerRequest>,
    current_date: Option<DateReading>,
}

include!("handlers.rs");
include!("view.rs");
