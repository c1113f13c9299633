//! Latest-known remote content, each field independently bounded.

use heapless::String;
use log::debug;

pub const TEMPERATURE_BYTES: usize = 7;
pub const SCRIPTURE_TEXT_BYTES: usize = 127;
pub const SCRIPTURE_REF_BYTES: usize = 31;

const FALLBACK_TEMPERATURE: &str = "N/A";
const FALLBACK_SCRIPTURE_TEXT: &str = "Whoever is patient has great understanding, \
but one who is quick-tempered displays folly.";
const FALLBACK_SCRIPTURE_REF: &str = "Prov 14:29";

/// Scripture pagination as a `current/total` pair.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PagePair {
    pub current: u16,
    pub total: u16,
}

/// Result of a bounded set operation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetOutcome {
    pub changed: bool,
    pub truncated: bool,
}

/// Display-relevant content the companion keeps current. Setters are the
/// only way a field changes; oversized input is clipped to the bound on a
/// char boundary, never an error.
#[derive(Debug, Clone)]
pub struct ContentStore {
    temperature: String<TEMPERATURE_BYTES>,
    scripture_text: String<SCRIPTURE_TEXT_BYTES>,
    scripture_reference: String<SCRIPTURE_REF_BYTES>,
    scripture_page: PagePair,
    shake_enabled: bool,
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentStore {
    pub fn new() -> Self {
        let mut store = Self {
            temperature: String::new(),
            scripture_text: String::new(),
            scripture_reference: String::new(),
            scripture_page: PagePair {
                current: 1,
                total: 1,
            },
            shake_enabled: true,
        };
        store.set_temperature(FALLBACK_TEMPERATURE);
        store.set_scripture_text(FALLBACK_SCRIPTURE_TEXT);
        store.set_scripture_reference(FALLBACK_SCRIPTURE_REF);
        store
    }

    pub fn set_temperature(&mut self, value: &str) -> SetOutcome {
        set_bounded(&mut self.temperature, value, "temperature")
    }

    pub fn set_scripture_text(&mut self, value: &str) -> SetOutcome {
        set_bounded(&mut self.scripture_text, value, "scripture_text")
    }

    pub fn set_scripture_reference(&mut self, value: &str) -> SetOutcome {
        set_bounded(&mut self.scripture_reference, value, "scripture_reference")
    }

    pub fn set_scripture_page(&mut self, current: u16, total: u16) -> SetOutcome {
        let next = PagePair { current, total };
        let changed = next != self.scripture_page;
        self.scripture_page = next;
        SetOutcome {
            changed,
            truncated: false,
        }
    }

    pub fn set_shake_enabled(&mut self, enabled: bool) -> SetOutcome {
        let changed = enabled != self.shake_enabled;
        self.shake_enabled = enabled;
        SetOutcome {
            changed,
            truncated: false,
        }
    }

    pub fn temperature(&self) -> &str {
        &self.temperature
    }

    pub fn scripture_text(&self) -> &str {
        &self.scripture_text
    }

    pub fn scripture_reference(&self) -> &str {
        &self.scripture_reference
    }

    pub fn scripture_page(&self) -> PagePair {
        self.scripture_page
    }

    pub fn shake_enabled(&self) -> bool {
        self.shake_enabled
    }
}

fn set_bounded<const N: usize>(slot: &mut String<N>, value: &str, field: &str) -> SetOutcome {
    let clipped = clip_to_bound(value, N);
    let truncated = clipped.len() < value.len();
    if truncated {
        debug!(
            "store: {} clipped from {} to {} bytes",
            field,
            value.len(),
            clipped.len()
        );
    }

    if slot.as_str() == clipped {
        return SetOutcome {
            changed: false,
            truncated,
        };
    }

    slot.clear();
    let _ = slot.push_str(clipped);
    SetOutcome {
        changed: true,
        truncated,
    }
}

fn clip_to_bound(value: &str, bound: usize) -> &str {
    if value.len() <= bound {
        return value;
    }

    let mut end = bound;
    while end > 0 && !value.is_char_boundary(end) {
        end -= 1;
    }
    &value[..end]
}
