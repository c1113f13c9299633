//! Companion message protocol.
//!
//! Inbound messages are dictionaries of independently-optional key/value
//! tuples; the watch applies whichever recognized keys are present.
//! Outbound there is exactly one message kind, the next-chunk request.

pub const KEY_WEATHER_TEMP: u32 = 0;
pub const KEY_SCRIPTURE_TEXT: u32 = 1;
pub const KEY_SCRIPTURE_REF: u32 = 2;
pub const KEY_SCRIPTURE_PART_CURRENT: u32 = 3;
pub const KEY_SCRIPTURE_PART_TOTAL: u32 = 4;
pub const KEY_REQUEST_NEXT_CHUNK: u32 = 5;
pub const KEY_ENABLE_SHAKE: u32 = 6;

/// Fixed marker carried by the next-chunk request.
pub const NEXT_CHUNK_MARKER: i32 = 1;

/// One tuple of a companion dictionary.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Entry<'a> {
    pub key: u32,
    pub value: Value<'a>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Value<'a> {
    Str(&'a str),
    Int(i32),
}

/// Decoded view of one inbound message. Every field is optional; absent
/// keys leave the corresponding stored value untouched.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RemoteUpdate<'a> {
    pub temperature: Option<&'a str>,
    pub scripture_text: Option<&'a str>,
    pub scripture_reference: Option<&'a str>,
    pub part_current: Option<u16>,
    pub part_total: Option<u16>,
    pub shake_enabled: Option<bool>,
}

impl RemoteUpdate<'_> {
    /// Pagination applies only as a complete pair.
    pub fn page_pair(&self) -> Option<(u16, u16)> {
        match (self.part_current, self.part_total) {
            (Some(current), Some(total)) => Some((current, total)),
            _ => None,
        }
    }

    /// True when the message carried no recognized keys.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecodeError {
    /// A recognized key carried a value of the wrong type.
    TypeMismatch { key: u32 },
    /// An integer field fell outside its representable range.
    OutOfRange { key: u32 },
}

impl core::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TypeMismatch { key } => write!(f, "wrong value type for key {}", key),
            Self::OutOfRange { key } => write!(f, "value out of range for key {}", key),
        }
    }
}

/// Decode one inbound dictionary. Unknown keys are skipped; any malformed
/// recognized tuple fails the whole message so nothing partial applies.
pub fn decode<'a>(entries: &[Entry<'a>]) -> Result<RemoteUpdate<'a>, DecodeError> {
    let mut update = RemoteUpdate::default();

    for entry in entries {
        match entry.key {
            KEY_WEATHER_TEMP => update.temperature = Some(expect_str(entry)?),
            KEY_SCRIPTURE_TEXT => update.scripture_text = Some(expect_str(entry)?),
            KEY_SCRIPTURE_REF => update.scripture_reference = Some(expect_str(entry)?),
            KEY_SCRIPTURE_PART_CURRENT => update.part_current = Some(expect_part(entry)?),
            KEY_SCRIPTURE_PART_TOTAL => update.part_total = Some(expect_part(entry)?),
            KEY_ENABLE_SHAKE => update.shake_enabled = Some(expect_int(entry)? != 0),
            _ => {}
        }
    }

    Ok(update)
}

fn expect_str<'a>(entry: &Entry<'a>) -> Result<&'a str, DecodeError> {
    match entry.value {
        Value::Str(s) => Ok(s),
        Value::Int(_) => Err(DecodeError::TypeMismatch { key: entry.key }),
    }
}

fn expect_int(entry: &Entry<'_>) -> Result<i32, DecodeError> {
    match entry.value {
        Value::Int(v) => Ok(v),
        Value::Str(_) => Err(DecodeError::TypeMismatch { key: entry.key }),
    }
}

fn expect_part(entry: &Entry<'_>) -> Result<u16, DecodeError> {
    let raw = expect_int(entry)?;
    u16::try_from(raw).map_err(|_| DecodeError::OutOfRange { key: entry.key })
}

/// The one outbound message kind: ask the companion for the next chunk.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutboundRequest {
    NextChunk,
}

impl OutboundRequest {
    /// Encode as the single fixed marker tuple.
    pub fn encode(self) -> Entry<'static> {
        match self {
            Self::NextChunk => Entry {
                key: KEY_REQUEST_NEXT_CHUNK,
                value: Value::Int(NEXT_CHUNK_MARKER),
            },
        }
    }
}
