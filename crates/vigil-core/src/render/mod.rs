//! Renderer seam: named text fields on the fixed-size screen.

pub mod mock;

/// Text slots the dispatcher writes. Geometry, fonts, and colors belong
/// to the board renderer.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TextField {
    Time,
    AmPmUpper,
    AmPmLower,
    DateLine,
    ScriptureBody,
    ScriptureRef,
    PageIndicator,
}

/// External renderer. Every write is an unconditional overwrite; the
/// renderer redraws on write and tolerates redundant identical values.
pub trait Renderer {
    fn set_text(&mut self, field: TextField, text: &str);
}
