use super::{Renderer, TextField};

/// No-hardware renderer used during bring-up.
#[derive(Default, Debug, Clone, Copy)]
pub struct NullRenderer;

impl NullRenderer {
    pub const fn new() -> Self {
        Self
    }
}

impl Renderer for NullRenderer {
    fn set_text(&mut self, _field: TextField, _text: &str) {}
}
