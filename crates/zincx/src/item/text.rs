//! A text label item.

use zincx_core::TextAlignment;
use zincx_render::{Color, Rect, RenderBackend, RenderResult};

use super::{GraphicsItem, ItemBase};

/// A string drawn inside the item bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    base: ItemBase,
    text: String,
    color: Color,
    alignment: TextAlignment,
}

impl TextItem {
    /// White, centered text.
    pub fn new(rect: Rect, text: impl Into<String>) -> Self {
        Self {
            base: ItemBase::new(rect),
            text: text.into(),
            color: Color::WHITE,
            alignment: TextAlignment::default(),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_alignment(mut self, alignment: TextAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn alignment(&self) -> TextAlignment {
        self.alignment
    }
}

impl GraphicsItem for TextItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        backend.draw_text(&self.text, self.bounds(), self.color, self.alignment)
    }
}
