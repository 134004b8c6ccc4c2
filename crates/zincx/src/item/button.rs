//! A push button item.
//!
//! The button paints a background whose color follows its [`WidgetState`],
//! a border, and a centered label inset by the button padding. Pressing and
//! releasing are driven by the event manager's state rule; the button itself
//! holds no event logic.

use zincx_core::{TextAlignment, WidgetState};
use zincx_render::{Color, Padding, Rect, RenderBackend, RenderResult};

use super::{GraphicsItem, ItemBase};

/// Background colors per state, plus the border and label colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPalette {
    pub normal: Color,
    pub hovered: Color,
    pub pressed: Color,
    pub disabled: Color,
    pub border: Color,
    pub label: Color,
}

impl ButtonPalette {
    /// The background for `state`.
    pub fn background(&self, state: WidgetState) -> Color {
        match state {
            WidgetState::Normal => self.normal,
            WidgetState::Hovered => self.hovered,
            WidgetState::Pressed => self.pressed,
            WidgetState::Disabled => self.disabled,
        }
    }
}

impl Default for ButtonPalette {
    fn default() -> Self {
        Self {
            normal: Color::DARK_GRAY,
            hovered: Color::GRAY,
            pressed: Color::BLUE,
            disabled: Color::BLACK,
            border: Color::LIGHT_GRAY,
            label: Color::WHITE,
        }
    }
}

/// A clickable button with a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonItem {
    base: ItemBase,
    label: String,
    padding: Padding,
    palette: ButtonPalette,
}

impl ButtonItem {
    pub const DEFAULT_PADDING: Padding = Padding::symmetric(2, 1);

    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            base: ItemBase::new(rect),
            label: label.into(),
            padding: Self::DEFAULT_PADDING,
            palette: ButtonPalette::default(),
        }
    }

    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_palette(mut self, palette: ButtonPalette) -> Self {
        self.palette = palette;
        self
    }

    /// Start out disabled.
    pub fn disabled(mut self) -> Self {
        self.base.set_state(WidgetState::Disabled);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn palette(&self) -> &ButtonPalette {
        &self.palette
    }

    /// The area the label is drawn into.
    pub fn label_bounds(&self) -> Rect {
        self.bounds().deflate(&self.padding)
    }
}

impl GraphicsItem for ButtonItem {
    fn base(&self) -> &ItemBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut ItemBase {
        &mut self.base
    }

    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()> {
        let bounds = self.bounds();
        backend.fill_rect(bounds, self.palette.background(self.state()))?;
        backend.draw_rect(bounds, self.palette.border)?;
        backend.draw_text(
            &self.label,
            self.label_bounds(),
            self.palette.label,
            TextAlignment::Center,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zincx_render::{DrawCommand, RecordingBackend};

    #[test]
    fn test_label_is_padded() {
        let button = ButtonItem::new(Rect::new(10, 10, 20, 5), "OK");
        assert_eq!(button.label_bounds(), Rect::new(12, 11, 16, 3));

        let button = button.with_padding(Padding::uniform(0));
        assert_eq!(button.label_bounds(), button.bounds());
    }

    #[test]
    fn test_background_follows_state() {
        let palette = ButtonPalette::default();
        let mut button = ButtonItem::new(Rect::new(0, 0, 8, 3), "Go");

        for state in [
            WidgetState::Normal,
            WidgetState::Hovered,
            WidgetState::Pressed,
            WidgetState::Disabled,
        ] {
            button.set_state(state);
            let (mut backend, log) = RecordingBackend::with_log();
            button.draw(&mut backend).unwrap();

            let commands = log.commands();
            assert_eq!(commands.len(), 3);
            assert_eq!(
                commands[0],
                DrawCommand::FillRect {
                    rect: button.bounds(),
                    color: palette.background(state),
                }
            );
            assert!(matches!(
                &commands[2],
                DrawCommand::Text { text, alignment: TextAlignment::Center, .. } if text == "Go"
            ));
        }
    }

    #[test]
    fn test_draw_stops_at_first_failure() {
        let (mut backend, log) = RecordingBackend::with_log();
        backend.fail_draws(true);
        let button = ButtonItem::new(Rect::new(0, 0, 8, 3), "Go");
        assert!(button.draw(&mut backend).is_err());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn test_disabled_builder() {
        let button = ButtonItem::new(Rect::new(0, 0, 8, 3), "Go").disabled();
        assert_eq!(button.state(), WidgetState::Disabled);
    }
}
