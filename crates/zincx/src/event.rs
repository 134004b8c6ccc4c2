//! Input events.
//!
//! An [`Event`] is a tagged value: the [`EventKind`] variant carries the
//! payload for its type, so a mouse event can never be read as a key press.
//! Common metadata (timestamp, source device, target item) lives on the
//! outer [`Event`].

use zincx_core::{EventType, InputDeviceType, KeyModifier};
use zincx_render::Point;

use crate::item::ItemId;

/// Payload of a mouse button event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    /// Position in view coordinates.
    pub position: Point,
    /// Button identifier (`0` is the primary button).
    pub button: i32,
    /// Modifier held at the time of the event.
    pub modifiers: KeyModifier,
}

impl MouseEvent {
    pub fn new(position: Point, button: i32) -> Self {
        Self {
            position,
            button,
            modifiers: KeyModifier::None,
        }
    }

    pub fn with_modifiers(mut self, modifiers: KeyModifier) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// The type-specific part of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    MouseClick(MouseEvent),
    MouseRelease(MouseEvent),
    KeyPress,
    TouchStart,
}

impl EventKind {
    pub fn event_type(&self) -> EventType {
        match self {
            Self::MouseClick(_) => EventType::MouseClick,
            Self::MouseRelease(_) => EventType::MouseRelease,
            Self::KeyPress => EventType::KeyPress,
            Self::TouchStart => EventType::TouchStart,
        }
    }

    /// The device that normally produces this kind of event.
    pub fn default_device(&self) -> InputDeviceType {
        match self {
            Self::MouseClick(_) | Self::MouseRelease(_) => InputDeviceType::Mouse,
            Self::KeyPress => InputDeviceType::Keyboard,
            Self::TouchStart => InputDeviceType::Touchpad,
        }
    }
}

/// An input event waiting in, or being dispatched from, the event queue.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    timestamp: u64,
    device: InputDeviceType,
    target: Option<ItemId>,
    kind: EventKind,
}

impl Event {
    /// Create an event with a zero timestamp, no target and the default
    /// device for `kind`.
    pub fn new(kind: EventKind) -> Self {
        Self {
            timestamp: 0,
            device: kind.default_device(),
            target: None,
            kind,
        }
    }

    /// A primary-button click at `position`.
    pub fn mouse_click(position: Point) -> Self {
        Self::new(EventKind::MouseClick(MouseEvent::new(position, 0)))
    }

    /// A primary-button release at `position`.
    pub fn mouse_release(position: Point) -> Self {
        Self::new(EventKind::MouseRelease(MouseEvent::new(position, 0)))
    }

    pub fn key_press() -> Self {
        Self::new(EventKind::KeyPress)
    }

    pub fn touch_start() -> Self {
        Self::new(EventKind::TouchStart)
    }

    /// Bind the item the event originated on.
    pub fn with_target(mut self, target: ItemId) -> Self {
        self.target = Some(target);
        self
    }

    /// Stamp the event, in milliseconds.
    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Override the source device. Mouse events always come from the mouse,
    /// so this has no effect on them.
    pub fn with_device(mut self, device: InputDeviceType) -> Self {
        if !self.is_mouse() {
            self.device = device;
        }
        self
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn device(&self) -> InputDeviceType {
        self.device
    }

    pub fn target(&self) -> Option<ItemId> {
        self.target
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }

    /// The mouse payload, if this is a mouse event.
    pub fn mouse(&self) -> Option<&MouseEvent> {
        match &self.kind {
            EventKind::MouseClick(mouse) | EventKind::MouseRelease(mouse) => Some(mouse),
            EventKind::KeyPress | EventKind::TouchStart => None,
        }
    }

    pub fn is_mouse(&self) -> bool {
        self.mouse().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{ItemArena, TextItem};
    use zincx_render::Rect;

    #[test]
    fn test_default_devices() {
        assert_eq!(Event::mouse_click(Point::ZERO).device(), InputDeviceType::Mouse);
        assert_eq!(Event::mouse_release(Point::ZERO).device(), InputDeviceType::Mouse);
        assert_eq!(Event::key_press().device(), InputDeviceType::Keyboard);
        assert_eq!(Event::touch_start().device(), InputDeviceType::Touchpad);
    }

    #[test]
    fn test_new_event_metadata() {
        let event = Event::mouse_click(Point::new(3, 4));
        assert_eq!(event.timestamp(), 0);
        assert_eq!(event.target(), None);
        assert_eq!(event.event_type(), EventType::MouseClick);

        let mouse = event.mouse().unwrap();
        assert_eq!(mouse.position, Point::new(3, 4));
        assert_eq!(mouse.button, 0);
        assert_eq!(mouse.modifiers, KeyModifier::None);
    }

    #[test]
    fn test_builders() {
        let mut items = ItemArena::new();
        let id = items.insert(TextItem::new(Rect::new(0, 0, 1, 1), "x"));
        let event = Event::key_press()
            .with_timestamp(42)
            .with_target(id)
            .with_device(InputDeviceType::Touchpad);
        assert_eq!(event.timestamp(), 42);
        assert_eq!(event.target(), Some(id));
        assert_eq!(event.device(), InputDeviceType::Touchpad);
        assert!(!event.is_mouse());
        assert!(event.mouse().is_none());
    }

    #[test]
    fn test_mouse_device_is_fixed() {
        let event = Event::mouse_release(Point::ZERO).with_device(InputDeviceType::Keyboard);
        assert_eq!(event.device(), InputDeviceType::Mouse);
        assert_eq!(event.event_type(), EventType::MouseRelease);
    }

    #[test]
    fn test_mouse_modifiers() {
        let mouse = MouseEvent::new(Point::ZERO, 1).with_modifiers(KeyModifier::Shift);
        let kind = EventKind::MouseClick(mouse);
        let event = Event::new(kind);
        assert_eq!(event.mouse().unwrap().modifiers, KeyModifier::Shift);
        assert_eq!(event.mouse().unwrap().button, 1);
    }
}
