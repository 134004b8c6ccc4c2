//! Framework-wide enumerations.
//!
//! These are closed sets of symbolic tags consumed throughout ZincX. The core
//! treats them as opaque discriminants and never relies on their numeric
//! encoding.
//!
//! Enums are grouped by subsystem:
//! - Graphics ([`RenderMode`], [`CoordinateSystem`])
//! - Widgets ([`WidgetState`], [`WidgetType`])
//! - Events and input ([`EventType`], [`KeyModifier`], [`InputDeviceType`], [`GestureType`])
//! - Compute and layout ([`ComputeBackend`], [`TaskPriority`], [`LayoutOrientation`], [`LayoutAlignment`])
//! - Resources ([`ResourceType`], [`LoadState`])
//! - Style ([`BorderStyle`], [`FontWeight`], [`TextAlignment`])
//! - Internationalization and accessibility ([`Language`], [`AccessibilityRole`])
//! - Networking ([`Protocol`], [`ConnectionState`])
//! - Debugging ([`LogLevel`], [`ProfilingCategory`])
//! - General ([`Platform`], [`ErrorCode`], [`Alignment`], [`Direction`])

use std::fmt;

use serde::{Deserialize, Serialize};

/// General alignment options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
    Top,
    Bottom,
}

/// Cardinal directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    East,
    South,
    West,
}

// =========================================================================
// Graphics
// =========================================================================

/// The active rendering mode a backend is initialized with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Text-based rendering, suitable for console environments.
    #[default]
    Text,
    /// 16-bit graphics rendering.
    Graphics16,
    /// GPU rendering through Vulkan.
    Vulkan,
}

impl RenderMode {
    /// All render modes, in declaration order.
    pub const ALL: [RenderMode; 3] = [Self::Text, Self::Graphics16, Self::Vulkan];

    /// The display name of this mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Graphics16 => "Graphics16",
            Self::Vulkan => "Vulkan",
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Screen-space or world-space coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSystem {
    #[default]
    Screen,
    World,
}

// =========================================================================
// Widgets
// =========================================================================

/// The interaction state of a drawable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    /// The default state.
    #[default]
    Normal,
    /// The pointer is over the item.
    Hovered,
    /// The item is being pressed.
    Pressed,
    /// The item cannot be interacted with.
    Disabled,
}

impl WidgetState {
    /// The display name of this state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Hovered => "Hovered",
            Self::Pressed => "Pressed",
            Self::Disabled => "Disabled",
        }
    }
}

impl fmt::Display for WidgetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Categories of widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetType {
    Button,
    TextField,
    ComboBox,
}

// =========================================================================
// Events and input
// =========================================================================

/// The type tag of an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    /// A mouse button went down.
    MouseClick,
    /// A mouse button went up.
    MouseRelease,
    /// A key was pressed.
    KeyPress,
    /// A touch contact started.
    TouchStart,
}

impl EventType {
    /// The display name of this event type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MouseClick => "MouseClick",
            Self::MouseRelease => "MouseRelease",
            Self::KeyPress => "KeyPress",
            Self::TouchStart => "TouchStart",
        }
    }

    /// Whether events of this type carry a mouse payload.
    pub fn is_mouse(&self) -> bool {
        matches!(self, Self::MouseClick | Self::MouseRelease)
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keyboard modifier held during an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyModifier {
    #[default]
    None,
    Shift,
    Ctrl,
    Alt,
}

/// The kind of device that produced an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputDeviceType {
    Mouse,
    Keyboard,
    Touchpad,
}

/// Recognized gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GestureType {
    Swipe,
    Pinch,
    Tap,
}

// =========================================================================
// Compute and layout
// =========================================================================

/// Compute backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComputeBackend {
    Vulkan,
    #[default]
    Cpu,
}

/// Priority of a compute task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

/// Orientation of a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutOrientation {
    Horizontal,
    Vertical,
}

/// Alignment of children inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutAlignment {
    #[default]
    Start,
    Center,
    End,
    Stretch,
}

// =========================================================================
// Resources
// =========================================================================

/// Kinds of managed resources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceType {
    Texture,
    Font,
    Shader,
}

/// Loading status of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Loaded,
    Failed,
}

// =========================================================================
// Style
// =========================================================================

/// Border line style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
    Light,
}

/// Horizontal alignment of text inside its bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
    Justified,
}

impl TextAlignment {
    /// All alignments, in declaration order.
    pub const ALL: [TextAlignment; 4] = [Self::Left, Self::Center, Self::Right, Self::Justified];

    /// The display name of this alignment.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Center => "Center",
            Self::Right => "Right",
            Self::Justified => "Justified",
        }
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =========================================================================
// Internationalization and accessibility
// =========================================================================

/// Supported UI languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
}

/// Accessibility role of a widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibilityRole {
    Button,
    Checkbox,
    Slider,
}

// =========================================================================
// Networking
// =========================================================================

/// Transport protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Tcp,
    Udp,
}

/// Status of a network connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionState {
    Connecting,
    Connected,
    Disconnected,
    Failed,
}

// =========================================================================
// Debugging and profiling
// =========================================================================

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Fatal,
}

impl LogLevel {
    /// The `tracing` level this log level maps to.
    ///
    /// `tracing` has no fatal level, so `Fatal` maps to `ERROR`.
    pub fn to_tracing(self) -> tracing::Level {
        match self {
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warning => tracing::Level::WARN,
            Self::Error | Self::Fatal => tracing::Level::ERROR,
        }
    }

    /// The filter directive for this level (`"debug"`, `"info"`, ...).
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Fatal => "error",
        }
    }
}

/// Categories of profiling data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfilingCategory {
    Rendering,
    Compute,
    Input,
}

// =========================================================================
// General
// =========================================================================

/// Target platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Dos,
    Win16,
    Windows,
    MacOs,
    Linux,
    Embedded,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::MacOs
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Embedded
        }
    }
}

/// Framework-wide error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Success,
    InvalidArgument,
    ResourceNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(RenderMode::default(), RenderMode::Text);
        assert_eq!(WidgetState::default(), WidgetState::Normal);
        assert_eq!(TextAlignment::default(), TextAlignment::Center);
        assert_eq!(KeyModifier::default(), KeyModifier::None);
    }

    #[test]
    fn test_event_type_is_mouse() {
        assert!(EventType::MouseClick.is_mouse());
        assert!(EventType::MouseRelease.is_mouse());
        assert!(!EventType::KeyPress.is_mouse());
        assert!(!EventType::TouchStart.is_mouse());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(RenderMode::Graphics16.to_string(), "Graphics16");
        assert_eq!(TextAlignment::Justified.to_string(), "Justified");
        assert_eq!(WidgetState::Pressed.to_string(), "Pressed");
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(LogLevel::Warning.to_tracing(), tracing::Level::WARN);
        assert_eq!(LogLevel::Fatal.to_tracing(), tracing::Level::ERROR);
        assert_eq!(LogLevel::Debug.as_filter(), "debug");
        assert!(LogLevel::Debug < LogLevel::Error);
    }
}
