//! ZincX - drawable items, graphics views and event dispatch.
//!
//! This is the main crate: it re-exports [`zincx_core`] and the common
//! [`zincx_render`] types, and adds the item arena, the graphics view and the
//! event manager.
//!
//! # Example
//!
//! ```
//! use zincx::item::{ButtonItem, ItemArena};
//! use zincx::{Event, EventManager, GraphicsView, Point, Rect, RenderMode, WidgetState};
//! use zincx::render::RecordingBackend;
//!
//! fn main() -> zincx::Result<()> {
//!     let mut items = ItemArena::new();
//!     let ok = items.insert(ButtonItem::new(Rect::new(10, 10, 20, 3), "OK"));
//!
//!     let (backend, log) = RecordingBackend::with_log();
//!     let mut view = GraphicsView::new(backend, RenderMode::Text)?;
//!     view.add_item(ok);
//!
//!     let mut events = EventManager::new();
//!     events.register_listener(ok, |_| Ok(()));
//!     events.queue_event(Event::mouse_click(Point::new(12, 11)).with_target(ok));
//!     events.dispatch_events(&mut items).into_result()?;
//!     assert_eq!(items.state(ok)?, WidgetState::Pressed);
//!
//!     view.render(&items).into_result()?;
//!     assert_eq!(log.draw_commands().len(), 3);
//!     Ok(())
//! }
//! ```

mod error;
pub mod event;
pub mod event_manager;
pub mod item;
pub mod view;

pub use zincx_core::*;

/// Rendering backends and geometry.
pub mod render {
    pub use zincx_render::*;
}

pub use zincx_render::{
    Circle, Color, ConsoleBackend, Line, Padding, Point, Rect, RenderBackend, RenderError,
    RenderResult, Size,
};

pub use error::{BoxError, Error, EventError, ItemError, ListenerResult, Result};
pub use event::{Event, EventKind, MouseEvent};
pub use event_manager::{DispatchFailure, DispatchReport, EventManager, EventSender, ListenerId};
pub use item::{GraphicsItem, ItemArena, ItemBase, ItemId};
pub use view::{DrawFailure, GraphicsView, RenderReport};
