//! Drawable items and the arena that owns them.
//!
//! A drawable item is anything implementing [`GraphicsItem`]: it exposes its
//! geometry and [`WidgetState`] through an [`ItemBase`] and knows how to draw
//! itself through the [`RenderBackend`] abstraction.
//!
//! Items live in an [`ItemArena`] and are addressed by [`ItemId`]. Views and
//! the event manager store ids, never references, so an item removed from the
//! arena turns into a failed lookup instead of a dangling pointer.
//!
//! ```
//! use zincx::item::{ItemArena, RectItem};
//! use zincx::{Color, Rect, WidgetState};
//!
//! let mut items = ItemArena::new();
//! let id = items.insert(RectItem::filled(Rect::new(0, 0, 10, 10), Color::RED));
//!
//! items.set_state(id, WidgetState::Hovered).unwrap();
//! assert_eq!(items.state(id).unwrap(), WidgetState::Hovered);
//!
//! items.remove(id);
//! assert!(items.state(id).is_err());
//! ```

mod button;
mod shapes;
mod text;

pub use button::{ButtonItem, ButtonPalette};
pub use shapes::{EllipseItem, LineItem, PolygonItem, RectItem};
pub use text::TextItem;

use slotmap::{new_key_type, SlotMap};
use zincx_core::WidgetState;
use zincx_render::{Point, Rect, RenderBackend, RenderResult, Size};

use crate::error::ItemError;

new_key_type! {
    /// A stable handle to an item in an [`ItemArena`].
    ///
    /// Ids stay valid until the item is removed; a removed id is never
    /// reused for a different item.
    pub struct ItemId;
}

/// State shared by every item: geometry and interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemBase {
    position: Point,
    size: Size,
    state: WidgetState,
}

impl ItemBase {
    /// Create a base occupying `rect`, in the `Normal` state.
    pub fn new(rect: Rect) -> Self {
        Self {
            position: rect.origin(),
            size: rect.size(),
            state: WidgetState::Normal,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// The rectangle covered by the item.
    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(self.position, self.size)
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    /// Replace the state. No transition rules are checked.
    pub fn set_state(&mut self, state: WidgetState) {
        self.state = state;
    }
}

/// A node that can be painted by a view.
///
/// Implementors provide [`base`](Self::base)/[`base_mut`](Self::base_mut) and
/// [`draw`](Self::draw); the geometry and state accessors are provided.
pub trait GraphicsItem {
    /// Shared geometry and state.
    fn base(&self) -> &ItemBase;

    /// Mutable access to the shared geometry and state.
    fn base_mut(&mut self) -> &mut ItemBase;

    /// Render this item using only the backend abstraction.
    fn draw(&self, backend: &mut dyn RenderBackend) -> RenderResult<()>;

    /// A name for diagnostics.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn position(&self) -> Point {
        self.base().position()
    }

    fn set_position(&mut self, position: Point) {
        self.base_mut().set_position(position);
    }

    fn size(&self) -> Size {
        self.base().size()
    }

    fn bounds(&self) -> Rect {
        self.base().bounds()
    }

    fn state(&self) -> WidgetState {
        self.base().state()
    }

    /// Replace the state unconditionally.
    fn set_state(&mut self, state: WidgetState) {
        self.base_mut().set_state(state);
    }
}

/// Arena owning every item, keyed by [`ItemId`].
#[derive(Default)]
pub struct ItemArena {
    items: SlotMap<ItemId, Box<dyn GraphicsItem>>,
}

impl ItemArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self {
            items: SlotMap::with_key(),
        }
    }

    /// Take ownership of an item and return its id.
    pub fn insert(&mut self, item: impl GraphicsItem + 'static) -> ItemId {
        self.insert_boxed(Box::new(item))
    }

    /// Take ownership of an already boxed item.
    pub fn insert_boxed(&mut self, item: Box<dyn GraphicsItem>) -> ItemId {
        let type_name = item.type_name();
        let id = self.items.insert(item);
        tracing::trace!(target: "zincx::item", ?id, type_name, "inserted item");
        id
    }

    /// Remove an item, returning it if it was present.
    ///
    /// Views and listeners that still hold `id` will report lookup failures
    /// for it from now on.
    pub fn remove(&mut self, id: ItemId) -> Option<Box<dyn GraphicsItem>> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            tracing::trace!(target: "zincx::item", ?id, "removed item");
        }
        removed
    }

    pub fn get(&self, id: ItemId) -> Option<&dyn GraphicsItem> {
        self.items.get(id).map(|item| item.as_ref())
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut (dyn GraphicsItem + 'static)> {
        self.items.get_mut(id).map(|item| item.as_mut())
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over all items. Order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, &dyn GraphicsItem)> + '_ {
        self.items.iter().map(|(id, item)| (id, item.as_ref()))
    }

    /// The state of an item.
    pub fn state(&self, id: ItemId) -> Result<WidgetState, ItemError> {
        self.get(id)
            .map(|item| item.state())
            .ok_or(ItemError::NotFound(id))
    }

    /// Set the state of an item.
    pub fn set_state(&mut self, id: ItemId, state: WidgetState) -> Result<(), ItemError> {
        let item = self.get_mut(id).ok_or(ItemError::NotFound(id))?;
        let previous = item.state();
        item.set_state(state);
        tracing::trace!(target: "zincx::item", ?id, %previous, %state, "item state set");
        Ok(())
    }
}

impl std::fmt::Debug for ItemArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.items.iter().map(|(id, item)| (id, item.type_name())))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zincx_render::Color;

    #[test]
    fn test_base_geometry() {
        let mut base = ItemBase::new(Rect::new(3, 4, 10, 20));
        assert_eq!(base.position(), Point::new(3, 4));
        assert_eq!(base.size(), Size::new(10, 20));
        assert_eq!(base.state(), WidgetState::Normal);

        base.set_position(Point::new(0, 1));
        assert_eq!(base.bounds(), Rect::new(0, 1, 10, 20));
    }

    #[test]
    fn test_set_state_is_unconditional() {
        let mut item = RectItem::filled(Rect::new(0, 0, 1, 1), Color::RED);
        item.set_state(WidgetState::Disabled);
        item.set_state(WidgetState::Pressed);
        assert_eq!(item.state(), WidgetState::Pressed);
        item.set_state(WidgetState::Pressed);
        assert_eq!(item.state(), WidgetState::Pressed);
    }

    #[test]
    fn test_arena_lookup() {
        let mut items = ItemArena::new();
        let a = items.insert(RectItem::filled(Rect::new(0, 0, 1, 1), Color::RED));
        let b = items.insert(TextItem::new(Rect::new(0, 0, 5, 1), "b"));
        assert_eq!(items.len(), 2);
        assert!(items.contains(a));
        assert_eq!(items.get(b).unwrap().bounds(), Rect::new(0, 0, 5, 1));

        items.get_mut(a).unwrap().set_position(Point::new(9, 9));
        assert_eq!(items.get(a).unwrap().position(), Point::new(9, 9));
    }

    #[test]
    fn test_removed_id_is_stale() {
        let mut items = ItemArena::new();
        let a = items.insert(RectItem::filled(Rect::new(0, 0, 1, 1), Color::RED));
        assert!(items.remove(a).is_some());
        assert!(items.remove(a).is_none());

        // A new item never reuses the stale id.
        let b = items.insert(RectItem::filled(Rect::new(0, 0, 1, 1), Color::BLUE));
        assert_ne!(a, b);
        assert!(!items.contains(a));
        assert_eq!(items.set_state(a, WidgetState::Pressed), Err(ItemError::NotFound(a)));
        assert_eq!(items.state(a), Err(ItemError::NotFound(a)));
    }

    #[test]
    fn test_type_name() {
        let mut items = ItemArena::new();
        let id = items.insert(ButtonItem::new(Rect::new(0, 0, 10, 3), "ok"));
        assert!(items.get(id).unwrap().type_name().ends_with("ButtonItem"));
        assert!(format!("{items:?}").contains("ButtonItem"));
    }
}
