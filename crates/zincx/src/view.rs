//! The graphics view: an ordered item sequence painted through one backend.

use thiserror::Error;
use zincx_core::{Config, RenderMode};
use zincx_render::{
    BackendHandle, BackendState, FrameStats, RenderBackend, RenderError, RenderResult, Size,
};

use crate::error::{Error, ItemError};
use crate::item::{ItemArena, ItemId};

/// A single failure captured during a render pass.
#[derive(Error, Debug)]
pub enum DrawFailure {
    /// The id at `index` is no longer in the arena.
    #[error("item at paint index {index} is missing")]
    MissingItem {
        index: usize,
        #[source]
        source: ItemError,
    },

    /// The item's `draw` returned an error.
    #[error("item {item:?} at paint index {index} failed to draw")]
    Draw {
        index: usize,
        item: ItemId,
        #[source]
        source: RenderError,
    },
}

impl DrawFailure {
    /// Position of the failing entry in the paint sequence.
    pub fn index(&self) -> usize {
        match self {
            Self::MissingItem { index, .. } | Self::Draw { index, .. } => *index,
        }
    }
}

/// The outcome of [`GraphicsView::render`].
#[derive(Debug, Default)]
pub struct RenderReport {
    /// Items that drew without error.
    pub drawn: usize,
    /// Failures, in paint order.
    pub failures: Vec<DrawFailure>,
    /// Backend call counts for this pass.
    pub stats: FrameStats,
}

impl RenderReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into a `Result`, yielding the number of items drawn.
    pub fn into_result(self) -> crate::Result<usize> {
        if self.failures.is_empty() {
            Ok(self.drawn)
        } else {
            Err(Error::RenderPass(self.failures))
        }
    }
}

/// A view that exclusively owns its backend and paints a sequence of items.
///
/// Items are painted back to front in sequence order. The same id may appear
/// more than once and is drawn once per occurrence.
///
/// ```
/// use zincx::{Color, GraphicsView, Rect, RenderMode};
/// use zincx::item::{ItemArena, RectItem};
/// use zincx::render::RecordingBackend;
///
/// let mut items = ItemArena::new();
/// let rect = items.insert(RectItem::filled(Rect::new(0, 0, 4, 2), Color::RED));
///
/// let (backend, log) = RecordingBackend::with_log();
/// let mut view = GraphicsView::new(backend, RenderMode::Text)?;
/// view.add_item(rect);
///
/// let report = view.render(&items);
/// assert!(report.is_success());
/// assert_eq!(log.draw_commands().len(), 1);
/// # Ok::<(), zincx::RenderError>(())
/// ```
#[derive(Debug)]
pub struct GraphicsView {
    backend: BackendHandle,
    mode: RenderMode,
    viewport: Size,
    items: Vec<ItemId>,
}

impl GraphicsView {
    /// Take ownership of `backend` and initialize it with `mode`.
    ///
    /// Fails only if the backend's own initialization fails.
    pub fn new(backend: impl RenderBackend + 'static, mode: RenderMode) -> RenderResult<Self> {
        Self::with_viewport(
            backend,
            mode,
            Size::new(zincx_core::DEFAULT_WIDTH, zincx_core::DEFAULT_HEIGHT),
        )
    }

    /// Build a view using the render mode and window size from `config`.
    pub fn from_config(backend: impl RenderBackend + 'static, config: &Config) -> RenderResult<Self> {
        let viewport = Size::new(config.window.width, config.window.height);
        Self::with_viewport(backend, config.render.mode, viewport)
    }

    pub fn with_viewport(
        backend: impl RenderBackend + 'static,
        mode: RenderMode,
        viewport: Size,
    ) -> RenderResult<Self> {
        let mut backend = BackendHandle::new(backend);
        backend.initialize(mode)?;
        tracing::debug!(
            target: "zincx::view",
            backend = backend.name(),
            %mode,
            width = viewport.width,
            height = viewport.height,
            "created graphics view"
        );
        Ok(Self {
            backend,
            mode,
            viewport,
            items: Vec::new(),
        })
    }

    /// Append an item to the paint sequence. Duplicates are kept.
    pub fn add_item(&mut self, item: ItemId) {
        self.items.push(item);
    }

    /// Remove every occurrence of `item`, returning how many were removed.
    pub fn remove_item(&mut self, item: ItemId) -> usize {
        let before = self.items.len();
        self.items.retain(|&other| other != item);
        before - self.items.len()
    }

    /// The paint sequence, back to front.
    pub fn items(&self) -> &[ItemId] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn clear_items(&mut self) {
        self.items.clear();
    }

    /// Move every occurrence of `item` to the end of the sequence, keeping
    /// their relative order. Returns `false` if the item is not in the view.
    pub fn bring_to_front(&mut self, item: ItemId) -> bool {
        let count = self.remove_item(item);
        self.items.extend(std::iter::repeat_n(item, count));
        count > 0
    }

    /// Move every occurrence of `item` to the start of the sequence.
    pub fn send_to_back(&mut self, item: ItemId) -> bool {
        let count = self.remove_item(item);
        self.items.splice(0..0, std::iter::repeat_n(item, count));
        count > 0
    }

    /// Drop ids that are no longer in `arena`. Returns how many were dropped.
    pub fn prune(&mut self, arena: &ItemArena) -> usize {
        let before = self.items.len();
        self.items.retain(|&id| arena.contains(id));
        before - self.items.len()
    }

    pub fn render_mode(&self) -> RenderMode {
        self.mode
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn backend_state(&self) -> BackendState {
        self.backend.state()
    }

    /// Call counts from the most recent render pass.
    pub fn frame_stats(&self) -> FrameStats {
        self.backend.stats()
    }

    /// Draw every item in sequence order, once.
    ///
    /// A failing or missing item is recorded and the pass moves on to the
    /// next one.
    #[tracing::instrument(name = "zincx::render", target = "zincx::view", skip_all, fields(items = self.items.len()))]
    pub fn render(&mut self, arena: &ItemArena) -> RenderReport {
        self.backend.reset_stats();
        let mut report = RenderReport::default();

        for (index, &id) in self.items.iter().enumerate() {
            let Some(item) = arena.get(id) else {
                tracing::warn!(target: "zincx::view", index, item = ?id, "skipping missing item");
                report.failures.push(DrawFailure::MissingItem {
                    index,
                    source: ItemError::NotFound(id),
                });
                continue;
            };

            match item.draw(&mut self.backend) {
                Ok(()) => report.drawn += 1,
                Err(source) => {
                    tracing::warn!(
                        target: "zincx::view",
                        index,
                        item = ?id,
                        type_name = item.type_name(),
                        error = %source,
                        "item failed to draw"
                    );
                    report.failures.push(DrawFailure::Draw {
                        index,
                        item: id,
                        source,
                    });
                }
            }
        }

        report.stats = self.backend.stats();
        tracing::debug!(
            target: "zincx::view",
            drawn = report.drawn,
            failures = report.failures.len(),
            draw_calls = report.stats.draw_calls,
            "render pass complete"
        );
        report
    }
}
