//! The event queue and listener dispatch.
//!
//! [`EventManager`] owns a FIFO queue of [`Event`]s and an ordered set of
//! listeners, each bound to one item. A dispatch pass drains the queue:
//!
//! 1. pop the head event
//! 2. call every listener in registration order
//! 3. apply the built-in state rule (`MouseClick` presses, `MouseRelease`
//!    releases)
//!
//! Listener failures and stale item ids do not stop the pass. They are
//! collected into the [`DispatchReport`].
//!
//! # Example
//!
//! ```
//! use zincx::{Event, EventManager, Point, Rect, WidgetState};
//! use zincx::item::{ButtonItem, ItemArena};
//!
//! let mut items = ItemArena::new();
//! let button = items.insert(ButtonItem::new(Rect::new(0, 0, 10, 3), "OK"));
//!
//! let mut events = EventManager::new();
//! events.register_listener(button, |event| {
//!     println!("button saw {}", event.event_type());
//!     Ok(())
//! });
//!
//! events.queue_event(Event::mouse_click(Point::new(1, 1)).with_target(button));
//! let report = events.dispatch_events(&mut items);
//!
//! assert!(report.is_success());
//! assert_eq!(items.state(button).unwrap(), WidgetState::Pressed);
//! assert!(!events.has_pending());
//! ```

use crossbeam_channel::{unbounded, Receiver, Sender};
use slotmap::{new_key_type, SlotMap};
use thiserror::Error;
use zincx_core::{EventType, WidgetState};

use crate::error::{BoxError, Error, EventError, ItemError, ListenerResult};
use crate::event::{Event, EventKind};
use crate::item::{ItemArena, ItemId};

new_key_type! {
    /// Handle returned by [`EventManager::register_listener`].
    pub struct ListenerId;
}

type Callback = Box<dyn FnMut(&Event) -> ListenerResult>;

struct Listener {
    item: ItemId,
    callback: Callback,
}

/// A cloneable handle that posts events into an [`EventManager`]'s queue.
///
/// Events posted while a dispatch pass is running are dispatched in the
/// same pass.
#[derive(Debug, Clone)]
pub struct EventSender {
    sender: Sender<Event>,
}

impl EventSender {
    /// Append an event at the tail of the queue.
    ///
    /// Fails only if the owning manager has been dropped.
    pub fn post(&self, event: Event) -> Result<(), EventError> {
        self.sender.send(event).map_err(|_| EventError::QueueClosed)
    }
}

/// A single failure captured during a dispatch pass.
#[derive(Error, Debug)]
pub enum DispatchFailure {
    /// A listener callback returned an error.
    #[error("listener {listener:?} failed while handling {event_type}")]
    Listener {
        listener: ListenerId,
        event_type: EventType,
        #[source]
        source: BoxError,
    },

    /// The state rule referred to an item that is no longer in the arena.
    #[error("cannot apply {event_type} state rule")]
    MissingItem {
        event_type: EventType,
        #[source]
        source: ItemError,
    },
}

/// The outcome of [`EventManager::dispatch_events`].
#[derive(Debug, Default)]
pub struct DispatchReport {
    /// Events popped from the queue.
    pub dispatched: usize,
    /// Items whose state was changed by the built-in rule.
    pub state_changes: usize,
    /// Failures, in the order they happened.
    pub failures: Vec<DispatchFailure>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Convert into a `Result`, yielding the number of dispatched events.
    pub fn into_result(self) -> crate::Result<usize> {
        if self.failures.is_empty() {
            Ok(self.dispatched)
        } else {
            Err(Error::Dispatch(self.failures))
        }
    }
}

/// FIFO event queue plus the listeners it dispatches to.
pub struct EventManager {
    sender: Sender<Event>,
    receiver: Receiver<Event>,
    listeners: SlotMap<ListenerId, Listener>,
    order: Vec<ListenerId>,
}

impl EventManager {
    pub fn new() -> Self {
        let (sender, receiver) = unbounded();
        Self {
            sender,
            receiver,
            listeners: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    /// Append an event at the tail of the queue.
    pub fn queue_event(&mut self, event: Event) {
        tracing::trace!(
            target: "zincx::event",
            event_type = %event.event_type(),
            target_item = ?event.target(),
            "queued event"
        );
        // The receiver lives in `self`, so the channel cannot be disconnected.
        let _ = self.sender.send(event);
    }

    /// A handle that posts into this manager's queue.
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Register `callback` for `item`. Listeners are called in registration
    /// order.
    pub fn register_listener<F>(&mut self, item: ItemId, callback: F) -> ListenerId
    where
        F: FnMut(&Event) -> ListenerResult + 'static,
    {
        let id = self.listeners.insert(Listener {
            item,
            callback: Box::new(callback),
        });
        self.order.push(id);
        tracing::debug!(target: "zincx::event", listener = ?id, ?item, "registered listener");
        id
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unregister_listener(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_none() {
            return false;
        }
        self.order.retain(|&other| other != id);
        tracing::debug!(target: "zincx::event", listener = ?id, "unregistered listener");
        true
    }

    /// Remove every listener bound to `item`, returning how many were removed.
    pub fn unregister_item(&mut self, item: ItemId) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|_, listener| listener.item != item);
        let listeners = &self.listeners;
        self.order.retain(|&id| listeners.contains_key(id));
        before - self.listeners.len()
    }

    /// The item a listener is bound to.
    pub fn listener_item(&self, id: ListenerId) -> Option<ItemId> {
        self.listeners.get(id).map(|listener| listener.item)
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn pending_count(&self) -> usize {
        self.receiver.len()
    }

    pub fn has_pending(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// Drain the queue, dispatching each event to every listener and then
    /// applying the state rule.
    ///
    /// Events queued by listeners during the pass are dispatched before it
    /// returns, so a listener that posts an event for every event it sees
    /// never lets the pass finish. The call never blocks.
    #[tracing::instrument(name = "zincx::dispatch", target = "zincx::event", skip_all)]
    pub fn dispatch_events(&mut self, items: &mut ItemArena) -> DispatchReport {
        let mut report = DispatchReport::default();

        while let Ok(event) = self.receiver.try_recv() {
            let event_type = event.event_type();
            tracing::trace!(
                target: "zincx::event",
                %event_type,
                timestamp = event.timestamp(),
                "dispatching event"
            );

            for &id in &self.order {
                let Some(listener) = self.listeners.get_mut(id) else {
                    continue;
                };
                if let Err(source) = (listener.callback)(&event) {
                    tracing::warn!(
                        target: "zincx::event",
                        listener = ?id,
                        %event_type,
                        error = %source,
                        "listener failed"
                    );
                    report.failures.push(DispatchFailure::Listener {
                        listener: id,
                        event_type,
                        source,
                    });
                }
            }

            self.apply_state_rule(&event, items, &mut report);
            report.dispatched += 1;
        }

        tracing::debug!(
            target: "zincx::event",
            dispatched = report.dispatched,
            state_changes = report.state_changes,
            failures = report.failures.len(),
            "dispatch pass complete"
        );
        report
    }

    fn apply_state_rule(&self, event: &Event, items: &mut ItemArena, report: &mut DispatchReport) {
        let state = match event.kind() {
            EventKind::MouseClick(_) => WidgetState::Pressed,
            EventKind::MouseRelease(_) => WidgetState::Normal,
            EventKind::KeyPress | EventKind::TouchStart => return,
        };

        let targets = match event.target() {
            Some(target) => vec![target],
            // Untargeted: every item with a listener.
            None => {
                let mut targets = Vec::new();
                for listener in self.order.iter().filter_map(|&id| self.listeners.get(id)) {
                    if !targets.contains(&listener.item) {
                        targets.push(listener.item);
                    }
                }
                targets
            }
        };

        for item in targets {
            match transition(items, item, state) {
                Ok(true) => report.state_changes += 1,
                Ok(false) => {}
                Err(source) => {
                    tracing::warn!(target: "zincx::event", ?item, "state rule target missing");
                    report.failures.push(DispatchFailure::MissingItem {
                        event_type: event.event_type(),
                        source,
                    });
                }
            }
        }
    }
}

/// Move `item` to `state`. Returns whether it changed.
fn transition(items: &mut ItemArena, item: ItemId, state: WidgetState) -> Result<bool, ItemError> {
    let current = items.state(item)?;
    if current == state {
        return Ok(false);
    }
    items.set_state(item, state)?;
    Ok(true)
}

impl Default for EventManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventManager")
            .field("pending", &self.pending_count())
            .field("listeners", &self.order)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::item::{ButtonItem, TextItem};
    use zincx_render::{Point, Rect};

    fn button(items: &mut ItemArena) -> ItemId {
        items.insert(ButtonItem::new(Rect::new(0, 0, 10, 3), "b"))
    }

    fn click(item: ItemId) -> Event {
        Event::mouse_click(Point::new(1, 1)).with_target(item)
    }

    #[test]
    fn test_fifo_order() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut events = EventManager::new();
        let log = seen.clone();
        events.register_listener(a, move |event| {
            log.borrow_mut().push(event.timestamp());
            Ok(())
        });

        for timestamp in [3, 1, 2] {
            events.queue_event(Event::key_press().with_timestamp(timestamp));
        }
        assert_eq!(events.pending_count(), 3);

        let report = events.dispatch_events(&mut items);
        assert_eq!(report.dispatched, 3);
        assert_eq!(*seen.borrow(), vec![3, 1, 2]);
        assert_eq!(events.pending_count(), 0);
    }

    #[test]
    fn test_registration_order() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let b = button(&mut items);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut events = EventManager::new();
        for (name, item) in [("first", b), ("second", a), ("third", b)] {
            let log = seen.clone();
            events.register_listener(item, move |_| {
                log.borrow_mut().push(name);
                Ok(())
            });
        }

        events.queue_event(Event::touch_start());
        events.dispatch_events(&mut items);
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_click_then_release() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let mut events = EventManager::new();
        events.register_listener(a, |_| Ok(()));

        events.queue_event(click(a));
        let report = events.dispatch_events(&mut items);
        assert_eq!(report.state_changes, 1);
        assert_eq!(items.state(a).unwrap(), WidgetState::Pressed);

        events.queue_event(Event::mouse_release(Point::new(1, 1)).with_target(a));
        events.dispatch_events(&mut items);
        assert_eq!(items.state(a).unwrap(), WidgetState::Normal);
    }

    #[test]
    fn test_non_mouse_events_keep_state() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        items.set_state(a, WidgetState::Hovered).unwrap();

        let mut events = EventManager::new();
        events.register_listener(a, |_| Ok(()));
        events.queue_event(Event::key_press().with_target(a));
        events.queue_event(Event::touch_start());

        let report = events.dispatch_events(&mut items);
        assert_eq!(report.dispatched, 2);
        assert_eq!(report.state_changes, 0);
        assert_eq!(items.state(a).unwrap(), WidgetState::Hovered);
    }

    #[test]
    fn test_targeted_click_leaves_other_items() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let b = button(&mut items);

        let mut events = EventManager::new();
        events.register_listener(a, |_| Ok(()));
        events.register_listener(b, |_| Ok(()));
        events.queue_event(click(a));
        events.dispatch_events(&mut items);

        assert_eq!(items.state(a).unwrap(), WidgetState::Pressed);
        assert_eq!(items.state(b).unwrap(), WidgetState::Normal);
    }

    #[test]
    fn test_untargeted_click_broadcasts() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let b = button(&mut items);
        let unwatched = button(&mut items);

        let mut events = EventManager::new();
        events.register_listener(a, |_| Ok(()));
        events.register_listener(a, |_| Ok(()));
        events.register_listener(b, |_| Ok(()));
        events.queue_event(Event::mouse_click(Point::ZERO));

        let report = events.dispatch_events(&mut items);
        assert_eq!(report.state_changes, 2);
        assert_eq!(items.state(a).unwrap(), WidgetState::Pressed);
        assert_eq!(items.state(b).unwrap(), WidgetState::Pressed);
        assert_eq!(items.state(unwatched).unwrap(), WidgetState::Normal);
    }

    #[test]
    fn test_rule_applies_to_disabled_items() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        items.set_state(a, WidgetState::Disabled).unwrap();

        let mut events = EventManager::new();
        events.register_listener(a, |_| Ok(()));
        events.queue_event(click(a));
        let report = events.dispatch_events(&mut items);
        assert!(report.is_success());
        assert_eq!(report.state_changes, 1);
        assert_eq!(items.state(a).unwrap(), WidgetState::Pressed);

        events.queue_event(Event::mouse_release(Point::ZERO).with_target(a));
        events.dispatch_events(&mut items);
        assert_eq!(items.state(a).unwrap(), WidgetState::Normal);
    }

    #[test]
    fn test_repeated_click_is_not_a_change() {
        let mut items = ItemArena::new();
        let a = button(&mut items);

        let mut events = EventManager::new();
        events.queue_event(click(a));
        events.queue_event(click(a));
        let report = events.dispatch_events(&mut items);
        assert_eq!(report.dispatched, 2);
        assert_eq!(report.state_changes, 1);
        assert_eq!(items.state(a).unwrap(), WidgetState::Pressed);
    }

    #[test]
    fn test_failing_listener_does_not_stop_pass() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let calls = Rc::new(RefCell::new(0));

        let mut events = EventManager::new();
        let failing = events.register_listener(a, |_| Err("listener exploded".into()));
        let counter = calls.clone();
        events.register_listener(a, move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        events.queue_event(click(a));
        events.queue_event(Event::key_press());
        let report = events.dispatch_events(&mut items);

        assert_eq!(report.dispatched, 2);
        assert_eq!(*calls.borrow(), 2);
        assert_eq!(report.failures.len(), 2);
        assert!(matches!(
            &report.failures[0],
            DispatchFailure::Listener { listener, event_type: EventType::MouseClick, .. } if *listener == failing
        ));
        // The state rule still runs for the failed event.
        assert_eq!(items.state(a).unwrap(), WidgetState::Pressed);

        let err = report.into_result().unwrap_err();
        assert!(matches!(err, Error::Dispatch(ref failures) if failures.len() == 2));
    }

    #[test]
    fn test_unregistered_listener_is_not_called() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let calls = Rc::new(RefCell::new(0));

        let mut events = EventManager::new();
        let counter = calls.clone();
        let id = events.register_listener(a, move |_| {
            *counter.borrow_mut() += 1;
            Ok(())
        });

        events.queue_event(Event::key_press());
        events.dispatch_events(&mut items);
        assert_eq!(*calls.borrow(), 1);

        assert!(events.unregister_listener(id));
        assert!(!events.unregister_listener(id));
        assert_eq!(events.listener_count(), 0);

        events.queue_event(Event::key_press());
        events.dispatch_events(&mut items);
        assert_eq!(*calls.borrow(), 1);
    }

    #[test]
    fn test_unregister_item() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let b = button(&mut items);

        let mut events = EventManager::new();
        events.register_listener(a, |_| Ok(()));
        let kept = events.register_listener(b, |_| Ok(()));
        events.register_listener(a, |_| Ok(()));

        assert_eq!(events.unregister_item(a), 2);
        assert_eq!(events.listener_count(), 1);
        assert_eq!(events.listener_item(kept), Some(b));
    }

    #[test]
    fn test_events_posted_during_dispatch_run_in_same_pass() {
        let mut items = ItemArena::new();
        let a = button(&mut items);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let mut events = EventManager::new();
        let sender = events.sender();
        let log = seen.clone();
        events.register_listener(a, move |event| {
            log.borrow_mut().push(event.event_type());
            if event.event_type() == EventType::MouseClick {
                sender.post(Event::mouse_release(Point::ZERO).with_target(a))?;
            }
            Ok(())
        });

        events.queue_event(click(a));
        let report = events.dispatch_events(&mut items);

        assert_eq!(report.dispatched, 2);
        assert_eq!(*seen.borrow(), vec![EventType::MouseClick, EventType::MouseRelease]);
        assert_eq!(items.state(a).unwrap(), WidgetState::Normal);
        assert!(!events.has_pending());
    }

    #[test]
    fn test_stale_target_is_reported() {
        let mut items = ItemArena::new();
        let a = items.insert(TextItem::new(Rect::new(0, 0, 1, 1), "gone"));
        items.remove(a);

        let mut events = EventManager::new();
        events.queue_event(click(a));
        let report = events.dispatch_events(&mut items);

        assert_eq!(report.dispatched, 1);
        assert!(matches!(
            report.failures.as_slice(),
            [DispatchFailure::MissingItem { source: ItemError::NotFound(id), .. }] if *id == a
        ));
    }

    #[test]
    fn test_sender_outlives_manager() {
        let events = EventManager::new();
        let sender = events.sender();
        assert!(sender.post(Event::key_press()).is_ok());
        drop(events);
        assert_eq!(sender.post(Event::key_press()), Err(EventError::QueueClosed));
    }

    #[test]
    fn test_empty_queue_returns_immediately() {
        let mut items = ItemArena::new();
        let mut events = EventManager::new();
        let report = events.dispatch_events(&mut items);
        assert_eq!(report.dispatched, 0);
        assert!(report.is_success());
        assert_eq!(report.into_result().unwrap(), 0);
    }
}
