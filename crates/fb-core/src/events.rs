//! Synchronous publish/subscribe bus.
//!
//! Controllers never call each other: a mutation goes into the document,
//! the document's notifications go onto the bus, and every subscribed
//! surface reacts. Delivery is same-tick and in subscription order.
//!
//! The callback list is snapshotted before invocation, so a handler may
//! subscribe, unsubscribe, or publish again without poisoning the
//! registry borrow. Re-entrant publishes run to completion before the
//! outer publish resumes; avoiding unbounded recursion is the handler
//! author's job (do not publish an event unconditionally from its own
//! handler).

use crate::id::FormId;
use crate::model::Component;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Notifications emitted by document mutations and controllers.
#[derive(Debug, Clone)]
pub enum Event {
    /// Any change to the component list or a component's properties.
    StateChanged,
    /// A document was loaded wholesale from imported JSON.
    StateLoaded,
    /// The document was cleared; carries the freshly minted form id.
    StateCleared(FormId),
    /// A palette drop inserted this component.
    ComponentAdded(Component),
    /// One component's properties changed.
    ComponentUpdated(Component),
    /// Selection changed. `None` means the selected id was stale.
    ComponentSelected(Option<Component>),
    ComponentDeselected,
}

/// Subscription key — one per `Event` variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    StateChanged,
    StateLoaded,
    StateCleared,
    ComponentAdded,
    ComponentUpdated,
    ComponentSelected,
    ComponentDeselected,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::StateChanged => EventKind::StateChanged,
            Event::StateLoaded => EventKind::StateLoaded,
            Event::StateCleared(_) => EventKind::StateCleared,
            Event::ComponentAdded(_) => EventKind::ComponentAdded,
            Event::ComponentUpdated(_) => EventKind::ComponentUpdated,
            Event::ComponentSelected(_) => EventKind::ComponentSelected,
            Event::ComponentDeselected => EventKind::ComponentDeselected,
        }
    }
}

type Callback = Rc<dyn Fn(&Event)>;

#[derive(Clone)]
struct Entry {
    id: u64,
    callback: Callback,
    once: bool,
}

/// Handle returned by `subscribe`; pass it back to `unsubscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription {
    kind: EventKind,
    id: u64,
}

/// An explicitly constructed bus instance. One is created at application
/// start and shared (`Rc`) with every controller — no process-wide state,
/// so tests build a fresh bus each.
#[derive(Default)]
pub struct EventBus {
    next_id: Cell<u64>,
    subscribers: RefCell<HashMap<EventKind, Vec<Entry>>>,
}

impl EventBus {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn subscribe(&self, kind: EventKind, callback: impl Fn(&Event) + 'static) -> Subscription {
        self.push(kind, Rc::new(callback), false)
    }

    /// Subscribe for exactly one delivery; the entry is removed before the
    /// callback runs, so even a re-entrant publish cannot fire it twice.
    pub fn subscribe_once(
        &self,
        kind: EventKind,
        callback: impl Fn(&Event) + 'static,
    ) -> Subscription {
        self.push(kind, Rc::new(callback), true)
    }

    fn push(&self, kind: EventKind, callback: Callback, once: bool) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Entry { id, callback, once });
        Subscription { kind, id }
    }

    pub fn unsubscribe(&self, sub: Subscription) {
        if let Some(list) = self.subscribers.borrow_mut().get_mut(&sub.kind) {
            list.retain(|e| e.id != sub.id);
        }
    }

    /// Deliver `event` to every subscriber of its kind, in subscription
    /// order, synchronously.
    pub fn publish(&self, event: &Event) {
        let snapshot: Vec<Entry> = {
            let mut subs = self.subscribers.borrow_mut();
            match subs.get_mut(&event.kind()) {
                Some(list) => {
                    let snapshot = list.clone();
                    list.retain(|e| !e.once);
                    snapshot
                }
                None => return,
            }
        };
        for entry in &snapshot {
            (entry.callback)(event);
        }
    }

    /// Number of live subscriptions for a kind (diagnostics, tests).
    pub fn subscriber_count(&self, kind: EventKind) -> usize {
        self.subscribers
            .borrow()
            .get(&kind)
            .map_or(0, |list| list.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_in_subscription_order() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let seen = seen.clone();
            bus.subscribe(EventKind::StateChanged, move |_| {
                seen.borrow_mut().push(tag);
            });
        }

        bus.publish(&Event::StateChanged);
        assert_eq!(*seen.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let bus = EventBus::new();
        let count = Rc::new(Cell::new(0));

        let sub = {
            let count = count.clone();
            bus.subscribe(EventKind::ComponentDeselected, move |_| {
                count.set(count.get() + 1);
            })
        };

        bus.publish(&Event::ComponentDeselected);
        bus.unsubscribe(sub);
        bus.publish(&Event::ComponentDeselected);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn once_fires_exactly_once() {
        let bus = EventBus::new();
        let count = Rc::new(Cell::new(0));

        {
            let count = count.clone();
            bus.subscribe_once(EventKind::StateChanged, move |_| {
                count.set(count.get() + 1);
            });
        }

        bus.publish(&Event::StateChanged);
        bus.publish(&Event::StateChanged);
        assert_eq!(count.get(), 1);
        assert_eq!(bus.subscriber_count(EventKind::StateChanged), 0);
    }

    #[test]
    fn reentrant_publish_from_handler() {
        let bus = EventBus::new();
        let order = Rc::new(RefCell::new(Vec::new()));

        {
            let bus = bus.clone();
            let order = order.clone();
            bus.clone().subscribe(EventKind::StateCleared, move |_| {
                order.borrow_mut().push("cleared");
                bus.publish(&Event::StateChanged);
            });
        }
        {
            let order = order.clone();
            bus.subscribe(EventKind::StateChanged, move |_| {
                order.borrow_mut().push("changed");
            });
        }

        bus.publish(&Event::StateCleared(crate::id::FormId::generate()));
        assert_eq!(*order.borrow(), vec!["cleared", "changed"]);
    }

    #[test]
    fn subscribe_during_delivery_does_not_fire_this_tick() {
        let bus = EventBus::new();
        let late_fired = Rc::new(Cell::new(false));

        {
            let bus = bus.clone();
            let late_fired = late_fired.clone();
            bus.clone().subscribe(EventKind::StateChanged, move |_| {
                let late_fired = late_fired.clone();
                bus.subscribe(EventKind::StateChanged, move |_| {
                    late_fired.set(true);
                });
            });
        }

        bus.publish(&Event::StateChanged);
        assert!(!late_fired.get(), "snapshot should exclude late subscriber");
    }
}
