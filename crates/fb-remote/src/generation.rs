//! Latest-request-wins bookkeeping.
//!
//! A user can retype an endpoint URL faster than responses arrive. Every
//! fetch takes a [`Ticket`] first; when the response lands, the ticket is
//! checked — a superseded ticket means a newer request for the same
//! component is in flight (or already landed) and this result must be
//! dropped. Deterministic, no timestamps involved.

use fb_core::ComponentId;
use std::cell::RefCell;
use std::collections::HashMap;

#[derive(Default)]
pub struct RequestLedger {
    generations: RefCell<HashMap<ComponentId, u64>>,
}

/// Proof of which generation a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    id: ComponentId,
    generation: u64,
}

impl RequestLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request generation for `id`, superseding any ticket
    /// issued earlier.
    pub fn begin(&self, id: ComponentId) -> Ticket {
        let mut generations = self.generations.borrow_mut();
        let generation = generations.entry(id).or_insert(0);
        *generation += 1;
        Ticket {
            id,
            generation: *generation,
        }
    }

    /// Whether `ticket` still names the newest request for its component.
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.generations
            .borrow()
            .get(&ticket.id)
            .is_some_and(|&g| g == ticket.generation)
    }

    /// Drop all bookkeeping (document cleared or reloaded).
    pub fn reset(&self) {
        self.generations.borrow_mut().clear();
    }
}
