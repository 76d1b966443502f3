//! Result slots guarded by request tickets.

use serde::Serialize;

/// Identifies one issued request for a [`Slot`]. Tickets increase
/// monotonically per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Holds the latest results for one AI view.
///
/// A result is applied only if it belongs to the most recently issued
/// ticket; anything older is dropped. Loading stays on until that newest
/// ticket completes.
#[derive(Debug)]
pub struct Slot<T> {
    items: Vec<T>,
    issued: u64,
    loading: bool,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            issued: 0,
            loading: false,
        }
    }
}

impl<T> Slot<T> {
    /// Issues a new ticket and marks the slot loading. Current items stay
    /// visible until the result lands.
    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.loading = true;
        Ticket(self.issued)
    }

    /// Like [`Slot::begin`], but clears current items first.
    pub fn begin_clearing(&mut self) -> Ticket {
        self.items.clear();
        self.begin()
    }

    /// Applies `items` if `ticket` is the newest one issued.
    ///
    /// Returns `false` and leaves the slot untouched for a stale ticket.
    pub fn complete(&mut self, ticket: Ticket, items: Vec<T>) -> bool {
        if ticket.0 != self.issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "dropping result for superseded request"
            );
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        &mut self.items
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The newest ticket issued so far, if any.
    #[must_use]
    pub fn latest(&self) -> Option<Ticket> {
        (self.issued > 0).then_some(Ticket(self.issued))
    }
}
