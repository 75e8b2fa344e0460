//! Latest-request-wins bookkeeping for conversions run off the caller's
//! thread.
//!
//! Conversions are never interrupted. Each request takes a [`Ticket`] when
//! it is submitted; when its result comes back the ticket is checked, and a
//! result whose ticket has been superseded is dropped.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic token attached to one conversion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Issues tickets and answers whether one is still the latest.
///
/// Shareable across threads (`&self` everywhere); wrap in an `Arc` to hand
/// it to workers.
///
/// ```
/// use eink_pack::RequestSequencer;
///
/// let seq = RequestSequencer::new();
/// let first = seq.issue();
/// let second = seq.issue();
/// assert!(!seq.is_current(first));
/// assert_eq!(seq.accept(second, "result"), Some("result"));
/// ```
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Every earlier ticket stops being current.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Most recently issued ticket, if any.
    pub fn latest(&self) -> Option<Ticket> {
        match self.latest.load(Ordering::Acquire) {
            0 => None,
            n => Some(Ticket(n)),
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Pass `result` through if `ticket` is still current, drop it otherwise.
    pub fn accept<T>(&self, ticket: Ticket, result: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::Acquire),
                "discarding stale conversion result"
            );
            None
        }
    }
}
