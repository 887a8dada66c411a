//! "Latest call wins" gate shared by the debouncer and the fetch hook.
//!
//! Every [`TicketGate::issue`] invalidates all tickets issued before it, so a
//! suspended task can check on resume whether it is still the newest one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, Default)]
pub struct TicketGate {
    latest: Arc<AtomicU64>,
}

impl TicketGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket; all earlier tickets become stale
    pub fn issue(&self) -> u64 {
        self.latest.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket
    }

    /// Invalidate every outstanding ticket without issuing a usable one
    pub fn revoke(&self) {
        self.latest.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_ticket_is_current() {
        let gate = TicketGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));
    }

    #[test]
    fn test_revoke_invalidates_everything() {
        let gate = TicketGate::new();
        let ticket = gate.issue();
        gate.revoke();
        assert!(!gate.is_current(ticket));
    }

    #[test]
    fn test_clones_share_state() {
        let gate = TicketGate::new();
        let clone = gate.clone();
        let ticket = gate.issue();
        assert!(clone.is_current(ticket));
        clone.issue();
        assert!(!gate.is_current(ticket));
    }
}
