/// Identifies one issued request. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Ticket(u64);

/// Monotonic request-generation counter.
///
/// A list page takes a ticket before each fetch and applies the response
/// only if the ticket is still current, so a slow response for an older
/// query never overwrites the rows of a newer one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGuard {
    latest: u64,
}

impl RequestGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding every earlier ticket.
    pub fn issue(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_ticket_is_current() {
        let mut guard = RequestGuard::new();
        let first = guard.issue();
        assert!(guard.is_current(first));
        let second = guard.issue();
        assert!(second > first);
        assert!(guard.is_current(second));
        assert!(!guard.is_current(first));
    }

    #[test]
    fn superseded_response_is_dropped() {
        let mut guard = RequestGuard::new();
        let slow = guard.issue();
        let fast = guard.issue();
        // fast resolves first and is applied; slow arrives later and is not
        assert!(guard.is_current(fast));
        assert!(!guard.is_current(slow));
    }
}
