//! Request Sequencer
//!
//! Tags fetches so that only the most recently issued one may land.

/// Monotonic ticket counter; the last ticket issued wins.
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new ticket, superseding every earlier one.
    pub fn issue(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, seq: u64) -> bool {
        seq != 0 && seq == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_ticket_wins() {
        let mut seq = RequestSequencer::new();
        let first = seq.issue();
        let second = seq.issue();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }

    #[test]
    fn test_nothing_current_before_issue() {
        let seq = RequestSequencer::new();
        assert!(!seq.is_current(0));
    }
}
