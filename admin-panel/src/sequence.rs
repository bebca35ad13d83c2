/// Sequence number attached to a list request.
pub type Seq = u64;

/// What to do with a completed list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The response belongs to the current screen state: apply it.
    Current,
    /// State changed while the request was in flight: drop the payload and
    /// issue a fresh request.
    Superseded,
    /// Not the request in flight (already handled, or from another mount).
    Ignored,
}

/// Single-flight tracking of list requests.
///
/// At most one request is in flight. Asking for another while one is
/// outstanding marks the outstanding one superseded instead of starting an
/// overlapping fetch, so an older response can never overwrite newer state.
#[derive(Debug, Default, Clone)]
pub struct RequestTracker {
    issued: Seq,
    in_flight: Option<Seq>,
    superseded: bool,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sequence number to issue, or `None` when a request is
    /// already in flight (it is then marked superseded).
    pub fn begin(&mut self) -> Option<Seq> {
        if self.in_flight.is_some() {
            self.superseded = true;
            return None;
        }

        self.issued += 1;
        self.in_flight = Some(self.issued);
        Some(self.issued)
    }

    pub fn complete(&mut self, seq: Seq) -> Completion {
        if self.in_flight != Some(seq) {
            return Completion::Ignored;
        }

        self.in_flight = None;
        if std::mem::take(&mut self.superseded) {
            Completion::Superseded
        } else {
            Completion::Current
        }
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_increase() {
        let mut tracker = RequestTracker::new();

        let first = tracker.begin().unwrap();
        assert_eq!(tracker.complete(first), Completion::Current);
        let second = tracker.begin().unwrap();

        assert!(second > first);
        assert_eq!(tracker.complete(second), Completion::Current);
    }

    #[test]
    fn no_overlapping_requests() {
        let mut tracker = RequestTracker::new();
        let seq = tracker.begin().unwrap();

        assert!(tracker.begin().is_none());
        assert!(tracker.is_loading());
        assert_eq!(tracker.complete(seq), Completion::Superseded);
        assert!(!tracker.is_loading());

        let next = tracker.begin().unwrap();
        assert_eq!(tracker.complete(next), Completion::Current);
    }

    #[test]
    fn unknown_completion_is_ignored() {
        let mut tracker = RequestTracker::new();
        let seq = tracker.begin().unwrap();

        assert_eq!(tracker.complete(seq + 7), Completion::Ignored);
        assert!(tracker.is_loading());
        assert_eq!(tracker.complete(seq), Completion::Current);
        assert_eq!(tracker.complete(seq), Completion::Ignored);
    }
}
