use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// Rejects a submission while another one for the same form identity is
/// still outstanding. Rejected attempts are not queued.
#[derive(Debug, Default, Clone)]
pub struct SubmissionGate {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

/// Marks a key as in flight until dropped.
#[derive(Debug)]
pub struct InFlightGuard {
    key: String,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `key`, or `None` if a submission for it is already running.
    pub fn try_begin(&self, key: &str) -> Option<InFlightGuard> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(|e| e.into_inner());
        if !in_flight.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            key: key.to_string(),
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(&self.key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_is_rejected_until_release() {
        let gate = SubmissionGate::new();
        let guard = gate.try_begin("user@example.com").unwrap();
        assert!(gate.is_in_flight("user@example.com"));
        assert!(gate.try_begin("user@example.com").is_none());

        drop(guard);
        assert!(!gate.is_in_flight("user@example.com"));
        assert!(gate.try_begin("user@example.com").is_some());
    }

    #[test]
    fn test_keys_are_independent() {
        let gate = SubmissionGate::new();
        let _a = gate.try_begin("a@example.com").unwrap();
        assert!(gate.try_begin("b@example.com").is_some());
    }
}
