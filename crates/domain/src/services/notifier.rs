//! Alert notifier abstraction.
//!
//! Dispatching a match event to an external system is best-effort and
//! detached from the request lifecycle: implementations must return
//! immediately and carry out delivery on their own schedule, discarding
//! failures.

use std::sync::Mutex;

use crate::models::Incident;

/// Fire-and-forget delivery of a match event.
pub trait AlertNotifier: Send + Sync {
    /// Kicks off delivery of a match event for the given user. Must not
    /// block on the delivery itself; failures are the implementation's
    /// to log and discard.
    fn notify(&self, user_id: &str, incidents: &[Incident]);
}

/// Recording notifier for tests.
#[derive(Debug, Default)]
pub struct MockAlertNotifier {
    notifications: Mutex<Vec<(String, Vec<i64>)>>,
}

impl MockAlertNotifier {
    /// Create a mock notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications recorded so far, as (user_id, incident IDs) pairs.
    pub fn notifications(&self) -> Vec<(String, Vec<i64>)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl AlertNotifier for MockAlertNotifier {
    fn notify(&self, user_id: &str, incidents: &[Incident]) {
        let ids: Vec<i64> = incidents.iter().map(|i| i.id).collect();
        tracing::info!(
            user_id = %user_id,
            incident_count = incidents.len(),
            "Mock: would dispatch alert"
        );
        self.notifications
            .lock()
            .unwrap()
            .push((user_id.to_string(), ids));
    }
}
