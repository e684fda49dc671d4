//! Collaborator traits for the location-check pipeline.
//!
//! The pipeline depends on two backing stores: the incident store (for
//! the active set) and the check ledger (append-only record of performed
//! checks). The traits keep the orchestrator testable without a
//! database; mock implementations live alongside them.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::models::{Incident, NewLocationCheck};

/// Read access to the incident store as the matcher needs it.
///
/// `find_active` must return exactly the incidents flagged active at
/// query time; transient staleness under concurrent writes is accepted.
#[async_trait::async_trait]
pub trait IncidentStore: Send + Sync {
    async fn find_active(&self) -> Result<Vec<Incident>, sqlx::Error>;
}

/// Append-only ledger of performed location checks.
#[async_trait::async_trait]
pub trait CheckLedger: Send + Sync {
    /// Persists one check. The ledger assigns the timestamp.
    async fn save(&self, check: NewLocationCheck) -> Result<(), sqlx::Error>;

    /// Counts distinct user identifiers with at least one check in the
    /// trailing window. Callers must pass a positive window.
    async fn count_distinct_users_since(&self, minutes: i64) -> Result<i64, sqlx::Error>;
}

/// In-memory incident store for tests.
#[derive(Debug, Default)]
pub struct MockIncidentStore {
    pub incidents: Vec<Incident>,
    pub simulate_failure: bool,
}

impl MockIncidentStore {
    /// Create a mock store serving the given incidents.
    pub fn with_incidents(incidents: Vec<Incident>) -> Self {
        Self {
            incidents,
            simulate_failure: false,
        }
    }

    /// Create a mock store whose fetch always fails.
    pub fn failing() -> Self {
        Self {
            incidents: Vec::new(),
            simulate_failure: true,
        }
    }
}

#[async_trait::async_trait]
impl IncidentStore for MockIncidentStore {
    async fn find_active(&self) -> Result<Vec<Incident>, sqlx::Error> {
        if self.simulate_failure {
            tracing::warn!("Mock incident store simulating fetch failure");
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(self
            .incidents
            .iter()
            .filter(|i| i.active)
            .cloned()
            .collect())
    }
}

/// In-memory check ledger for tests. Records saved checks and counts
/// how many window queries were issued.
#[derive(Debug, Default)]
pub struct MockCheckLedger {
    saved: Mutex<Vec<NewLocationCheck>>,
    count_queries: AtomicUsize,
    pub simulate_save_failure: bool,
    pub user_count: i64,
}

impl MockCheckLedger {
    /// Create an empty mock ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock ledger whose saves always fail.
    pub fn failing_save() -> Self {
        Self {
            simulate_save_failure: true,
            ..Self::default()
        }
    }

    /// Create a mock ledger reporting the given distinct-user count.
    pub fn with_user_count(user_count: i64) -> Self {
        Self {
            user_count,
            ..Self::default()
        }
    }

    /// Checks recorded so far.
    pub fn saved(&self) -> Vec<NewLocationCheck> {
        self.saved.lock().unwrap().clone()
    }

    /// Number of `count_distinct_users_since` calls issued.
    pub fn count_queries(&self) -> usize {
        self.count_queries.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl CheckLedger for MockCheckLedger {
    async fn save(&self, check: NewLocationCheck) -> Result<(), sqlx::Error> {
        if self.simulate_save_failure {
            tracing::warn!(user_id = %check.user_id, "Mock ledger simulating save failure");
            return Err(sqlx::Error::PoolTimedOut);
        }
        self.saved.lock().unwrap().push(check);
        Ok(())
    }

    async fn count_distinct_users_since(&self, minutes: i64) -> Result<i64, sqlx::Error> {
        self.count_queries.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(minutes, "Mock ledger counting distinct users");
        Ok(self.user_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn incident(id: i64, active: bool) -> Incident {
        Incident {
            id,
            title: "t".to_string(),
            lat: 0.0,
            lon: 0.0,
            radius_m: 100,
            active,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_mock_store_filters_inactive() {
        let store = MockIncidentStore::with_incidents(vec![incident(1, true), incident(2, false)]);
        let active = tokio_test::block_on(store.find_active()).unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, 1);
    }

    #[test]
    fn test_mock_store_failure() {
        let store = MockIncidentStore::failing();
        assert!(tokio_test::block_on(store.find_active()).is_err());
    }

    #[test]
    fn test_mock_ledger_records_saves() {
        let ledger = MockCheckLedger::new();
        let check = NewLocationCheck {
            user_id: "u-1".to_string(),
            lat: 1.0,
            lon: 2.0,
            incident_ids: vec![],
            has_danger: false,
            distance_m: None,
        };
        tokio_test::block_on(ledger.save(check.clone())).unwrap();
        assert_eq!(ledger.saved(), vec![check]);
    }

    #[test]
    fn test_mock_ledger_counts_queries() {
        let ledger = MockCheckLedger::with_user_count(4);
        assert_eq!(ledger.count_queries(), 0);
        let n = tokio_test::block_on(ledger.count_distinct_users_since(30)).unwrap();
        assert_eq!(n, 4);
        assert_eq!(ledger.count_queries(), 1);
    }
}
