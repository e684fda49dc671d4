//! Location check orchestration.
//!
//! Composes the incident store, the geofence matcher, the check ledger
//! and the alert notifier into the single operation exposed to callers:
//! check a point against the active set, record that the check happened,
//! and kick off a notification when something matched.

use std::sync::Arc;
use thiserror::Error;
use tracing::error;

use domain::models::{Incident, NewLocationCheck};
use domain::services::{find_matches, AlertNotifier, CheckLedger, IncidentStore};

/// Errors surfaced by the location check service.
#[derive(Debug, Error)]
pub enum LocationCheckError {
    #[error("user_id must not be empty")]
    EmptyUserId,

    #[error("minutes must be positive")]
    InvalidWindow,

    #[error("incident store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("check ledger query failed: {0}")]
    Ledger(#[source] sqlx::Error),
}

/// Orchestrates one location check end to end. Stateless per call; all
/// shared state lives behind the collaborators.
pub struct LocationCheckService {
    store: Arc<dyn IncidentStore>,
    ledger: Arc<dyn CheckLedger>,
    notifier: Arc<dyn AlertNotifier>,
}

impl LocationCheckService {
    pub fn new(
        store: Arc<dyn IncidentStore>,
        ledger: Arc<dyn CheckLedger>,
        notifier: Arc<dyn AlertNotifier>,
    ) -> Self {
        Self {
            store,
            ledger,
            notifier,
        }
    }

    /// Check a user's position against the active incident set.
    ///
    /// Exactly one ledger row is written per invocation, match or no
    /// match. A failed write is logged and swallowed: the caller's
    /// answer must not depend on bookkeeping. Only an unreachable
    /// incident store fails the check itself.
    pub async fn check_location(
        &self,
        user_id: &str,
        lat: f64,
        lon: f64,
    ) -> Result<Vec<Incident>, LocationCheckError> {
        if user_id.is_empty() {
            return Err(LocationCheckError::EmptyUserId);
        }

        let active = self
            .store
            .find_active()
            .await
            .map_err(LocationCheckError::StoreUnavailable)?;

        let matches = find_matches(lat, lon, &active);

        let check = NewLocationCheck {
            user_id: user_id.to_string(),
            lat,
            lon,
            incident_ids: matches.iter().map(|m| m.incident.id).collect(),
            has_danger: !matches.is_empty(),
            distance_m: matches
                .iter()
                .map(|m| m.distance_m)
                .min_by(f64::total_cmp)
                .map(|d| d.round() as i32),
        };

        if let Err(e) = self.ledger.save(check).await {
            error!(user_id = %user_id, error = %e, "Failed to record location check");
        }

        let nearby: Vec<Incident> = matches.into_iter().map(|m| m.incident).collect();

        if !nearby.is_empty() {
            self.notifier.notify(user_id, &nearby);
        }

        Ok(nearby)
    }

    /// Count distinct users checked within the trailing window.
    pub async fn unique_users(&self, minutes: i64) -> Result<i64, LocationCheckError> {
        if minutes <= 0 {
            return Err(LocationCheckError::InvalidWindow);
        }

        self.ledger
            .count_distinct_users_since(minutes)
            .await
            .map_err(LocationCheckError::Ledger)
    }
}
