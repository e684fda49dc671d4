//! Location check domain model.
//!
//! A location check is one evaluation of a user's position against the
//! active incident set. Every check is recorded in the ledger, whether or
//! not anything matched.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted location check (ledger row).
#[derive(Debug, Clone, Serialize)]
pub struct LocationCheck {
    pub id: i64,
    pub user_id: String,
    pub lat: f64,
    pub lon: f64,
    /// IDs of the incidents whose zones contained the point.
    pub incident_ids: Vec<i64>,
    pub has_danger: bool,
    /// Distance to the nearest matched zone's center, in meters.
    pub distance_m: Option<i32>,
    pub checked_at: DateTime<Utc>,
}

/// A location check about to be recorded. The ledger assigns the ID and
/// the timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocationCheck {
    pub user_id: String,
    pub lat: f64,
    pub lon: f64,
    pub incident_ids: Vec<i64>,
    pub has_danger: bool,
    pub distance_m: Option<i32>,
}

/// Request payload for the location check endpoint.
///
/// Coordinates are taken as-is; only the user identifier is required to
/// be non-empty.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckLocationRequest {
    #[validate(length(min = 1, message = "user_id must not be empty"))]
    pub user_id: String,

    pub lat: f64,

    pub lon: f64,
}
