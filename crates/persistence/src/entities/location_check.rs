//! Location check entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::LocationCheck;

/// Database row mapping for the location_checks table.
#[derive(Debug, Clone, FromRow)]
pub struct LocationCheckEntity {
    pub id: i64,
    pub user_id: String,
    pub lat: f64,
    pub lon: f64,
    pub incident_ids: Vec<i64>, // SQLx maps BIGINT[] to Vec<i64>
    pub has_danger: bool,
    pub distance_m: Option<i32>,
    pub checked_at: DateTime<Utc>,
}

impl From<LocationCheckEntity> for LocationCheck {
    fn from(entity: LocationCheckEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            lat: entity.lat,
            lon: entity.lon,
            incident_ids: entity.incident_ids,
            has_danger: entity.has_danger,
            distance_m: entity.distance_m,
            checked_at: entity.checked_at,
        }
    }
}
