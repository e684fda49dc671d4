//! Incident entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use domain::models::Incident;

/// Database row mapping for the incidents table.
#[derive(Debug, Clone, FromRow)]
pub struct IncidentEntity {
    pub id: i64,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub radius_m: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<IncidentEntity> for Incident {
    fn from(entity: IncidentEntity) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            lat: entity.lat,
            lon: entity.lon,
            radius_m: entity.radius_m,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}
