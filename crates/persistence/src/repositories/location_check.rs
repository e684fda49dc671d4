//! Location check repository for database operations.

use sqlx::PgPool;

use crate::metrics::QueryTimer;
use domain::models::NewLocationCheck;
use domain::services::CheckLedger;

/// Repository for the append-only location check ledger.
#[derive(Clone)]
pub struct LocationCheckRepository {
    pool: PgPool,
}

impl LocationCheckRepository {
    /// Creates a new LocationCheckRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert one check row. The database assigns the timestamp.
    pub async fn insert(&self, check: &NewLocationCheck) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("save_location_check");
        let result = sqlx::query(
            r#"
            INSERT INTO location_checks (user_id, lat, lon, incident_ids, has_danger, distance_m)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(&check.user_id)
        .bind(check.lat)
        .bind(check.lon)
        .bind(&check.incident_ids)
        .bind(check.has_danger)
        .bind(check.distance_m)
        .execute(&self.pool)
        .await;
        timer.record();
        result.map(|_| ())
    }

    /// Count distinct users with at least one check in the trailing window.
    pub async fn count_users_in_window(&self, minutes: i64) -> Result<i64, sqlx::Error> {
        let timer = QueryTimer::new("count_distinct_check_users");
        // make_interval takes int4; windows beyond i32::MAX minutes are
        // clamped rather than wrapped.
        let mins = i32::try_from(minutes).unwrap_or(i32::MAX);
        let count: Result<(i64,), sqlx::Error> = sqlx::query_as(
            r#"
            SELECT COUNT(DISTINCT user_id)
            FROM location_checks
            WHERE checked_at >= NOW() - make_interval(mins => $1)
            "#,
        )
        .bind(mins)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        count.map(|c| c.0)
    }
}

#[async_trait::async_trait]
impl CheckLedger for LocationCheckRepository {
    async fn save(&self, check: NewLocationCheck) -> Result<(), sqlx::Error> {
        self.insert(&check).await
    }

    async fn count_distinct_users_since(&self, minutes: i64) -> Result<i64, sqlx::Error> {
        self.count_users_in_window(minutes).await
    }
}
