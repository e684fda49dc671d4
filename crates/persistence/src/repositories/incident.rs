//! Incident repository for database operations.

use sqlx::PgPool;

use crate::entities::IncidentEntity;
use crate::metrics::QueryTimer;
use domain::models::Incident;
use domain::services::IncidentStore;

/// Repository for incident-related database operations.
#[derive(Clone)]
pub struct IncidentRepository {
    pool: PgPool,
}

impl IncidentRepository {
    /// Creates a new IncidentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new incident. New incidents are always active.
    pub async fn create(
        &self,
        title: &str,
        lat: f64,
        lon: f64,
        radius_m: i32,
    ) -> Result<IncidentEntity, sqlx::Error> {
        let timer = QueryTimer::new("create_incident");
        let result = sqlx::query_as::<_, IncidentEntity>(
            r#"
            INSERT INTO incidents (title, lat, lon, radius_m, active)
            VALUES ($1, $2, $3, $4, TRUE)
            RETURNING *
            "#,
        )
        .bind(title)
        .bind(lat)
        .bind(lon)
        .bind(radius_m)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an incident by ID.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<IncidentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_incident_by_id");
        let result = sqlx::query_as::<_, IncidentEntity>(
            r#"
            SELECT * FROM incidents WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List incidents ordered by ID.
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<IncidentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_incidents");
        let result = sqlx::query_as::<_, IncidentEntity>(
            r#"
            SELECT * FROM incidents
            ORDER BY id
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Update an incident's mutable fields.
    /// Returns `None` when no incident with that ID exists.
    pub async fn update(
        &self,
        id: i64,
        title: &str,
        lat: f64,
        lon: f64,
        radius_m: i32,
        active: bool,
    ) -> Result<Option<IncidentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("update_incident");
        let result = sqlx::query_as::<_, IncidentEntity>(
            r#"
            UPDATE incidents
            SET title = $2, lat = $3, lon = $4, radius_m = $5, active = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(title)
        .bind(lat)
        .bind(lon)
        .bind(radius_m)
        .bind(active)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Logically delete an incident by clearing its active flag.
    /// Returns the number of rows affected (0 or 1).
    pub async fn deactivate(&self, id: i64) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("deactivate_incident");
        let result = sqlx::query(
            r#"
            UPDATE incidents SET active = FALSE WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        timer.record();
        Ok(result.rows_affected())
    }

    /// Fetch all currently active incidents.
    pub async fn find_active_entities(&self) -> Result<Vec<IncidentEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_active_incidents");
        let result = sqlx::query_as::<_, IncidentEntity>(
            r#"
            SELECT * FROM incidents WHERE active = TRUE ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[async_trait::async_trait]
impl IncidentStore for IncidentRepository {
    async fn find_active(&self) -> Result<Vec<Incident>, sqlx::Error> {
        let entities = self.find_active_entities().await?;
        Ok(entities.into_iter().map(Incident::from).collect())
    }
}
