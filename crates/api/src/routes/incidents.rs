//! Incident endpoint handlers.
//!
//! Operator CRUD over incident records plus the check statistics
//! endpoint. All routes here sit behind the API key middleware.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::{IncidentRepository, LocationCheckRepository};
use std::sync::Arc;
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::services::LocationCheckService;
use domain::models::{
    CreateIncidentRequest, Incident, IncidentResponse, ListIncidentsQuery, StatsQuery,
    StatsResponse, UpdateIncidentRequest,
};

/// Create a new incident. New incidents always start out active.
///
/// POST /api/v1/incidents
pub async fn create_incident(
    State(state): State<AppState>,
    Json(request): Json<CreateIncidentRequest>,
) -> Result<(StatusCode, Json<IncidentResponse>), ApiError> {
    request.validate()?;

    let repo = IncidentRepository::new(state.pool.clone());
    let entity = repo
        .create(&request.title, request.lat, request.lon, request.radius_m)
        .await?;

    let incident: Incident = entity.into();
    let response: IncidentResponse = incident.into();

    info!(
        incident_id = response.id,
        title = %response.title,
        radius_m = response.radius_m,
        "Incident created"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// List incidents, paginated.
///
/// GET /api/v1/incidents?page=1&limit=10
pub async fn list_incidents(
    State(state): State<AppState>,
    Query(query): Query<ListIncidentsQuery>,
) -> Result<Json<Vec<IncidentResponse>>, ApiError> {
    let page = shared::pagination::resolve(query.page, query.limit);

    let repo = IncidentRepository::new(state.pool.clone());
    let entities = repo.list(page.limit, page.offset).await?;

    let incidents: Vec<IncidentResponse> = entities
        .into_iter()
        .map(|e| {
            let incident: Incident = e.into();
            incident.into()
        })
        .collect();

    Ok(Json(incidents))
}

/// Get a single incident by ID.
///
/// GET /api/v1/incidents/:id
pub async fn get_incident(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<IncidentResponse>, ApiError> {
    let repo = IncidentRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Incident not found".to_string()))?;

    let incident: Incident = entity.into();
    Ok(Json(incident.into()))
}

/// Update an incident's mutable fields.
///
/// PUT /api/v1/incidents/:id
pub async fn update_incident(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateIncidentRequest>,
) -> Result<StatusCode, ApiError> {
    request.validate()?;

    let repo = IncidentRepository::new(state.pool.clone());
    repo.update(
        id,
        &request.title,
        request.lat,
        request.lon,
        request.radius_m,
        request.active,
    )
    .await?
    .ok_or_else(|| ApiError::NotFound("Incident not found".to_string()))?;

    info!(incident_id = id, "Incident updated");
    Ok(StatusCode::NO_CONTENT)
}

/// Logically delete an incident by clearing its active flag. The record
/// is retained.
///
/// DELETE /api/v1/incidents/:id
pub async fn deactivate_incident(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let repo = IncidentRepository::new(state.pool.clone());
    let rows_affected = repo.deactivate(id).await?;

    if rows_affected == 0 {
        return Err(ApiError::NotFound("Incident not found".to_string()));
    }

    info!(incident_id = id, "Incident deactivated");
    Ok(StatusCode::NO_CONTENT)
}

/// Count distinct users checked within the trailing window. A missing
/// `minutes` falls back to the configured default; a non-positive one is
/// rejected.
///
/// GET /api/v1/incidents/stats?minutes=60
pub async fn stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<StatsResponse>, ApiError> {
    let minutes = query
        .minutes
        .unwrap_or(state.config.stats.default_window_minutes);

    let service = LocationCheckService::new(
        Arc::new(IncidentRepository::new(state.pool.clone())),
        Arc::new(LocationCheckRepository::new(state.pool.clone())),
        state.notifier.clone(),
    );

    let user_count = service.unique_users(minutes).await?;

    Ok(Json(StatsResponse { user_count }))
}
