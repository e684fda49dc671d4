//! Location check endpoint handler.

use axum::{extract::State, Json};
use persistence::repositories::{IncidentRepository, LocationCheckRepository};
use std::sync::Arc;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_location_check;
use crate::services::LocationCheckService;
use domain::models::{CheckLocationRequest, IncidentResponse};

/// Check a user's position against the active incident set.
///
/// Returns the matched incidents as a JSON array; an empty array (never
/// null) when nothing matched. Coordinates are accepted as-is.
///
/// POST /api/v1/location/check
pub async fn check_location(
    State(state): State<AppState>,
    Json(request): Json<CheckLocationRequest>,
) -> Result<Json<Vec<IncidentResponse>>, ApiError> {
    request.validate()?;

    let service = LocationCheckService::new(
        Arc::new(IncidentRepository::new(state.pool.clone())),
        Arc::new(LocationCheckRepository::new(state.pool.clone())),
        state.notifier.clone(),
    );

    let nearby = service
        .check_location(&request.user_id, request.lat, request.lon)
        .await?;

    record_location_check(nearby.len());

    let response: Vec<IncidentResponse> = nearby.into_iter().map(IncidentResponse::from).collect();
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_location_request_deserialization() {
        let json = r#"{"user_id": "device-17", "lat": -33.87, "lon": 151.21}"#;
        let request: CheckLocationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.user_id, "device-17");
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_check_location_request_missing_field_is_rejected() {
        let json = r#"{"user_id": "device-17", "lat": -33.87}"#;
        let result: Result<CheckLocationRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_matched_set_serializes_to_empty_array() {
        let response: Vec<IncidentResponse> = Vec::new();
        assert_eq!(serde_json::to_string(&response).unwrap(), "[]");
    }
}
