//! Incident domain model.
//!
//! An incident is a circular danger zone: a center point, a radius in
//! meters, and an active flag. Deactivation is the only form of deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents an incident (danger zone) in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Incident {
    pub id: i64,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub radius_m: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

/// Request payload for creating an incident.
///
/// Coordinates are accepted as-is; only the radius is range-checked.
/// New incidents always start out active.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateIncidentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub lat: f64,

    pub lon: f64,

    #[validate(custom(function = "shared::validation::validate_radius_m"))]
    pub radius_m: i32,
}

/// Request payload for updating an incident (full update of mutable fields).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateIncidentRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    pub lat: f64,

    pub lon: f64,

    #[validate(custom(function = "shared::validation::validate_radius_m"))]
    pub radius_m: i32,

    pub active: bool,
}

/// Response payload for incident operations.
#[derive(Debug, Clone, Serialize)]
pub struct IncidentResponse {
    pub id: i64,
    pub title: String,
    pub lat: f64,
    pub lon: f64,
    pub radius_m: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Incident> for IncidentResponse {
    fn from(i: Incident) -> Self {
        Self {
            id: i.id,
            title: i.title,
            lat: i.lat,
            lon: i.lon,
            radius_m: i.radius_m,
            active: i.active,
            created_at: i.created_at,
        }
    }
}

/// Query parameters for listing incidents.
#[derive(Debug, Clone, Deserialize)]
pub struct ListIncidentsQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_incident_request_deserialization() {
        let json = r#"{
            "title": "Warehouse fire",
            "lat": 55.7558,
            "lon": 37.6173,
            "radius_m": 800
        }"#;

        let request: CreateIncidentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Warehouse fire");
        assert_eq!(request.lat, 55.7558);
        assert_eq!(request.lon, 37.6173);
        assert_eq!(request.radius_m, 800);
    }

    #[test]
    fn test_create_incident_request_rejects_non_positive_radius() {
        let request = CreateIncidentRequest {
            title: "Flood".to_string(),
            lat: 0.0,
            lon: 0.0,
            radius_m: 0,
        };
        assert!(request.validate().is_err());

        let request = CreateIncidentRequest {
            radius_m: -50,
            ..request
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_incident_request_accepts_out_of_range_coordinates() {
        // Coordinate ranges are deliberately not validated.
        let request = CreateIncidentRequest {
            title: "Offshore".to_string(),
            lat: 123.0,
            lon: -999.0,
            radius_m: 100,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_incident_request_rejects_empty_title() {
        let request = CreateIncidentRequest {
            title: String::new(),
            lat: 0.0,
            lon: 0.0,
            radius_m: 100,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_incident_request_deserialization() {
        let json = r#"{
            "title": "Gas leak (contained)",
            "lat": 48.8566,
            "lon": 2.3522,
            "radius_m": 300,
            "active": false
        }"#;

        let request: UpdateIncidentRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.title, "Gas leak (contained)");
        assert_eq!(request.radius_m, 300);
        assert!(!request.active);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_incident_response_serialization() {
        let response = IncidentResponse {
            id: 7,
            title: "Fire".to_string(),
            lat: 1.5,
            lon: -2.5,
            radius_m: 1000,
            active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"title\":\"Fire\""));
        assert!(json.contains("\"radius_m\":1000"));
        assert!(json.contains("\"active\":true"));
        assert!(json.contains("\"created_at\":"));
    }

    #[test]
    fn test_list_incidents_query_optional_fields() {
        let query: ListIncidentsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.page.is_none());
        assert!(query.limit.is_none());

        let query: ListIncidentsQuery =
            serde_json::from_str(r#"{"page": 2, "limit": 50}"#).unwrap();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(50));
    }
}
