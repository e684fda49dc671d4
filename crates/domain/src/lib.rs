//! Domain layer for the Geo Alert backend.
//!
//! Contains the incident and location-check models, the pure geofence
//! matching service, and the collaborator traits the check pipeline is
//! built against.

pub mod models;
pub mod services;
