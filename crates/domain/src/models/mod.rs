//! Domain models for Geo Alert.

pub mod incident;
pub mod location_check;
pub mod stats;

pub use incident::{
    CreateIncidentRequest, Incident, IncidentResponse, ListIncidentsQuery, UpdateIncidentRequest,
};
pub use location_check::{CheckLocationRequest, LocationCheck, NewLocationCheck};
pub use stats::{StatsQuery, StatsResponse};
