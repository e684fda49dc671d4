//! Domain services for Geo Alert.
//!
//! Services contain business logic that operates on domain models, plus
//! the collaborator traits the location-check pipeline is composed from.

pub mod geofence;
pub mod notifier;
pub mod store;

pub use geofence::{distance_meters, find_matches, GeofenceMatch, EARTH_RADIUS_M};
pub use notifier::{AlertNotifier, MockAlertNotifier};
pub use store::{CheckLedger, IncidentStore, MockCheckLedger, MockIncidentStore};
