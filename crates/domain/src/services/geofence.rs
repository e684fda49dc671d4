//! Geofence matching.
//!
//! Pure functions: great-circle distance between two coordinates and the
//! linear scan that filters a set of incidents down to the ones whose
//! zones contain a point.

use crate::models::Incident;

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// An incident whose zone contains the checked point, together with the
/// computed distance from the point to the zone's center.
#[derive(Debug, Clone)]
pub struct GeofenceMatch {
    pub incident: Incident,
    pub distance_m: f64,
}

/// Great-circle distance in meters between two WGS-84 coordinates,
/// using the haversine formula.
///
/// Inputs are not validated; out-of-range coordinates are computed as
/// given. The result is always non-negative and symmetric in its
/// arguments.
pub fn distance_meters(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let d_lat = (lat_b - lat_a).to_radians();
    let d_lon = (lon_b - lon_a).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.to_radians().cos() * lat_b.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Filters `incidents` down to the ones whose zone contains the point.
///
/// An incident matches when the distance from the point to its center is
/// less than or equal to its radius (an exact radius hit counts as
/// inside). The result preserves the input order. The caller is expected
/// to pass only active incidents; this function does not inspect the
/// active flag.
pub fn find_matches(lat: f64, lon: f64, incidents: &[Incident]) -> Vec<GeofenceMatch> {
    incidents
        .iter()
        .filter_map(|incident| {
            let distance_m = distance_meters(lat, lon, incident.lat, incident.lon);
            (distance_m <= f64::from(incident.radius_m)).then(|| GeofenceMatch {
                incident: incident.clone(),
                distance_m,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn incident(id: i64, lat: f64, lon: f64, radius_m: i32) -> Incident {
        Incident {
            id,
            title: format!("incident-{id}"),
            lat,
            lon,
            radius_m,
            active: true,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_distance_is_zero_for_identical_points() {
        assert_eq!(distance_meters(55.75, 37.61, 55.75, 37.61), 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let ab = distance_meters(59.9343, 30.3351, 55.7558, 37.6173);
        let ba = distance_meters(55.7558, 37.6173, 59.9343, 30.3351);
        assert!((ab - ba).abs() < 1e-9);
    }

    #[test]
    fn test_distance_one_degree_of_longitude_at_equator() {
        // One degree of arc on a sphere of radius 6,371,000 m.
        let d = distance_meters(0.0, 0.0, 0.0, 1.0);
        assert!((d - 111_194.93).abs() < 0.5, "got {d}");
    }

    #[test]
    fn test_distance_accepts_out_of_range_coordinates() {
        // No validation: the arithmetic just runs.
        let d = distance_meters(95.0, 200.0, -95.0, -200.0);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    #[test]
    fn test_point_inside_zone_matches() {
        // ~556 m east of the center, radius 1000 m.
        let incidents = vec![incident(1, 0.0, 0.0, 1000)];
        let matches = find_matches(0.0, 0.005, &incidents);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].incident.id, 1);
        assert!((matches[0].distance_m - 556.0).abs() < 1.0);
    }

    #[test]
    fn test_point_outside_zone_does_not_match() {
        // ~2,224 m east of the center, radius 1000 m.
        let incidents = vec![incident(1, 0.0, 0.0, 1000)];
        let matches = find_matches(0.0, 0.02, &incidents);
        assert!(matches.is_empty());
    }

    #[test]
    fn test_exact_radius_hit_counts_as_inside() {
        // distance == radius must match; at distance zero the comparison
        // is exact, so a zero radius exercises the boundary precisely.
        let incidents = vec![incident(1, 10.0, 20.0, 0)];
        let matches = find_matches(10.0, 20.0, &incidents);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].distance_m, 0.0);
    }

    #[test]
    fn test_empty_input_yields_empty_result() {
        assert!(find_matches(1.0, 2.0, &[]).is_empty());
    }

    #[test]
    fn test_result_preserves_input_order() {
        let incidents = vec![
            incident(5, 0.0, 0.0, 2000),
            incident(2, 0.0, 0.001, 2000),
            incident(9, 0.0, -0.001, 2000),
        ];
        let matches = find_matches(0.0, 0.0, &incidents);

        let ids: Vec<i64> = matches.iter().map(|m| m.incident.id).collect();
        assert_eq!(ids, vec![5, 2, 9]);
    }

    #[test]
    fn test_only_containing_zones_match() {
        let incidents = vec![
            incident(1, 0.0, 0.0, 1000),
            incident(2, 0.0, 0.1, 1000),
            incident(3, 0.0, 0.001, 500),
        ];
        let matches = find_matches(0.0, 0.0, &incidents);

        let ids: Vec<i64> = matches.iter().map(|m| m.incident.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
