//! Common validation utilities.

use validator::ValidationError;

/// Largest radius an operator may assign to an incident zone, in meters.
const MAX_RADIUS_M: i32 = 1_000_000;

/// Validates that an incident radius is positive and within bounds.
pub fn validate_radius_m(radius_m: i32) -> Result<(), ValidationError> {
    if (1..=MAX_RADIUS_M).contains(&radius_m) {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be between 1 and 1000000 meters".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_radius_m() {
        assert!(validate_radius_m(1).is_ok());
        assert!(validate_radius_m(500).is_ok());
        assert!(validate_radius_m(MAX_RADIUS_M).is_ok());
        assert!(validate_radius_m(0).is_err());
        assert!(validate_radius_m(-100).is_err());
        assert!(validate_radius_m(MAX_RADIUS_M + 1).is_err());
    }

    #[test]
    fn test_validate_radius_m_error_message() {
        let err = validate_radius_m(0).unwrap_err();
        assert_eq!(
            err.message.unwrap().to_string(),
            "Radius must be between 1 and 1000000 meters"
        );
    }
}
