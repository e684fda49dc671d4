//! Check statistics model.

use serde::{Deserialize, Serialize};

/// Query parameters for the stats endpoint. A missing `minutes` falls
/// back to the configured default window.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsQuery {
    pub minutes: Option<i64>,
}

/// Response payload for the stats endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub user_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_query_optional_minutes() {
        let query: StatsQuery = serde_json::from_str("{}").unwrap();
        assert!(query.minutes.is_none());

        let query: StatsQuery = serde_json::from_str(r#"{"minutes": 15}"#).unwrap();
        assert_eq!(query.minutes, Some(15));
    }

    #[test]
    fn test_stats_response_serialization() {
        let response = StatsResponse { user_count: 12 };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"user_count":12}"#
        );
    }
}
