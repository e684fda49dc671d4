//! Webhook dispatch service.
//!
//! Delivers match events to a single configured HTTP endpoint. Delivery
//! is best-effort and fire-and-forget: it runs on a detached task with
//! its own bounded timeout, and every failure is logged and discarded.

use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

use domain::models::{Incident, IncidentResponse};
use domain::services::AlertNotifier;

/// Payload delivered to the webhook endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AlertPayload {
    pub user_id: String,
    pub incidents: Vec<IncidentResponse>,
    pub sent_at: DateTime<Utc>,
}

/// Dispatches match events to the configured endpoint.
pub struct WebhookDispatcher {
    url: Option<String>,
    client: Client,
}

impl WebhookDispatcher {
    /// Create a dispatcher for the given target URL. An empty URL
    /// disables dispatch entirely; every notify becomes a no-op.
    pub fn new(url: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            url: (!url.is_empty()).then(|| url.to_string()),
            client,
        }
    }

    /// Whether a target endpoint is configured.
    pub fn is_enabled(&self) -> bool {
        self.url.is_some()
    }

    async fn deliver(client: Client, url: String, payload: AlertPayload) {
        let user_id = payload.user_id.clone();
        match client.post(&url).json(&payload).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                if (200..300).contains(&status) {
                    info!(user_id = %user_id, status, "Alert webhook delivered");
                } else {
                    warn!(
                        user_id = %user_id,
                        status,
                        "Alert webhook returned non-success status"
                    );
                }
            }
            Err(e) => {
                warn!(user_id = %user_id, error = %e, "Alert webhook delivery failed");
            }
        }
    }
}

impl AlertNotifier for WebhookDispatcher {
    /// Spawns a detached delivery task. The task owns its own timeout
    /// and is not tied to the lifetime of the request that triggered it;
    /// the caller returns immediately.
    fn notify(&self, user_id: &str, incidents: &[Incident]) {
        let Some(url) = self.url.clone() else {
            return;
        };

        let payload = AlertPayload {
            user_id: user_id.to_string(),
            incidents: incidents
                .iter()
                .cloned()
                .map(IncidentResponse::from)
                .collect(),
            sent_at: Utc::now(),
        };
        let client = self.client.clone();

        tokio::spawn(async move {
            Self::deliver(client, url, payload).await;
        });
    }
}
