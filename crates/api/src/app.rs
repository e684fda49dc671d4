use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, require_api_key, trace_id};
use crate::routes::{health, incidents, locations};
use crate::services::WebhookDispatcher;
use domain::services::AlertNotifier;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub notifier: Arc<dyn AlertNotifier>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let notifier: Arc<dyn AlertNotifier> = Arc::new(WebhookDispatcher::new(
        &config.webhook.url,
        config.webhook.timeout_secs,
    ));
    create_app_with_notifier(config, pool, notifier)
}

/// Build the application router with an explicit notifier. Tests use
/// this to substitute a recording notifier.
pub fn create_app_with_notifier(
    config: Config,
    pool: PgPool,
    notifier: Arc<dyn AlertNotifier>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        notifier,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/v1/location/check", post(locations::check_location))
        .route("/api/health", get(health::health_check))
        .route("/api/health/live", get(health::live))
        .route("/api/health/ready", get(health::ready))
        .route("/metrics", get(metrics_handler));

    // Operator routes (require the API key)
    let protected_routes = Router::new()
        .route(
            "/api/v1/incidents",
            post(incidents::create_incident).get(incidents::list_incidents),
        )
        .route("/api/v1/incidents/stats", get(incidents::stats))
        .route(
            "/api/v1/incidents/:id",
            get(incidents::get_incident)
                .put(incidents::update_incident)
                .delete(incidents::deactivate_incident),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
