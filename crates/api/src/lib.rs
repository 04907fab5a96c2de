//! # Marquee API
//!
//! The API crate provides the web server for the Marquee venue-booking
//! service: the scheduling and booking command surface, the availability
//! query, ticket lookups and the `schedule_updated` notification stream.
//!
//! ## Architecture
//!
//! - **Routes**: API endpoints and URL structure
//! - **Handlers**: request processing on top of the store traits
//! - **Middleware**: error mapping to HTTP responses
//! - **Sweeper**: the background task that retires expired showtimes
//! - **Config**: environment-based configuration

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement the command surface
pub mod handlers;
/// Error-mapping middleware
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;
/// Background expiry sweep
pub mod sweeper;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use marquee_core::models::schedule::ScheduleUpdated;
use marquee_db::store::Store;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// Store backing the timetable, venues and tickets
    pub store: Arc<dyn Store>,
    /// Fan-out channel for sweep notifications; SSE subscribers tap it
    pub events: broadcast::Sender<ScheduleUpdated>,
}

impl ApiState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        let (events, _) = broadcast::channel(64);
        Self { store, events }
    }
}

/// Builds the application router with all routes attached.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Venue template endpoints
        .merge(routes::venue::routes())
        // Timetable endpoints
        .merge(routes::schedule::routes())
        // Availability and booking endpoints
        .merge(routes::booking::routes())
        // Ticket lookup endpoints
        .merge(routes::ticket::routes())
        // Live schedule-change notifications
        .merge(routes::events::routes())
        // Attach shared state to all routes
        .with_state(state)
}

/// Starts the API server: logging, the expiry sweeper and the HTTP
/// listener, with the provided store backing everything.
pub async fn start_server(config: config::ApiConfig, store: Arc<dyn Store>) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState::new(store));

    // The sweep runs for the lifetime of the server, off the request path
    tokio::spawn(sweeper::run(state.clone(), config.sweep_interval()));

    let app = router(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .map(|origin| origin.parse().unwrap())
                    .collect::<Vec<axum::http::HeaderValue>>(),
            );

        app.layer(cors)
    } else {
        app
    };

    // Request logging and timeout middleware
    let app = app.layer(
        tower::ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(std::time::Duration::from_secs(
                config.request_timeout,
            )))
            .into_inner(),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
