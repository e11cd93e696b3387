//! # MedConsult API
//!
//! The API crate provides the web server for booking medical consultations.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Translate HTTP requests into [`BookingService`] calls
//! - **Middleware**: Identity extraction and error-to-response mapping
//! - **Config**: Handle environment and application configuration
//!
//! Booking rules live in `medconsult-core`; persistence in `medconsult-db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Authentication and error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use eyre::Result;
use medconsult_core::BookingService;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer};
use tracing::{info, warn};
use tracing_subscriber::FmtSubscriber;

use crate::middleware::auth::IdentityProvider;

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Booking rules bound to a Persistence Store and a clock
    pub booking: BookingService,
    /// Resolves bearer tokens to user ids
    pub identity: Arc<dyn IdentityProvider>,
}

/// Builds the application router with all routes and the shared state attached.
///
/// Server-level layers (CORS, timeouts) are added by [`start_server`], so tests
/// can drive this router directly.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Consultation booking endpoints
        .merge(routes::consultation::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
///
/// Initializes logging, applies CORS and request timeout layers, and serves
/// until the process is stopped.
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let app = router(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed = origins
            .iter()
            .filter_map(|origin| match origin.parse::<axum::http::HeaderValue>() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect::<Vec<_>>();

        let cors = CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::AUTHORIZATION,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(allowed)
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(TimeoutLayer::new(std::time::Duration::from_secs(
        config.request_timeout,
    )));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
