//! Application assembly: routes plus the middleware stack.
//!
//! The resulting router is built once at startup and handed to the listener.
//! Tests build it the same way.

use axum::{Router, middleware};
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ConfigError;
use crate::middleware::request_id::{propagate_request_id_layer, set_request_id_layer};
use crate::middleware::request_logger::log_request;
use crate::routes;
use crate::state::AppState;

/// Build the router with logging, request ID, CORS and tracing layers.
///
/// Layers run outermost first: tracing, CORS, request ID, then the request
/// logger immediately before routing.
pub fn build_app(state: AppState) -> Result<Router, ConfigError> {
    let cors = build_cors_layer(&state.config().cors_allowed_origins)?;

    Ok(routes::build_router(state)
        .layer(middleware::from_fn(log_request))
        .layer(propagate_request_id_layer())
        .layer(set_request_id_layer())
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// Build CORS layer from configuration.
pub fn build_cors_layer(allowed_origins: &str) -> Result<CorsLayer, ConfigError> {
    if allowed_origins.trim() == "*" {
        return Ok(CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any));
    }

    // Parse comma-separated origins
    let origins = allowed_origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|_| ConfigError::InvalidValue {
                name: "CORS_ALLOWED_ORIGINS".to_string(),
                reason: format!("invalid origin {:?}", s),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_wildcard_and_list() {
        assert!(build_cors_layer("*").is_ok());
        assert!(build_cors_layer("http://localhost:5173, https://notes.example").is_ok());
    }

    #[test]
    fn test_cors_invalid_origin() {
        let err = build_cors_layer("http://ok.example,bad\norigin").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref name, .. } if name == "CORS_ALLOWED_ORIGINS"));
    }
}
