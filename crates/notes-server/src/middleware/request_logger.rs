//! Request logging middleware.
//!
//! Logs the method, path and body of every request before it is routed.
//! Bodies are logged verbatim; nothing is filtered or redacted. The body is
//! buffered and handed on unchanged, up to [`MAX_BODY_BYTES`]. Anything
//! larger is refused with 413 before it reaches a route.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use http_body_util::{BodyExt, LengthLimitError, Limited};

use crate::error::{ApiError, ApiResult};

/// Largest request body accepted, in bytes (100kb).
pub const MAX_BODY_BYTES: usize = 100 * 1024;

/// Log method, path and body, then continue.
pub async fn log_request(request: Request, next: Next) -> ApiResult<Response> {
    let (parts, body) = request.into_parts();

    let bytes = match Limited::new(body, MAX_BODY_BYTES).collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) if e.is::<LengthLimitError>() => {
            tracing::warn!(
                method = %parts.method,
                path = %parts.uri.path(),
                limit = MAX_BODY_BYTES,
                "request body too large"
            );
            return Err(ApiError::PayloadTooLarge(e.to_string()));
        }
        Err(e) => {
            return Err(ApiError::BadRequest(format!(
                "failed to read request body: {}",
                e
            )));
        }
    };

    tracing::info!(
        method = %parts.method,
        path = %parts.uri.path(),
        body = %String::from_utf8_lossy(&bytes),
        "incoming request"
    );

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}
