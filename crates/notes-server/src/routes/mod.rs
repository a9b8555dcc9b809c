//! Route definitions for the HTTP API.

pub mod fallback;
pub mod notes;
pub mod root;

use axum::Router;

use crate::state::AppState;

/// Build the complete router with all routes and the unmatched-request
/// fallbacks.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();
    let routes = Router::new().merge(root::routes()).merge(notes::routes());

    fallback::attach(routes, &static_dir).with_state(state)
}
