//! Root greeting.

use axum::{Router, response::Html, routing::get};

use crate::state::AppState;

/// Greeting served at `/`.
pub const GREETING: &str = "<h1>Hello World</h1>";

/// GET / - HTML greeting.
async fn greeting() -> Html<&'static str> {
    Html(GREETING)
}

/// Build root routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(greeting))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_greeting() {
        let Html(body) = greeting().await;
        assert_eq!(body, "<h1>Hello World</h1>");
    }
}
