//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use greenhouse_app::ports::Clock;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Routes sit at the root (no `/api` prefix) because the paths themselves
/// are the compatibility contract. Includes a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing`
/// ecosystem.
pub fn build<C>(state: AppState<C>) -> Router
where
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route("/ready", get(ready))
        .merge(crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe. The literal `"2"` is what the existing monitoring
/// expects.
async fn ready() -> &'static str {
    "2"
}
