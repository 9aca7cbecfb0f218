//! REST API handler modules and route table.

pub mod irrigation;
pub mod plants;
#[allow(clippy::missing_errors_doc)]
pub mod preconfigurations;
pub mod settings;

use axum::Router;
use axum::routing::{get, post};

use greenhouse_app::ports::Clock;

use crate::state::AppState;

/// Build the API router. Paths mirror the historical service exactly.
pub fn routes<C>() -> Router<AppState<C>>
where
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        // Settings
        .route("/settings", get(settings::list::<C>))
        .route("/settings/{settingName}", get(settings::get_one::<C>))
        .route("/settings/{settingName}/{value}", post(settings::set::<C>))
        // Preconfigurations
        .route(
            "/preconfigurations",
            get(preconfigurations::list::<C>).post(preconfigurations::add::<C>),
        )
        .route(
            "/preconfigurations/{index}",
            post(preconfigurations::apply::<C>),
        )
        // Soil history & rotation
        .route("/plants/{plantType}", post(plants::add::<C>))
        .route("/plants/suggestion", get(plants::suggestion::<C>))
        // Irrigation
        .route("/irrigation/time", get(irrigation::time::<C>))
        .route("/irrigation/water-amount", get(irrigation::water_amount::<C>))
}
