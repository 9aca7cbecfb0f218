//! Handlers for the soil history and rotation suggestion.

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;

use greenhouse_app::ports::Clock;

use crate::state::AppState;

/// Response body for the suggestion endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResponse {
    pub suggested_plant: String,
}

/// `POST /plants/{plantType}`
pub async fn add<C>(State(state): State<AppState<C>>, Path(plant_type): Path<String>) -> String
where
    C: Clock + Send + Sync + 'static,
{
    state.rotation.add_plant(&plant_type);
    "Added a new plant to soil history".to_owned()
}

/// `GET /plants/suggestion`
pub async fn suggestion<C>(State(state): State<AppState<C>>) -> Json<SuggestionResponse>
where
    C: Clock + Send + Sync + 'static,
{
    Json(SuggestionResponse {
        suggested_plant: state.rotation.suggestion(),
    })
}
