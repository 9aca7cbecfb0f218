//! Handlers for the irrigation planner.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use greenhouse_app::ports::Clock;

use crate::state::AppState;

/// Response body for the watering-time endpoint.
///
/// `irigationTime` (sic) is the field name the historical clients parse;
/// fixing the spelling would be a breaking interface change.
#[derive(Serialize)]
pub struct IrrigationTimeResponse {
    #[serde(rename = "irigationTime")]
    pub irrigation_time: String,
}

/// Response body for the water-amount endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterAmountResponse {
    pub water_amount: f64,
}

/// `GET /irrigation/time`
pub async fn time<C>(State(state): State<AppState<C>>) -> Json<IrrigationTimeResponse>
where
    C: Clock + Send + Sync + 'static,
{
    Json(IrrigationTimeResponse {
        irrigation_time: state.irrigation.next_irrigation().to_string(),
    })
}

/// `GET /irrigation/water-amount`
pub async fn water_amount<C>(State(state): State<AppState<C>>) -> Json<WaterAmountResponse>
where
    C: Clock + Send + Sync + 'static,
{
    Json(WaterAmountResponse {
        water_amount: state.irrigation.water_amount(),
    })
}
