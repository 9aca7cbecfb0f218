//! Handlers for reading and writing individual settings.
//!
//! These endpoints answer in plain text with the exact phrasing the
//! historical clients expect.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use greenhouse_app::ports::Clock;
use greenhouse_domain::setting::SettingsSnapshot;

use crate::state::AppState;

/// Possible responses from the set endpoint.
pub enum SetResponse {
    Ok(String),
    NotFound(String),
}

impl IntoResponse for SetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => text.into_response(),
            Self::NotFound(text) => (StatusCode::NOT_FOUND, text).into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(String),
    NotFound(String),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => text.into_response(),
            Self::NotFound(text) => (StatusCode::NOT_FOUND, text).into_response(),
        }
    }
}

/// `POST /settings/{settingName}/{value}`
pub async fn set<C>(
    State(state): State<AppState<C>>,
    Path((name, value)): Path<(String, String)>,
) -> SetResponse
where
    C: Clock + Send + Sync + 'static,
{
    match state.settings.set_setting(&name, &value) {
        Ok(()) => SetResponse::Ok(format!("{name} was set to {value}")),
        // the wire contract folds unknown-name and bad-value into one text
        Err(_) => SetResponse::NotFound(format!(
            "{name} was not found and or '{value}' was not a valid value"
        )),
    }
}

/// `GET /settings/{settingName}`
pub async fn get_one<C>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
) -> GetResponse
where
    C: Clock + Send + Sync + 'static,
{
    match state.settings.get_setting(&name) {
        Ok(value) => GetResponse::Ok(format!("{name} is {value}")),
        Err(_) => GetResponse::NotFound(format!("{name} was not found")),
    }
}

/// `GET /settings`
pub async fn list<C>(State(state): State<AppState<C>>) -> Json<SettingsSnapshot>
where
    C: Clock + Send + Sync + 'static,
{
    Json(state.settings.snapshot())
}
