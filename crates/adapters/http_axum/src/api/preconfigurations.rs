//! Handlers for the preconfiguration catalog.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use greenhouse_app::ports::Clock;
use greenhouse_domain::preconfiguration::Preconfiguration;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the apply endpoint.
pub enum ApplyResponse {
    Ok(String),
    NotFound(String),
}

impl IntoResponse for ApplyResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(text) => text.into_response(),
            Self::NotFound(text) => (StatusCode::NOT_FOUND, text).into_response(),
        }
    }
}

/// Possible responses from the add endpoint.
pub enum AddResponse {
    Created,
}

impl IntoResponse for AddResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created => StatusCode::CREATED.into_response(),
        }
    }
}

/// `GET /preconfigurations`
pub async fn list<C>(State(state): State<AppState<C>>) -> Json<Vec<Preconfiguration>>
where
    C: Clock + Send + Sync + 'static,
{
    Json(state.preconfigurations.list())
}

/// `POST /preconfigurations`
pub async fn add<C>(
    State(state): State<AppState<C>>,
    Json(record): Json<Preconfiguration>,
) -> Result<AddResponse, ApiError>
where
    C: Clock + Send + Sync + 'static,
{
    state.preconfigurations.add(record)?;
    Ok(AddResponse::Created)
}

/// `POST /preconfigurations/{index}`
pub async fn apply<C>(
    State(state): State<AppState<C>>,
    Path(index): Path<usize>,
) -> ApplyResponse
where
    C: Clock + Send + Sync + 'static,
{
    match state.preconfigurations.apply(index) {
        Ok(()) => ApplyResponse::Ok(format!("Configuration {index} was applied")),
        Err(_) => ApplyResponse::NotFound(format!("The preconfiguration {index} was not found")),
    }
}
