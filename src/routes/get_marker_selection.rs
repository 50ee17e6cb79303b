use crate::{
    types::{app_state::AppState, marker::Marker},
    utils::{app_error::AppError, validated_query::ValidatedQuery},
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetMarkerSelectionPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub title: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetMarkerSelectionResponse {
    pub data: Marker,
}

pub async fn get_marker_selection(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetMarkerSelectionPayload>,
) -> Result<Response, AppError> {
    let marker = state.sidebar.pick_item(&payload.title)?;

    Ok((StatusCode::OK, Json(GetMarkerSelectionResponse { data: marker })).into_response())
}
