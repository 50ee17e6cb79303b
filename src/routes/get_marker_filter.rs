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
pub struct GetMarkerFilterPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide filter parameter"))]
    pub text: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetMarkerFilterResponseData {
    pub filtered_markers: Vec<Marker>,
}

#[derive(Serialize, Deserialize)]
pub struct GetMarkerFilterResponse {
    pub data: GetMarkerFilterResponseData,
}

pub async fn get_marker_filter(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetMarkerFilterPayload>,
) -> Result<Response, AppError> {
    let filtered_markers = state.sidebar.submit_filter(&payload.text)?;

    Ok((
        StatusCode::OK,
        Json(GetMarkerFilterResponse {
            data: GetMarkerFilterResponseData { filtered_markers },
        }),
    )
        .into_response())
}
