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
#[cfg(test)]
use axum_macros::debug_handler;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Validate, Deserialize)]
pub struct GetPlaceSearchPayload {
    #[serde(default)]
    #[validate(length(min = 1, message = "Please provide search parameter"))]
    pub query: String,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceSearchResponseData {
    pub token: u64,
    pub markers: Vec<Marker>,
    pub omitted: usize,
    pub notice: Option<String>,
    pub applied: bool,
}

#[derive(Serialize, Deserialize)]
pub struct GetPlaceSearchResponse {
    pub data: GetPlaceSearchResponseData,
}

#[cfg_attr(test, debug_handler)]
pub async fn get_place_search(
    State(state): State<AppState>,
    ValidatedQuery(payload): ValidatedQuery<GetPlaceSearchPayload>,
) -> Result<Response, AppError> {
    let report = state.sidebar.submit_search(&payload.query).await?;

    Ok((
        StatusCode::OK,
        Json(GetPlaceSearchResponse {
            data: GetPlaceSearchResponseData {
                token: report.token,
                markers: report.markers,
                omitted: report.omitted,
                notice: report.notice.map(|n| n.message().to_string()),
                applied: report.applied,
            },
        }),
    )
        .into_response())
}
