use crate::{
    services::sidebar::sidebar_service::SidebarSnapshot, types::app_state::AppState,
    utils::app_error::AppError,
};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GetMarkersResponse {
    pub data: SidebarSnapshot,
}

pub async fn get_markers(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok((
        StatusCode::OK,
        Json(GetMarkersResponse {
            data: state.sidebar.snapshot(),
        }),
    )
        .into_response())
}
