use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_marker_filter;
mod get_marker_selection;
mod get_markers;
mod get_place_search;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route(
        "/place-search",
        get(get_place_search::get_place_search),
    )
    .route("/markers", get(get_markers::get_markers))
    .route(
        "/markers/filter",
        get(get_marker_filter::get_marker_filter),
    )
    .route(
        "/markers/select",
        get(get_marker_selection::get_marker_selection),
    )
}
