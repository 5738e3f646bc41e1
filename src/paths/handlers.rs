use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::instrument;

use crate::{
    catalog::CareerPath,
    error::{ApiError, ApiResult},
    state::AppState,
};

pub fn path_routes() -> Router<AppState> {
    Router::new()
        .route("/career-paths", get(list_career_paths))
        .route("/career-paths/:path_id", get(get_career_path))
}

#[instrument(skip(state))]
pub async fn list_career_paths(State(state): State<AppState>) -> Json<Vec<CareerPath>> {
    Json(state.catalog.paths.clone())
}

#[instrument(skip(state))]
pub async fn get_career_path(
    State(state): State<AppState>,
    Path(path_id): Path<String>,
) -> ApiResult<Json<CareerPath>> {
    let path = state
        .catalog
        .path(&path_id)
        .ok_or_else(|| ApiError::NotFound("Career path not found".into()))?;
    Ok(Json(path.clone()))
}
