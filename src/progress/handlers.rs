use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    progress::dto::{ProgressUpdate, ProgressUpdateResponse, ProgressView},
    progress::repo::UserProgress,
    progress::services::{apply_milestone_update, derive_achievements},
    state::AppState,
};

pub fn progress_routes() -> Router<AppState> {
    Router::new()
        .route("/progress/:user_id", get(list_user_progress))
        .route(
            "/progress/:user_id/:path_id",
            get(get_path_progress).post(update_progress),
        )
}

#[instrument(skip(state))]
pub async fn list_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<Vec<UserProgress>>> {
    let rows = UserProgress::list_by_user(&state.db, user_id).await?;
    Ok(Json(rows))
}

/// Missing progress is not an error: a user who never touched a path
/// gets the empty "not started" view.
#[instrument(skip(state))]
pub async fn get_path_progress(
    State(state): State<AppState>,
    Path((user_id, path_id)): Path<(Uuid, String)>,
) -> ApiResult<Json<ProgressView>> {
    let view = match UserProgress::find(&state.db, user_id, &path_id).await? {
        Some(row) => row.into(),
        None => ProgressView::not_started(user_id, path_id),
    };
    Ok(Json(view))
}

#[instrument(skip(state, update))]
pub async fn update_progress(
    State(state): State<AppState>,
    Path((user_id, path_id)): Path<(Uuid, String)>,
    Json(update): Json<ProgressUpdate>,
) -> ApiResult<Json<ProgressUpdateResponse>> {
    let path = state
        .catalog
        .path(&path_id)
        .ok_or_else(|| ApiError::NotFound("Career path not found".into()))?;

    let (mut completed, mut achievements) =
        match UserProgress::find(&state.db, user_id, &path_id).await? {
            Some(row) => (row.completed_milestones.0, row.achievements.0),
            None => (vec![], vec![]),
        };

    // Achievements are only re-derived after a new completion; removal
    // never revokes an earned badge.
    if apply_milestone_update(&mut completed, &update.milestone_id, update.completed)
        && update.completed
    {
        derive_achievements(completed.len(), path.total_milestones(), &mut achievements);
    }

    UserProgress::upsert(&state.db, user_id, &path_id, &completed, &achievements).await?;

    info!(
        %user_id,
        %path_id,
        milestone_id = %update.milestone_id,
        completed = update.completed,
        done = completed.len(),
        "progress updated"
    );
    Ok(Json(ProgressUpdateResponse {
        success: true,
        milestone_id: update.milestone_id,
        completed: update.completed,
    }))
}
