use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::repo::User,
    auth::AuthUser,
    error::{ApiError, ApiResult},
    progress::repo::UserProgress,
    share::dto::{ShareRequest, ShareResponse},
    share::repo::SharedProgress,
    state::AppState,
};

pub fn share_routes() -> Router<AppState> {
    Router::new()
        .route("/share/progress", post(share_progress))
        .route("/share/:share_id", get(view_shared_progress))
}

#[instrument(skip(state, request))]
pub async fn share_progress(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<ShareRequest>,
) -> ApiResult<Json<ShareResponse>> {
    let progress = UserProgress::find(&state.db, user_id, &request.path_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No progress found for this path".into()))?;

    let path = state
        .catalog
        .path(&request.path_id)
        .ok_or_else(|| ApiError::NotFound("Career path not found".into()))?;

    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let snapshot = SharedProgress::insert(
        &state.db,
        &user.name,
        &request.path_id,
        &path.name,
        progress.completed_milestones.0.len() as i32,
        path.total_milestones() as i32,
        &progress.achievements.0,
    )
    .await?;

    info!(%user_id, share_id = %snapshot.id, path_id = %request.path_id, "progress shared");
    Ok(Json(ShareResponse::new(snapshot)))
}

/// Public lookup by share id; the snapshot never reflects later updates.
#[instrument(skip(state))]
pub async fn view_shared_progress(
    State(state): State<AppState>,
    Path(share_id): Path<Uuid>,
) -> ApiResult<Json<SharedProgress>> {
    let snapshot = SharedProgress::find(&state.db, share_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Shared progress not found".into()))?;
    Ok(Json(snapshot))
}
