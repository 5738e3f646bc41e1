use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tracing::instrument;
use uuid::Uuid;

use crate::{
    achievements::services::collect_user_achievements,
    catalog::AchievementDef,
    error::ApiResult,
    progress::repo::UserProgress,
    state::AppState,
};

pub fn achievement_routes() -> Router<AppState> {
    Router::new()
        .route("/achievements", get(get_achievements))
        .route("/user/:user_id/achievements", get(get_user_achievements))
}

#[derive(Debug, Serialize)]
pub struct AchievementCatalog {
    pub achievements: Vec<AchievementDef>,
}

#[derive(Debug, Serialize)]
pub struct UserAchievements {
    pub user_id: Uuid,
    pub achievements: Vec<String>,
}

#[instrument(skip(state))]
pub async fn get_achievements(State(state): State<AppState>) -> Json<AchievementCatalog> {
    Json(AchievementCatalog {
        achievements: state.catalog.achievements.clone(),
    })
}

#[instrument(skip(state))]
pub async fn get_user_achievements(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> ApiResult<Json<UserAchievements>> {
    let progress = UserProgress::list_by_user(&state.db, user_id).await?;
    let achievements = collect_user_achievements(&state.catalog, &progress);
    Ok(Json(UserAchievements {
        user_id,
        achievements,
    }))
}
