use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::{
    auth::repo::User,
    auth::AuthUser,
    certificates::dto::{CertificateRequest, CertificateResponse},
    certificates::repo::Certificate,
    certificates::services::completion_gate,
    error::{ApiError, ApiResult},
    progress::repo::UserProgress,
    state::AppState,
};

pub fn certificate_routes() -> Router<AppState> {
    Router::new()
        .route("/certificate/generate", post(generate_certificate))
        .route("/certificate/download/:certificate_id", get(download_certificate))
        .route("/certificate/:certificate_id", get(view_certificate))
}

/// Generation is not idempotent: repeated calls for the same completed
/// path each mint a fresh certificate.
#[instrument(skip(state, request))]
pub async fn generate_certificate(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CertificateRequest>,
) -> ApiResult<Json<CertificateResponse>> {
    let progress = UserProgress::find(&state.db, user_id, &request.path_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("No progress found for this path".into()))?;

    let path = state
        .catalog
        .path(&request.path_id)
        .ok_or_else(|| ApiError::NotFound("Career path not found".into()))?;

    let completed_count = progress.completed_milestones.0.len();
    let total_count = path.total_milestones();
    if let Err(e) = completion_gate(completed_count, total_count) {
        warn!(
            %user_id,
            path_id = %request.path_id,
            completed_count,
            total_count,
            "certificate requested before completion"
        );
        return Err(e);
    }

    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".into()))?;

    let certificate = Certificate::insert(
        &state.db,
        user_id,
        &user.name,
        &request.path_id,
        &path.name,
        total_count as i32,
        &progress.achievements.0,
    )
    .await?;

    info!(%user_id, certificate_id = %certificate.id, path_id = %request.path_id, "certificate issued");
    Ok(Json(CertificateResponse::new(certificate)))
}

/// Public lookup; certificates are viewable by anyone holding the id.
#[instrument(skip(state))]
pub async fn download_certificate(
    State(state): State<AppState>,
    Path(certificate_id): Path<Uuid>,
) -> ApiResult<Json<Certificate>> {
    let certificate = Certificate::find(&state.db, certificate_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Certificate not found".into()))?;
    Ok(Json(certificate))
}

#[instrument(skip(state))]
pub async fn view_certificate(
    State(state): State<AppState>,
    Path(certificate_id): Path<Uuid>,
) -> ApiResult<Json<Certificate>> {
    let certificate = Certificate::find(&state.db, certificate_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Certificate not found".into()))?;
    Ok(Json(certificate))
}
