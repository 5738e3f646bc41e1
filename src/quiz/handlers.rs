use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use crate::{
    auth::repo::User,
    auth::AuthUser,
    catalog::QuizQuestion,
    error::ApiResult,
    quiz::dto::{QuizResultResponse, QuizSubmission},
    quiz::services::{completion_estimate, score_submission},
    state::AppState,
};

pub fn quiz_routes() -> Router<AppState> {
    Router::new()
        .route("/quiz/questions", get(get_quiz_questions))
        .route("/quiz/submit", post(submit_quiz))
}

#[instrument(skip(state))]
pub async fn get_quiz_questions(State(state): State<AppState>) -> Json<Vec<QuizQuestion>> {
    Json(state.catalog.questions.clone())
}

#[instrument(skip(state, submission))]
pub async fn submit_quiz(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    Json(submission): Json<QuizSubmission>,
) -> ApiResult<Json<QuizResultResponse>> {
    let outcome = score_submission(&state.catalog, &submission.answers);

    let recommended_ids: Vec<String> = outcome
        .recommendations
        .iter()
        .map(|r| r.path_id.clone())
        .collect();
    User::set_quiz_result(&state.db, user_id, &recommended_ids, &outcome.learning_style).await?;

    info!(
        %user_id,
        recommendations = recommended_ids.len(),
        learning_style = %outcome.learning_style,
        "quiz submitted"
    );
    let estimated_completion_weeks = completion_estimate(&outcome.recommendations);
    Ok(Json(QuizResultResponse {
        recommended_paths: outcome.recommendations,
        learning_style: outcome.learning_style,
        estimated_completion_weeks,
    }))
}
