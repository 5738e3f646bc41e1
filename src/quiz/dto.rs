use serde::{Deserialize, Serialize};

/// One answer: a question id plus the index of the selected option.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizAnswer {
    pub question_id: String,
    pub selected_option: usize,
}

#[derive(Debug, Deserialize)]
pub struct QuizSubmission {
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedPath {
    pub path_id: String,
    pub path_name: String,
    pub score: i64,
    pub estimated_weeks: i64,
    pub reason: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub recommended_paths: Vec<RecommendedPath>,
    pub learning_style: String,
    pub estimated_completion_weeks: i64,
}
