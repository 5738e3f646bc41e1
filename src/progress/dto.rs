use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::progress::repo::UserProgress;

/// Request body for a milestone completion toggle.
#[derive(Debug, Deserialize)]
pub struct ProgressUpdate {
    pub milestone_id: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct ProgressUpdateResponse {
    pub success: bool,
    pub milestone_id: String,
    pub completed: bool,
}

/// Progress for one (user, path) pair. Absent progress is a valid
/// "not started" state and serializes as the empty view.
#[derive(Debug, Serialize)]
pub struct ProgressView {
    pub user_id: Uuid,
    pub career_path_id: String,
    pub completed_milestones: Vec<String>,
    pub achievements: Vec<String>,
    pub updated_at: OffsetDateTime,
}

impl ProgressView {
    pub fn not_started(user_id: Uuid, career_path_id: String) -> Self {
        Self {
            user_id,
            career_path_id,
            completed_milestones: vec![],
            achievements: vec![],
            updated_at: OffsetDateTime::now_utc(),
        }
    }
}

impl From<UserProgress> for ProgressView {
    fn from(p: UserProgress) -> Self {
        Self {
            user_id: p.user_id,
            career_path_id: p.career_path_id,
            completed_milestones: p.completed_milestones.0,
            achievements: p.achievements.0,
            updated_at: p.updated_at,
        }
    }
}
