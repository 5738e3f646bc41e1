use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::share::repo::SharedProgress;

#[derive(Debug, Deserialize)]
pub struct ShareRequest {
    pub path_id: String,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub share_id: Uuid,
    pub share_url: String,
    pub snapshot: SharedProgress,
}

impl ShareResponse {
    pub fn new(snapshot: SharedProgress) -> Self {
        Self {
            share_id: snapshot.id,
            share_url: format!("/progress/view/{}", snapshot.id),
            snapshot,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::types::Json;
    use time::OffsetDateTime;

    #[test]
    fn share_url_points_at_the_snapshot() {
        let snapshot = SharedProgress {
            id: Uuid::new_v4(),
            user_name: "Grace".into(),
            path_id: "data-scientist".into(),
            path_name: "Data Scientist".into(),
            completed_milestones: 3,
            total_milestones: 5,
            achievements: Json(vec!["first_step".into(), "halfway_hero".into()]),
            created_at: OffsetDateTime::now_utc(),
        };
        let id = snapshot.id;
        let response = ShareResponse::new(snapshot);
        assert_eq!(response.share_id, id);
        assert_eq!(response.share_url, format!("/progress/view/{id}"));
    }
}
