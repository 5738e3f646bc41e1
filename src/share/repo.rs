use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Point-in-time public snapshot of a user's progress on one path.
/// Disconnected from the live progress record after creation.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SharedProgress {
    pub id: Uuid,
    pub user_name: String,
    pub path_id: String,
    pub path_name: String,
    pub completed_milestones: i32,
    pub total_milestones: i32,
    pub achievements: Json<Vec<String>>,
    pub created_at: OffsetDateTime,
}

impl SharedProgress {
    pub async fn insert(
        db: &PgPool,
        user_name: &str,
        path_id: &str,
        path_name: &str,
        completed_milestones: i32,
        total_milestones: i32,
        achievements: &[String],
    ) -> anyhow::Result<SharedProgress> {
        let snapshot = sqlx::query_as::<_, SharedProgress>(
            r#"
            INSERT INTO shared_progress (user_name, path_id, path_name,
                                         completed_milestones, total_milestones, achievements)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_name, path_id, path_name, completed_milestones,
                      total_milestones, achievements, created_at
            "#,
        )
        .bind(user_name)
        .bind(path_id)
        .bind(path_name)
        .bind(completed_milestones)
        .bind(total_milestones)
        .bind(Json(achievements))
        .fetch_one(db)
        .await?;
        Ok(snapshot)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<SharedProgress>> {
        let snapshot = sqlx::query_as::<_, SharedProgress>(
            r#"
            SELECT id, user_name, path_id, path_name, completed_milestones,
                   total_milestones, achievements, created_at
            FROM shared_progress
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(snapshot)
    }
}
