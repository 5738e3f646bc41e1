use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Per-user, per-path progress document. At most one row exists per
/// (user_id, career_path_id) pair, enforced by a unique constraint.
///
/// `completed_milestones` and `achievements` have set semantics; the
/// append order of the underlying list is preserved across updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProgress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub career_path_id: String,
    pub completed_milestones: Json<Vec<String>>,
    pub achievements: Json<Vec<String>>,
    pub updated_at: OffsetDateTime,
}

impl UserProgress {
    pub async fn list_by_user(db: &PgPool, user_id: Uuid) -> anyhow::Result<Vec<UserProgress>> {
        let rows = sqlx::query_as::<_, UserProgress>(
            r#"
            SELECT id, user_id, career_path_id, completed_milestones, achievements, updated_at
            FROM user_progress
            WHERE user_id = $1
            ORDER BY updated_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find(
        db: &PgPool,
        user_id: Uuid,
        career_path_id: &str,
    ) -> anyhow::Result<Option<UserProgress>> {
        let row = sqlx::query_as::<_, UserProgress>(
            r#"
            SELECT id, user_id, career_path_id, completed_milestones, achievements, updated_at
            FROM user_progress
            WHERE user_id = $1 AND career_path_id = $2
            "#,
        )
        .bind(user_id)
        .bind(career_path_id)
        .fetch_optional(db)
        .await?;
        Ok(row)
    }

    /// Lazily creates the row on first update and replaces the full
    /// document thereafter (last-write-wins).
    pub async fn upsert(
        db: &PgPool,
        user_id: Uuid,
        career_path_id: &str,
        completed_milestones: &[String],
        achievements: &[String],
    ) -> anyhow::Result<UserProgress> {
        let row = sqlx::query_as::<_, UserProgress>(
            r#"
            INSERT INTO user_progress (user_id, career_path_id, completed_milestones, achievements, updated_at)
            VALUES ($1, $2, $3, $4, now())
            ON CONFLICT ON CONSTRAINT uq_user_progress_user_path
            DO UPDATE SET completed_milestones = EXCLUDED.completed_milestones,
                          achievements = EXCLUDED.achievements,
                          updated_at = now()
            RETURNING id, user_id, career_path_id, completed_milestones, achievements, updated_at
            "#,
        )
        .bind(user_id)
        .bind(career_path_id)
        .bind(Json(completed_milestones))
        .bind(Json(achievements))
        .fetch_one(db)
        .await?;
        Ok(row)
    }
}
