use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Immutable proof-of-completion snapshot. User and path names are
/// copied at generation time and never updated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: Uuid,
    pub user_id: Uuid,
    pub user_name: String,
    pub path_id: String,
    pub path_name: String,
    pub completion_date: OffsetDateTime,
    pub total_milestones: i32,
    pub achievements: Json<Vec<String>>,
}

impl Certificate {
    pub async fn insert(
        db: &PgPool,
        user_id: Uuid,
        user_name: &str,
        path_id: &str,
        path_name: &str,
        total_milestones: i32,
        achievements: &[String],
    ) -> anyhow::Result<Certificate> {
        let cert = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates (user_id, user_name, path_id, path_name, total_milestones, achievements)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, user_name, path_id, path_name, completion_date,
                      total_milestones, achievements
            "#,
        )
        .bind(user_id)
        .bind(user_name)
        .bind(path_id)
        .bind(path_name)
        .bind(total_milestones)
        .bind(Json(achievements))
        .fetch_one(db)
        .await?;
        Ok(cert)
    }

    pub async fn find(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Certificate>> {
        let cert = sqlx::query_as::<_, Certificate>(
            r#"
            SELECT id, user_id, user_name, path_id, path_name, completion_date,
                   total_milestones, achievements
            FROM certificates
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(cert)
    }
}
