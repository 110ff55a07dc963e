use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

/// Course record. Courses have no owner; any authenticated user may create
/// one and anyone may read them.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub created_at: OffsetDateTime,
}

impl Course {
    pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Course>> {
        let rows = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, image_url, created_at
            FROM courses
            "#,
        )
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> sqlx::Result<Option<Course>> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, image_url, created_at
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(course)
    }

    pub async fn create(
        db: &PgPool,
        title: &str,
        description: &str,
        image_url: Option<&str>,
    ) -> sqlx::Result<Course> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, image_url)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, image_url, created_at
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(image_url)
        .fetch_one(db)
        .await?;
        Ok(course)
    }
}
