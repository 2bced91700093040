//! Paragraph repository - ordered-in-name-only body sections and bullets
//!
//! The `order` column is stored verbatim but reads return insertion order;
//! clients see paragraphs in the order they were submitted.

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{NewParagraph, Paragraph};
use super::DbError;

/// Paragraph repository
pub struct ParagraphRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ParagraphRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Paragraphs for a blog in insertion order (NOT the `order` column).
    pub async fn find_by_blog(&self, blog_id: i64) -> Result<Vec<Paragraph>, DbError> {
        let paragraphs = sqlx::query_as::<_, Paragraph>(
            r#"SELECT id, blog_id, "order", title, content, images FROM paragraphs WHERE blog_id = ? ORDER BY id"#,
        )
        .bind(blog_id)
        .fetch_all(self.pool)
        .await?;

        Ok(paragraphs)
    }

    /// Bullet strings for a paragraph, in insertion order.
    pub async fn bullets_for(&self, paragraph_id: i64) -> Result<Vec<String>, DbError> {
        let bullets = sqlx::query_scalar::<_, String>(
            "SELECT point FROM bullet_points WHERE paragraph_id = ? ORDER BY id",
        )
        .bind(paragraph_id)
        .fetch_all(self.pool)
        .await?;

        Ok(bullets)
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        blog_id: i64,
        para: &NewParagraph,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            r#"INSERT INTO paragraphs (blog_id, "order", title, content, images) VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(blog_id)
        .bind(para.order)
        .bind(&para.title)
        .bind(&para.content)
        .bind(para.images.as_deref())
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub(crate) async fn insert_bullets(
        conn: &mut SqliteConnection,
        paragraph_id: i64,
        bullets: &[String],
    ) -> Result<(), DbError> {
        for bullet in bullets {
            sqlx::query("INSERT INTO bullet_points (paragraph_id, point) VALUES (?, ?)")
                .bind(paragraph_id)
                .bind(bullet)
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}
