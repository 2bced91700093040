//! Introduction repository - the optional 1:1 child and its topics
//!
//! An introduction is only ever written as part of the blog-creation
//! cascade, so the insert functions take the transaction's connection.

use sqlx::{SqliteConnection, SqlitePool};

use crate::models::{Introduction, NewIntroduction};
use super::DbError;

/// Introduction repository
pub struct IntroductionRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> IntroductionRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// First introduction for a blog, if any. At-most-one is an application
    /// rule (first match wins), not a schema constraint.
    pub async fn find_by_blog(&self, blog_id: i64) -> Result<Option<Introduction>, DbError> {
        let intro = sqlx::query_as::<_, Introduction>(
            "SELECT id, blog_id, summary, images FROM introductions WHERE blog_id = ? ORDER BY id LIMIT 1",
        )
        .bind(blog_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(intro)
    }

    /// Topic strings for an introduction, in insertion order.
    pub async fn topics_for(&self, introduction_id: i64) -> Result<Vec<String>, DbError> {
        let topics = sqlx::query_scalar::<_, String>(
            "SELECT topic FROM topics WHERE introduction_id = ? ORDER BY id",
        )
        .bind(introduction_id)
        .fetch_all(self.pool)
        .await?;

        Ok(topics)
    }

    pub(crate) async fn insert(
        conn: &mut SqliteConnection,
        blog_id: i64,
        intro: &NewIntroduction,
    ) -> Result<i64, DbError> {
        let result = sqlx::query(
            "INSERT INTO introductions (blog_id, summary, images) VALUES (?, ?, ?)",
        )
        .bind(blog_id)
        .bind(&intro.summary)
        .bind(intro.images.as_deref())
        .execute(&mut *conn)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub(crate) async fn insert_topics(
        conn: &mut SqliteConnection,
        introduction_id: i64,
        topics: &[String],
    ) -> Result<(), DbError> {
        for topic in topics {
            sqlx::query("INSERT INTO topics (introduction_id, topic) VALUES (?, ?)")
                .bind(introduction_id)
                .bind(topic)
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}
