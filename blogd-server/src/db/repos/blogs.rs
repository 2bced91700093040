//! Blog repository - root-entity writes and lookups
//!
//! `create` runs the entire nested cascade (introduction, topics,
//! paragraphs, bullets, resources, acknowledgments) inside one transaction
//! committed once, so concurrent readers never observe a partial blog.

use sqlx::SqlitePool;

use crate::models::{Blog, NewBlog};
use super::{AcknowledgmentRepo, IntroductionRepo, ParagraphRepo, ResourceRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} {id}")]
    NotFound { resource: &'static str, id: i64 },
}

/// Blog repository
pub struct BlogRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BlogRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a blog and all of its nested children, returning the new id.
    ///
    /// Atomic: any failure mid-cascade rolls back everything, including the
    /// root row.
    pub async fn create(&self, blog: &NewBlog) -> Result<i64, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            INSERT INTO blogs (title, author, read_time, date, github_link)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.author)
        .bind(&blog.read_time)
        .bind(&blog.date)
        .bind(blog.github_link.as_deref())
        .execute(&mut *tx)
        .await?;
        let blog_id = result.last_insert_rowid();

        if let Some(intro) = &blog.introduction {
            let introduction_id = IntroductionRepo::insert(&mut tx, blog_id, intro).await?;
            IntroductionRepo::insert_topics(&mut tx, introduction_id, &intro.topics).await?;
        }

        for para in &blog.paragraphs {
            let paragraph_id = ParagraphRepo::insert(&mut tx, blog_id, para).await?;
            ParagraphRepo::insert_bullets(&mut tx, paragraph_id, &para.bullets).await?;
        }

        ResourceRepo::insert_all(&mut tx, blog_id, &blog.resources).await?;
        AcknowledgmentRepo::insert_all(&mut tx, blog_id, &blog.acknowledgments).await?;

        tx.commit().await?;

        tracing::debug!(blog_id, "blog cascade committed");
        Ok(blog_id)
    }

    /// List all blogs in insertion order.
    pub async fn list(&self) -> Result<Vec<Blog>, DbError> {
        let blogs = sqlx::query_as::<_, Blog>(
            "SELECT id, title, author, read_time, date, github_link FROM blogs ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(blogs)
    }

    /// Fetch a single blog by id.
    pub async fn get(&self, id: i64) -> Result<Blog, DbError> {
        sqlx::query_as::<_, Blog>(
            "SELECT id, title, author, read_time, date, github_link FROM blogs WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(DbError::NotFound { resource: "Blog", id })
    }

    /// Case-insensitive substring search over title, author, and github_link.
    ///
    /// LIKE metacharacters in the keyword keep their meaning, matching the
    /// wildcard-wrapped pattern clients already rely on.
    pub async fn search(&self, keyword: &str) -> Result<Vec<Blog>, DbError> {
        let pattern = format!("%{}%", keyword.to_lowercase());

        let blogs = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, author, read_time, date, github_link
            FROM blogs
            WHERE lower(title) LIKE ?
               OR lower(author) LIKE ?
               OR lower(coalesce(github_link, '')) LIKE ?
            ORDER BY id
            "#,
        )
        .bind(&pattern)
        .bind(&pattern)
        .bind(&pattern)
        .fetch_all(self.pool)
        .await?;

        Ok(blogs)
    }
}
