//! Resource and acknowledgment repositories
//!
//! Both are flat lists of strings hanging off a blog; written only inside
//! the creation cascade, read back in insertion order.

use sqlx::{SqliteConnection, SqlitePool};

use super::DbError;

/// Resource (URL) repository
pub struct ResourceRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> ResourceRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_blog(&self, blog_id: i64) -> Result<Vec<String>, DbError> {
        let urls = sqlx::query_scalar::<_, String>(
            "SELECT url FROM resources WHERE blog_id = ? ORDER BY id",
        )
        .bind(blog_id)
        .fetch_all(self.pool)
        .await?;

        Ok(urls)
    }

    pub(crate) async fn insert_all(
        conn: &mut SqliteConnection,
        blog_id: i64,
        urls: &[String],
    ) -> Result<(), DbError> {
        for url in urls {
            sqlx::query("INSERT INTO resources (blog_id, url) VALUES (?, ?)")
                .bind(blog_id)
                .bind(url)
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}

/// Acknowledgment repository
pub struct AcknowledgmentRepo<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AcknowledgmentRepo<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_blog(&self, blog_id: i64) -> Result<Vec<String>, DbError> {
        let texts = sqlx::query_scalar::<_, String>(
            "SELECT text FROM acknowledgments WHERE blog_id = ? ORDER BY id",
        )
        .bind(blog_id)
        .fetch_all(self.pool)
        .await?;

        Ok(texts)
    }

    pub(crate) async fn insert_all(
        conn: &mut SqliteConnection,
        blog_id: i64,
        texts: &[String],
    ) -> Result<(), DbError> {
        for text in texts {
            sqlx::query("INSERT INTO acknowledgments (blog_id, text) VALUES (?, ?)")
                .bind(blog_id)
                .bind(text)
                .execute(&mut *conn)
                .await?;
        }

        Ok(())
    }
}
