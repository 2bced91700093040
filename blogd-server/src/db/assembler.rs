//! Document assembler - rebuilds one nested document from the flat tables
//!
//! Shared by the list, get-by-id, and search handlers. Fetches are issued
//! per child collection per blog; simple and adequate at this scale.

use sqlx::SqlitePool;

use crate::models::{Blog, Document, IntroductionDoc, ParagraphDoc};
use super::repos::{AcknowledgmentRepo, DbError, IntroductionRepo, ParagraphRepo, ResourceRepo};

/// Read-side assembler over a borrowed pool
pub struct DocumentAssembler<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Assemble the full nested document for one blog row.
    ///
    /// A blog without an introduction row gets the fixed empty placeholder
    /// (`summary: ""`, `images: ""`, `topics: []`) rather than a null field.
    pub async fn assemble(&self, blog: &Blog) -> Result<Document, DbError> {
        let intro_repo = IntroductionRepo::new(self.pool);
        let introduction = match intro_repo.find_by_blog(blog.id).await? {
            Some(intro) => {
                let topics = intro_repo.topics_for(intro.id).await?;
                IntroductionDoc {
                    summary: intro.summary,
                    images: intro.images,
                    topics,
                }
            }
            None => IntroductionDoc::empty(),
        };

        let para_repo = ParagraphRepo::new(self.pool);
        let mut paragraph = Vec::new();
        for para in para_repo.find_by_blog(blog.id).await? {
            let bullets = para_repo.bullets_for(para.id).await?;
            paragraph.push(ParagraphDoc {
                order: para.order,
                title: para.title,
                content: para.content,
                images: para.images,
                bullets,
            });
        }

        let resources = ResourceRepo::new(self.pool).find_by_blog(blog.id).await?;
        let acknowledgments = AcknowledgmentRepo::new(self.pool).find_by_blog(blog.id).await?;

        Ok(Document {
            id: Some(blog.id),
            title: blog.title.clone(),
            author: blog.author.clone(),
            read_time: blog.read_time.clone(),
            date: blog.date.clone(),
            introduction,
            paragraph,
            resources,
            acknowledgments,
            github_link: blog.github_link.clone(),
        })
    }
}
