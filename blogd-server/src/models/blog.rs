//! Blog entity rows and validated creation inputs
//!
//! Row structs map 1:1 onto table columns. Topics, bullets, resources and
//! acknowledgments are only ever read back as bare string columns, so they
//! carry no row structs of their own.

use sqlx::FromRow;

/// Blog record from the database
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub read_time: String,
    pub date: String,
    pub github_link: Option<String>,
}

/// Introduction record; at most one per blog (first match wins on read)
#[derive(Debug, Clone, FromRow)]
pub struct Introduction {
    pub id: i64,
    pub blog_id: i64,
    pub summary: String,
    pub images: Option<String>,
}

/// Paragraph record. `order` is caller-supplied and stored verbatim; reads
/// deliberately use insertion order instead of this column.
#[derive(Debug, Clone, FromRow)]
pub struct Paragraph {
    pub id: i64,
    pub blog_id: i64,
    pub order: i64,
    pub title: String,
    pub content: String,
    pub images: Option<String>,
}

/// A fully validated blog-creation input. Constructed only by payload
/// validation, so the persistence layer never sees missing required fields.
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub title: String,
    pub author: String,
    pub read_time: String,
    pub date: String,
    pub github_link: Option<String>,
    /// None when the payload had no introduction or an empty summary;
    /// the introduction and its topics are skipped in that case.
    pub introduction: Option<NewIntroduction>,
    pub paragraphs: Vec<NewParagraph>,
    pub resources: Vec<String>,
    pub acknowledgments: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewIntroduction {
    pub summary: String,
    pub images: Option<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct NewParagraph {
    pub order: i64,
    pub title: String,
    pub content: String,
    pub images: Option<String>,
    pub bullets: Vec<String>,
}
