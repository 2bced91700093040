//! Assembled response documents
//!
//! The serialized shape is a fixed client contract: a blog with no
//! introduction row yields `summary: ""`, `images: ""` and `topics: []`
//! rather than null/absent fields, while an introduction row with no images
//! yields `images: null`. List and search documents carry `id`; the
//! get-by-id document omits it.

use serde::Serialize;

/// Fully nested blog document
#[derive(Debug, Clone, Serialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub author: String,
    pub read_time: String,
    pub date: String,
    pub introduction: IntroductionDoc,
    pub paragraph: Vec<ParagraphDoc>,
    pub resources: Vec<String>,
    pub acknowledgments: Vec<String>,
    pub github_link: Option<String>,
}

impl Document {
    /// Drop the `id` field, matching the get-by-id response shape.
    pub fn without_id(mut self) -> Self {
        self.id = None;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct IntroductionDoc {
    pub summary: String,
    pub images: Option<String>,
    pub topics: Vec<String>,
}

impl IntroductionDoc {
    /// Placeholder for blogs without an introduction row.
    pub fn empty() -> Self {
        Self {
            summary: String::new(),
            images: Some(String::new()),
            topics: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ParagraphDoc {
    pub order: i64,
    pub title: String,
    pub content: String,
    pub images: Option<String>,
    pub bullets: Vec<String>,
}
