//! Blog endpoints
//!
//! Four operations: create (nested cascade), list, get-by-id, and keyword
//! search. Required fields are modeled as `Option` and validated by hand so
//! a missing field produces a 400 rather than a deserialization rejection.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::BlogRepo;
use crate::db::DocumentAssembler;
use crate::http::error::{ApiError, SearchError};
use crate::http::server::AppState;
use crate::models::{Document, NewBlog, NewIntroduction, NewParagraph, ValidationError};

/// Create blog request; everything optional at the serde level, required
/// fields enforced by [`CreateBlogRequest::validate`]
#[derive(Debug, Deserialize)]
pub struct CreateBlogRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub read_time: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub github_link: Option<String>,
    #[serde(default)]
    pub introduction: Option<IntroductionPayload>,
    #[serde(default)]
    pub paragraph: Vec<ParagraphPayload>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub acknowledgments: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct IntroductionPayload {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ParagraphPayload {
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

fn require(field: &'static str, value: Option<String>) -> Result<String, ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ValidationError::Empty { field }),
    }
}

impl CreateBlogRequest {
    /// Validate required fields and produce the gateway's input type.
    ///
    /// An introduction with an empty or absent summary is silently dropped
    /// (along with its topics); the blog itself is still created.
    pub fn validate(self) -> Result<NewBlog, ValidationError> {
        let title = require("title", self.title)?;
        let author = require("author", self.author)?;
        let read_time = require("read_time", self.read_time)?;
        let date = require("date", self.date)?;

        let introduction = self.introduction.and_then(|intro| match intro.summary {
            Some(summary) if !summary.is_empty() => Some(NewIntroduction {
                summary,
                images: intro.images,
                topics: intro.topics,
            }),
            _ => None,
        });

        let paragraphs = self
            .paragraph
            .into_iter()
            .map(|p| {
                Ok(NewParagraph {
                    order: p.order.ok_or(ValidationError::Empty {
                        field: "paragraph.order",
                    })?,
                    title: require("paragraph.title", p.title)?,
                    content: require("paragraph.content", p.content)?,
                    images: p.images,
                    bullets: p.bullets,
                })
            })
            .collect::<Result<Vec<_>, ValidationError>>()?;

        Ok(NewBlog {
            title,
            author,
            read_time,
            date,
            github_link: self.github_link,
            introduction,
            paragraphs,
            resources: self.resources,
            acknowledgments: self.acknowledgments,
        })
    }
}

/// Create blog response
#[derive(Serialize)]
pub struct CreateBlogResponse {
    pub status: bool,
    pub blog_id: i64,
    pub message: &'static str,
}

/// Envelope for list/search responses
#[derive(Serialize)]
pub struct DocumentsResponse {
    pub status: bool,
    pub data: Vec<Document>,
}

/// Envelope for the get-by-id response
#[derive(Serialize)]
pub struct DocumentResponse {
    pub status: bool,
    pub data: Document,
}

/// POST /api/blog - create a blog with all nested children
async fn create_blog(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateBlogRequest>,
) -> Result<(StatusCode, Json<CreateBlogResponse>), ApiError> {
    let new_blog = req.validate()?;
    let blog_id = BlogRepo::new(&state.pool).create(&new_blog).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBlogResponse {
            status: true,
            blog_id,
            message: "Blog created successfully",
        }),
    ))
}

/// GET /api/blogs - list all blogs as assembled documents
async fn list_blogs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DocumentsResponse>, ApiError> {
    let blogs = BlogRepo::new(&state.pool).list().await?;

    let assembler = DocumentAssembler::new(&state.pool);
    let mut data = Vec::with_capacity(blogs.len());
    for blog in &blogs {
        data.push(assembler.assemble(blog).await?);
    }

    Ok(Json(DocumentsResponse { status: true, data }))
}

/// GET /api/blog/{id} - fetch one assembled document
///
/// The returned document omits the `id` field; list and search include it.
/// Both shapes are load-bearing for existing clients.
async fn get_blog(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DocumentResponse>, ApiError> {
    let blog = BlogRepo::new(&state.pool).get(id).await?;
    let document = DocumentAssembler::new(&state.pool)
        .assemble(&blog)
        .await?
        .without_id();

    Ok(Json(DocumentResponse {
        status: true,
        data: document,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: Option<String>,
}

/// GET /api/blogs/search?keyword= - keyword-filtered list
async fn search_blogs(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<DocumentsResponse>, SearchError> {
    let keyword = match params.keyword {
        Some(k) if !k.is_empty() => k,
        _ => return Err(ValidationError::Empty { field: "keyword" }.into()),
    };

    let blogs = BlogRepo::new(&state.pool).search(&keyword).await?;

    let assembler = DocumentAssembler::new(&state.pool);
    let mut data = Vec::with_capacity(blogs.len());
    for blog in &blogs {
        data.push(assembler.assemble(blog).await?);
    }

    Ok(Json(DocumentsResponse { status: true, data }))
}

/// Blog routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/blog", post(create_blog))
        .route("/api/blog/{id}", get(get_blog))
        .route("/api/blogs", get(list_blogs))
        .route("/api/blogs/search", get(search_blogs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_request() -> CreateBlogRequest {
        CreateBlogRequest {
            title: Some("Ownership in Rust".into()),
            author: Some("jane".into()),
            read_time: Some("8 min".into()),
            date: Some("2024-05-01".into()),
            github_link: None,
            introduction: None,
            paragraph: vec![],
            resources: vec![],
            acknowledgments: vec![],
        }
    }

    #[test]
    fn minimal_payload_validates() {
        let new_blog = minimal_request().validate().expect("should validate");
        assert_eq!(new_blog.title, "Ownership in Rust");
        assert!(new_blog.introduction.is_none());
        assert!(new_blog.paragraphs.is_empty());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut req = minimal_request();
        req.author = None;
        assert!(req.validate().is_err());

        let mut req = minimal_request();
        req.date = Some(String::new());
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_summary_drops_introduction_and_topics() {
        let mut req = minimal_request();
        req.introduction = Some(IntroductionPayload {
            summary: Some(String::new()),
            images: Some("cover.png".into()),
            topics: vec!["borrowing".into()],
        });

        let new_blog = req.validate().expect("should validate");
        assert!(new_blog.introduction.is_none());
    }

    #[test]
    fn paragraph_requires_order_title_content() {
        let mut req = minimal_request();
        req.paragraph = vec![ParagraphPayload {
            order: Some(1),
            title: Some("Intro".into()),
            content: None,
            images: None,
            bullets: vec![],
        }];
        assert!(req.validate().is_err());
    }
}
