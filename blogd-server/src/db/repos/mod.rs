//! Repository implementations for database access
//!
//! Reads go through borrowed-pool repo structs; the inserts that make up
//! the blog-creation cascade take the transaction's connection instead, so
//! the whole cascade commits (or rolls back) as one unit.

pub mod blogs;
pub mod extras;
pub mod introductions;
pub mod paragraphs;

pub use blogs::{BlogRepo, DbError};
pub use extras::{AcknowledgmentRepo, ResourceRepo};
pub use introductions::IntroductionRepo;
pub use paragraphs::ParagraphRepo;
