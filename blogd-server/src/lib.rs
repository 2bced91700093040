//! blogd-server: HTTP backend for nested blog documents
//!
//! Stores blog posts composed of sub-entities (introduction, topics,
//! paragraphs, bullet points, resources, acknowledgments) in SQLite and
//! reassembles the nested document shape on read.

pub mod db;
pub mod http;
pub mod models;

pub use db::{create_pool, DbError};
pub use http::{run_server, ServerConfig};
