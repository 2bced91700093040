//! Domain models: database rows, validated inputs, and response documents

pub mod blog;
pub mod document;
pub mod validation;

pub use blog::{Blog, Introduction, NewBlog, NewIntroduction, NewParagraph, Paragraph};
pub use document::{Document, IntroductionDoc, ParagraphDoc};
pub use validation::ValidationError;
