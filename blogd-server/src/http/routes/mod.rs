//! Route handlers organized by resource

pub mod blogs;
pub mod health;
