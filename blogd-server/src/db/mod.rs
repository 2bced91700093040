//! Database layer - connection pool, schema, repositories, and the
//! read-side document assembler
//!
//! The pool is an explicit handle owned by the caller: opened at startup,
//! dropped at shutdown. Multi-row writes go through a single transaction
//! committed once, so a half-written blog is never visible to readers.

pub mod assembler;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use assembler::DocumentAssembler;
pub use pool::create_pool;
pub use repos::DbError;
