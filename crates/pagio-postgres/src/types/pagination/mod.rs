//! Bidirectional cursor pagination for identifier-ordered tables.
//!
//! Cursor pagination provides stable page windows over a mutable collection.
//! Unlike offset pagination, concurrent inserts and deletes outside the
//! current window cannot shift records between pages, and performance stays
//! constant regardless of page depth.
//!
//! Pages are anchored on the record identifier: the first page holds the
//! largest (newest) identifiers, "next" walks toward smaller ones, and
//! "previous" walks back toward larger ones. Page positions travel as opaque
//! encrypted tokens (see [`pagio_core::TokenCodec`]), never as raw
//! identifiers.
//!
//! Whether another page exists in a given direction is decided by comparing
//! the window's edge against the globally smallest/largest identifier still
//! matching the base filter, at the cost of one single-row query per
//! direction. This keeps the answer correct under concurrent writes without
//! ever counting the collection.

mod engine;
mod error;
mod page;
mod source;

pub use engine::CursorPaginator;
pub use error::PageError;
pub use page::CursorPage;
pub use source::{KeysetRecord, KeysetSource};
