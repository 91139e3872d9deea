//! Pagination primitives and other custom types.

pub mod pagination;

pub use pagination::{CursorPage, CursorPaginator, KeysetRecord, KeysetSource, PageError};
