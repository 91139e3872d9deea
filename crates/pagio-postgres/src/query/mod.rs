//! Database query repositories for all entities in the system.
//!
//! This module contains repository implementations that provide high-level
//! database operations, encapsulating common patterns and providing
//! type-safe interfaces.
//!
//! # Pagination
//!
//! Listing queries use cursor pagination exclusively (see
//! [`types::pagination`]): each repository wires its keyset source into a
//! [`CursorPaginator`] and returns a [`CursorPage`] with opaque cursors for
//! the neighboring windows.
//!
//! [`types::pagination`]: crate::types::pagination
//! [`CursorPaginator`]: crate::types::CursorPaginator
//! [`CursorPage`]: crate::types::CursorPage

pub mod user;

pub use user::{UserFilter, UserKeysetSource, UserRepository};
