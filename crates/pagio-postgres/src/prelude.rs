//! Prelude module for pagio-postgres.
//!
//! This module re-exports the most commonly used types and traits from
//! pagio-postgres, making it easy to import everything you need with a single
//! `use` statement.
//!
//! # Example
//!
//! ```rust,no_run
//! use pagio_postgres::prelude::*;
//!
//! # async fn example() -> PgResult<()> {
//! let config = PgConfig::new("postgresql://localhost/mydb");
//! let client = PgClient::new(config)?;
//! # Ok(())
//! # }
//! ```

// Common query traits
pub use diesel::prelude::*;
pub use diesel_async::RunQueryDsl;

// Connection type
pub use crate::PgConnection;
// Client types
pub use crate::client::{ConnectionPool, PgClient, PgConfig, PgConn, PgPoolStatus};
// Pagination types
pub use crate::types::{CursorPage, CursorPaginator, KeysetRecord, KeysetSource, PageError};
// Error types
pub use crate::{PgError, PgResult};
