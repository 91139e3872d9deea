//! Mock implementations for testing the pagination engine.
//!
//! This module provides an in-memory [`KeysetSource`] so the engine can be
//! exercised without a live database.
//!
//! # Feature Flag
//!
//! Outside this crate's own tests, the module is only available when the
//! `test-utils` feature is enabled:
//!
//! ```toml
//! [dev-dependencies]
//! pagio-postgres = { version = "...", features = ["test-utils"] }
//! ```

use async_trait::async_trait;

use crate::types::{KeysetRecord, KeysetSource};
use crate::{PgError, PgResult};

impl KeysetRecord for i64 {
    fn keyset_id(&self) -> i64 {
        *self
    }
}

/// Keyset source backed by a sorted vector of identifiers.
///
/// Mirrors the query contract of a real source: windows below an anchor come
/// back largest-first, windows above an anchor smallest-first, and the edge
/// queries report the extremes of the whole collection.
#[derive(Debug, Default, Clone)]
pub struct MockKeysetSource {
    ids: Vec<i64>,
    fail_edges: bool,
}

impl MockKeysetSource {
    /// Creates a source over the given identifiers.
    pub fn new(mut ids: Vec<i64>) -> Self {
        ids.sort_unstable();
        Self {
            ids,
            fail_edges: false,
        }
    }

    /// Makes every `min_id`/`max_id` call fail, simulating a fault during
    /// the auxiliary boundary queries.
    pub fn with_failing_edges(mut self) -> Self {
        self.fail_edges = true;
        self
    }

    fn edge_failure() -> PgError {
        PgError::Unexpected("mock edge query failure".into())
    }
}

#[async_trait]
impl KeysetSource for MockKeysetSource {
    type Record = i64;

    async fn window_below(&mut self, anchor: Option<i64>, limit: i64) -> PgResult<Vec<i64>> {
        Ok(self
            .ids
            .iter()
            .rev()
            .filter(|id| anchor.is_none_or(|a| **id < a))
            .take(limit as usize)
            .copied()
            .collect())
    }

    async fn window_above(&mut self, anchor: i64, limit: i64) -> PgResult<Vec<i64>> {
        Ok(self
            .ids
            .iter()
            .filter(|id| **id > anchor)
            .take(limit as usize)
            .copied()
            .collect())
    }

    async fn min_id(&mut self) -> PgResult<Option<i64>> {
        if self.fail_edges {
            return Err(Self::edge_failure());
        }
        Ok(self.ids.first().copied())
    }

    async fn max_id(&mut self) -> PgResult<Option<i64>> {
        if self.fail_edges {
            return Err(Self::edge_failure());
        }
        Ok(self.ids.last().copied())
    }

    async fn count(&mut self) -> PgResult<i64> {
        Ok(self.ids.len() as i64)
    }
}
