//! Ordered query source abstraction consumed by the pagination engine.

use async_trait::async_trait;

use crate::PgResult;

/// A record with a totally-ordered identifier usable as a keyset anchor.
///
/// Identifiers are expected to be unique, positive, monotonically assigned,
/// and never reused after deletion.
pub trait KeysetRecord {
    /// Returns the record's ordering identifier.
    fn keyset_id(&self) -> i64;
}

/// An ordered query source over one base-filtered collection.
///
/// Implementations capture their connection and the caller-level base
/// predicate; every method applies that same predicate. The engine issues
/// windowed queries, single-row edge queries, and one count query through
/// this trait and nothing else, so it can be exercised against an in-memory
/// implementation in tests.
///
/// All windows are keyed on the record identifier: `window_below` walks
/// toward smaller identifiers in descending order, `window_above` toward
/// larger identifiers in ascending order.
#[async_trait]
pub trait KeysetSource {
    /// Record type produced by this source.
    type Record: KeysetRecord + Send;

    /// Returns up to `limit` records with identifiers strictly below the
    /// anchor (or from the top when no anchor is given), largest first.
    async fn window_below(&mut self, anchor: Option<i64>, limit: i64)
    -> PgResult<Vec<Self::Record>>;

    /// Returns up to `limit` records with identifiers strictly above the
    /// anchor, smallest first.
    async fn window_above(&mut self, anchor: i64, limit: i64) -> PgResult<Vec<Self::Record>>;

    /// Returns the smallest identifier matching the base filter, if any.
    async fn min_id(&mut self) -> PgResult<Option<i64>>;

    /// Returns the largest identifier matching the base filter, if any.
    async fn max_id(&mut self) -> PgResult<Option<i64>>;

    /// Returns the number of records matching the base filter.
    async fn count(&mut self) -> PgResult<i64>;
}
