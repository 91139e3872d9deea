//! Cursor pagination engine.

use pagio_core::TokenCodec;

use super::error::PageError;
use super::page::CursorPage;
use super::source::{KeysetRecord, KeysetSource};
use crate::TRACING_TARGET_PAGINATION;

/// Bidirectional cursor paginator over one [`KeysetSource`].
///
/// A paginator is instantiated per request and holds no state across calls:
/// each entry operation issues one to three sequential reads through the
/// source, derives the neighboring cursors, and returns a fresh
/// [`CursorPage`]. The page size is validated once at construction.
///
/// The first page holds the newest (largest) identifiers; [`next_page`]
/// walks toward smaller identifiers and [`previous_page`] back toward larger
/// ones. Direction is carried by which operation is invoked - the cursor
/// itself is a single sealed identifier with no visible ordering.
///
/// [`next_page`]: CursorPaginator::next_page
/// [`previous_page`]: CursorPaginator::previous_page
#[derive(Debug)]
pub struct CursorPaginator<'a, S> {
    source: S,
    codec: &'a TokenCodec,
    limit: i64,
}

impl<'a, S> CursorPaginator<'a, S>
where
    S: KeysetSource,
{
    /// Creates a paginator with the given page size.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidLimit`] if `limit` is not positive. The
    /// limit is never silently coerced.
    pub fn new(source: S, codec: &'a TokenCodec, limit: i64) -> Result<Self, PageError> {
        if limit <= 0 {
            return Err(PageError::InvalidLimit(limit));
        }

        Ok(Self {
            source,
            codec,
            limit,
        })
    }

    /// Returns the first page: the `limit` newest records, largest
    /// identifier first.
    ///
    /// The previous cursor is always absent on the first page.
    pub async fn first_page(&mut self) -> Result<CursorPage<S::Record>, PageError> {
        let records = self.source.window_below(None, self.limit).await?;
        let next_cursor = self.next_cursor(&records, false).await?;

        Ok(CursorPage {
            records,
            previous_cursor: None,
            next_cursor,
        })
    }

    /// Returns the page after the cursor, walking toward smaller
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Surfaces the codec's [`TokenError`] unchanged if the cursor fails to
    /// decode; the engine performs no cursor validation of its own.
    ///
    /// [`TokenError`]: pagio_core::TokenError
    pub async fn next_page(&mut self, cursor: &str) -> Result<CursorPage<S::Record>, PageError> {
        let anchor = self.codec.decode(cursor)?;

        let records = self.source.window_below(Some(anchor), self.limit).await?;
        let previous_cursor = self.previous_cursor(&records, false).await?;
        let next_cursor = self.next_cursor(&records, false).await?;

        Ok(CursorPage {
            records,
            previous_cursor,
            next_cursor,
        })
    }

    /// Returns the page before the cursor, walking back toward larger
    /// identifiers. Records are returned in ascending identifier order, as
    /// the window query produces them.
    ///
    /// When the whole base-filtered collection is smaller than one page,
    /// there cannot be a meaningful "previous" window and the first page is
    /// returned instead.
    pub async fn previous_page(
        &mut self,
        cursor: &str,
    ) -> Result<CursorPage<S::Record>, PageError> {
        let anchor = self.codec.decode(cursor)?;

        let total = self.source.count().await?;
        if total < self.limit {
            tracing::debug!(
                target: TRACING_TARGET_PAGINATION,
                total,
                limit = self.limit,
                "Collection smaller than one page, returning the first page"
            );
            return self.first_page().await;
        }

        let records = self.source.window_above(anchor, self.limit).await?;
        let previous_cursor = self.previous_cursor(&records, true).await?;
        let next_cursor = self.next_cursor(&records, true).await?;

        Ok(CursorPage {
            records,
            previous_cursor,
            next_cursor,
        })
    }

    /// Computes the cursor for the page of older records, if one exists.
    ///
    /// Only a full window can have a next page. The window's oldest edge is
    /// compared against the globally smallest identifier still matching the
    /// base filter: if they coincide, the window already touches the end of
    /// the collection and no cursor is issued.
    async fn next_cursor(
        &mut self,
        window: &[S::Record],
        reversed: bool,
    ) -> Result<Option<String>, PageError> {
        if window.len() as i64 != self.limit {
            return Ok(None);
        }

        let boundary = if reversed {
            window.first().map(KeysetRecord::keyset_id)
        } else {
            window.last().map(KeysetRecord::keyset_id)
        };
        let Some(boundary) = boundary else {
            return Ok(None);
        };

        match self.source.min_id().await? {
            Some(edge) if edge != boundary => Ok(Some(self.codec.encode(boundary)?)),
            _ => Ok(None),
        }
    }

    /// Computes the cursor for the page of newer records, if one exists.
    ///
    /// Any non-empty window may have a previous page. The window's newest
    /// edge is compared against the globally largest identifier still
    /// matching the base filter: if they coincide, the window already
    /// touches the top of the collection and no cursor is issued.
    async fn previous_cursor(
        &mut self,
        window: &[S::Record],
        reversed: bool,
    ) -> Result<Option<String>, PageError> {
        let boundary = if reversed {
            window.last().map(KeysetRecord::keyset_id)
        } else {
            window.first().map(KeysetRecord::keyset_id)
        };
        let Some(boundary) = boundary else {
            return Ok(None);
        };

        match self.source.max_id().await? {
            Some(edge) if edge != boundary => Ok(Some(self.codec.encode(boundary)?)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use pagio_core::{CodecKey, TokenCodec, TokenError};

    use super::*;
    use crate::mock::MockKeysetSource;

    fn codec() -> TokenCodec {
        TokenCodec::new(CodecKey::from_bytes([7u8; 32]))
    }

    fn paginator<'a>(
        ids: &[i64],
        codec: &'a TokenCodec,
        limit: i64,
    ) -> CursorPaginator<'a, MockKeysetSource> {
        CursorPaginator::new(MockKeysetSource::new(ids.to_vec()), codec, limit).unwrap()
    }

    #[tokio::test]
    async fn first_page_returns_newest_first() {
        let codec = codec();
        let mut paginator = paginator(&[1, 2, 3, 4, 5, 6, 7], &codec, 3);

        let page = paginator.first_page().await.unwrap();

        assert_eq!(page.records, vec![7, 6, 5]);
        assert!(page.previous_cursor.is_none());
        let next = page.next_cursor.expect("more records exist");
        assert_eq!(codec.decode(&next).unwrap(), 5);
    }

    #[tokio::test]
    async fn first_page_partial_window_has_no_next() {
        let codec = codec();
        let mut paginator = paginator(&[1, 2], &codec, 3);

        let page = paginator.first_page().await.unwrap();

        assert_eq!(page.records, vec![2, 1]);
        assert!(page.previous_cursor.is_none());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn first_page_of_empty_collection() {
        let codec = codec();
        let mut paginator = paginator(&[], &codec, 3);

        let page = paginator.first_page().await.unwrap();

        assert!(page.is_empty());
        assert!(page.previous_cursor.is_none());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn non_positive_limit_is_rejected() {
        let codec = codec();

        for limit in [0, -3] {
            let result = CursorPaginator::new(MockKeysetSource::new(vec![1, 2]), &codec, limit);
            assert!(matches!(result, Err(PageError::InvalidLimit(l)) if l == limit));
        }
    }

    #[tokio::test]
    async fn forward_walk_over_seven_records() {
        let codec = codec();
        let ids = [1, 2, 3, 4, 5, 6, 7];

        let first = paginator(&ids, &codec, 3).first_page().await.unwrap();
        assert_eq!(first.records, vec![7, 6, 5]);
        let t1 = first.next_cursor.unwrap();
        assert_eq!(codec.decode(&t1).unwrap(), 5);

        let second = paginator(&ids, &codec, 3).next_page(&t1).await.unwrap();
        assert_eq!(second.records, vec![4, 3, 2]);
        let t2 = second.next_cursor.unwrap();
        assert_eq!(codec.decode(&t2).unwrap(), 2);
        assert_eq!(
            codec.decode(&second.previous_cursor.unwrap()).unwrap(),
            4
        );

        let third = paginator(&ids, &codec, 3).next_page(&t2).await.unwrap();
        assert_eq!(third.records, vec![1]);
        // The window contains the globally smallest identifier.
        assert!(third.next_cursor.is_none());
        assert_eq!(codec.decode(&third.previous_cursor.unwrap()).unwrap(), 1);
    }

    #[tokio::test]
    async fn forward_walk_visits_every_record_once() {
        let codec = codec();
        let ids = [2, 3, 5, 8, 13, 21, 34, 55];

        let mut visited: Vec<i64> = Vec::new();
        let mut page = paginator(&ids, &codec, 3).first_page().await.unwrap();
        visited.extend(&page.records);

        while let Some(cursor) = page.next_cursor.take() {
            page = paginator(&ids, &codec, 3).next_page(&cursor).await.unwrap();
            visited.extend(&page.records);
        }

        let mut expected = ids.to_vec();
        expected.sort_unstable();
        expected.reverse();
        assert_eq!(visited, expected);
        assert!(visited.windows(2).all(|pair| pair[0] > pair[1]));
    }

    #[tokio::test]
    async fn full_last_page_touching_the_extreme_has_no_next() {
        let codec = codec();
        let ids = [1, 2, 3, 4, 5, 6];

        let first = paginator(&ids, &codec, 3).first_page().await.unwrap();
        let cursor = first.next_cursor.unwrap();

        let last = paginator(&ids, &codec, 3).next_page(&cursor).await.unwrap();
        assert_eq!(last.records, vec![3, 2, 1]);
        // Full window, but its edge is the smallest matching identifier.
        assert!(last.next_cursor.is_none());
        assert!(last.previous_cursor.is_some());
    }

    #[tokio::test]
    async fn next_page_past_the_end_is_empty_with_no_cursors() {
        let codec = codec();
        let ids = [1, 2, 3];

        let cursor = codec.encode(1).unwrap();
        let page = paginator(&ids, &codec, 3).next_page(&cursor).await.unwrap();

        assert!(page.is_empty());
        assert!(page.previous_cursor.is_none());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn backward_walk_reconstructs_forward_windows() {
        let codec = codec();
        let ids = [1, 2, 3, 4, 5, 6, 7];

        // Walk forward to the last page, remembering every window.
        let mut forward_windows = Vec::new();
        let mut page = paginator(&ids, &codec, 3).first_page().await.unwrap();
        forward_windows.push(page.records.clone());
        while let Some(cursor) = page.next_cursor.take() {
            page = paginator(&ids, &codec, 3).next_page(&cursor).await.unwrap();
            forward_windows.push(page.records.clone());
        }

        // Walk backward from the last page; windows come back in ascending
        // order, so each one mirrors the corresponding forward window.
        let mut backward = page.previous_cursor.clone();
        let mut forward_index = forward_windows.len() - 1;
        while let Some(cursor) = backward {
            forward_index -= 1;
            let page = paginator(&ids, &codec, 3)
                .previous_page(&cursor)
                .await
                .unwrap();

            let mut mirrored = page.records.clone();
            mirrored.reverse();
            assert_eq!(mirrored, forward_windows[forward_index]);

            backward = page.previous_cursor.clone();
        }
        assert_eq!(forward_index, 0);
    }

    #[tokio::test]
    async fn backward_walk_stops_at_the_top() {
        let codec = codec();
        let ids = [1, 2, 3, 4, 5, 6, 7];

        let cursor = codec.encode(4).unwrap();
        let page = paginator(&ids, &codec, 3)
            .previous_page(&cursor)
            .await
            .unwrap();

        assert_eq!(page.records, vec![5, 6, 7]);
        // The window touches the largest matching identifier.
        assert!(page.previous_cursor.is_none());
        let next = page.next_cursor.unwrap();
        assert_eq!(codec.decode(&next).unwrap(), 5);
    }

    #[tokio::test]
    async fn backward_short_circuits_to_first_page_on_small_collections() {
        let codec = codec();
        let ids = [3, 9];

        let cursor = codec.encode(3).unwrap();
        let page = paginator(&ids, &codec, 3)
            .previous_page(&cursor)
            .await
            .unwrap();

        let first = paginator(&ids, &codec, 3).first_page().await.unwrap();
        assert_eq!(page.records, first.records);
        assert!(page.previous_cursor.is_none());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn invalid_cursor_is_surfaced_unchanged() {
        let codec = codec();

        let result = paginator(&[1, 2, 3], &codec, 3).next_page("garbage").await;
        assert!(matches!(
            result,
            Err(PageError::Token(TokenError::InvalidToken))
        ));

        // The cursor is decoded before the short-circuit cardinality check.
        let result = paginator(&[1], &codec, 5).previous_page("garbage").await;
        assert!(matches!(
            result,
            Err(PageError::Token(TokenError::InvalidToken))
        ));
    }

    #[tokio::test]
    async fn cursor_from_a_foreign_key_is_rejected() {
        let codec = codec();
        let foreign = TokenCodec::new(CodecKey::from_bytes([9u8; 32]));

        let cursor = foreign.encode(5).unwrap();
        let result = paginator(&[1, 2, 3, 4, 5], &codec, 2).next_page(&cursor).await;

        assert!(matches!(result, Err(PageError::Token(_))));
    }

    #[tokio::test]
    async fn edge_query_failure_fails_the_whole_operation() {
        let codec = codec();
        let source = MockKeysetSource::new(vec![1, 2, 3, 4, 5, 6, 7]).with_failing_edges();
        let mut paginator = CursorPaginator::new(source, &codec, 3).unwrap();

        // The window query succeeds, but the boundary check cannot; the
        // whole call fails rather than returning a page with missing
        // cursors.
        let result = paginator.first_page().await;
        assert!(matches!(result, Err(PageError::Source(_))));
    }
}
