//! Page window returned by the pagination engine.

/// One page of a cursor-paginated result set.
///
/// Holds at most `limit` records plus the cursors pointing at the
/// neighboring pages. A page is constructed fresh on every call and never
/// persisted.
#[derive(Debug, Clone)]
pub struct CursorPage<T> {
    /// The records in this page, in the order the query produced them.
    pub records: Vec<T>,
    /// Cursor to fetch the previous page. Absent on the first page and
    /// whenever the window already touches the newest matching record.
    pub previous_cursor: Option<String>,
    /// Cursor to fetch the next page. Absent whenever the window already
    /// touches the oldest matching record.
    pub next_cursor: Option<String>,
}

impl<T> CursorPage<T> {
    /// Creates an empty page with no cursors.
    pub fn empty() -> Self {
        Self {
            records: Vec::new(),
            previous_cursor: None,
            next_cursor: None,
        }
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns whether more records exist past this page.
    pub fn has_next(&self) -> bool {
        self.next_cursor.is_some()
    }

    /// Returns whether more records exist before this page.
    pub fn has_previous(&self) -> bool {
        self.previous_cursor.is_some()
    }

    /// Maps the records to a different type, keeping both cursors.
    pub fn map<U, F>(self, f: F) -> CursorPage<U>
    where
        F: FnMut(T) -> U,
    {
        CursorPage {
            records: self.records.into_iter().map(f).collect(),
            previous_cursor: self.previous_cursor,
            next_cursor: self.next_cursor,
        }
    }
}

impl<T> Default for CursorPage<T> {
    fn default() -> Self {
        Self::empty()
    }
}
