//! User repository with cursor-paginated listing operations.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::{AsyncPgConnection, RunQueryDsl};
use pagio_core::TokenCodec;

use crate::model::{NewUser, User};
use crate::types::{CursorPage, CursorPaginator, KeysetSource, PageError};
use crate::{PgError, PgResult, schema};

/// Base predicate applied to every user query before pagination.
#[derive(Debug, Default, Clone)]
pub struct UserFilter {
    /// Restrict to users with this exact name.
    pub name: Option<String>,
    /// Include soft-deleted users.
    pub include_deleted: bool,
}

impl UserFilter {
    /// Returns a filter restricted to the given name.
    pub fn by_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns a filter that also matches soft-deleted users.
    pub fn with_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }
}

/// Ordered query source over the users table.
///
/// Borrows a connection for the duration of one pagination call and applies
/// the same base predicate to every window, edge, and count query.
pub struct UserKeysetSource<'c> {
    conn: &'c mut AsyncPgConnection,
    filter: UserFilter,
}

impl<'c> UserKeysetSource<'c> {
    /// Creates a source over the given connection and base predicate.
    pub fn new(conn: &'c mut AsyncPgConnection, filter: UserFilter) -> Self {
        Self { conn, filter }
    }
}

#[async_trait]
impl KeysetSource for UserKeysetSource<'_> {
    type Record = User;

    async fn window_below(&mut self, anchor: Option<i64>, limit: i64) -> PgResult<Vec<User>> {
        use schema::users::{self, dsl};

        let mut query = users::table.select(User::as_select()).into_boxed();

        if !self.filter.include_deleted {
            query = query.filter(dsl::deleted_at.is_null());
        }
        if let Some(name) = &self.filter.name {
            query = query.filter(dsl::name.eq(name.clone()));
        }
        if let Some(anchor) = anchor {
            query = query.filter(dsl::id.lt(anchor));
        }

        query
            .order(dsl::id.desc())
            .limit(limit)
            .load(&mut *self.conn)
            .await
            .map_err(PgError::from)
    }

    async fn window_above(&mut self, anchor: i64, limit: i64) -> PgResult<Vec<User>> {
        use schema::users::{self, dsl};

        let mut query = users::table.select(User::as_select()).into_boxed();

        if !self.filter.include_deleted {
            query = query.filter(dsl::deleted_at.is_null());
        }
        if let Some(name) = &self.filter.name {
            query = query.filter(dsl::name.eq(name.clone()));
        }

        query
            .filter(dsl::id.gt(anchor))
            .order(dsl::id.asc())
            .limit(limit)
            .load(&mut *self.conn)
            .await
            .map_err(PgError::from)
    }

    async fn min_id(&mut self) -> PgResult<Option<i64>> {
        use schema::users::{self, dsl};

        let mut query = users::table.select(dsl::id).into_boxed();

        if !self.filter.include_deleted {
            query = query.filter(dsl::deleted_at.is_null());
        }
        if let Some(name) = &self.filter.name {
            query = query.filter(dsl::name.eq(name.clone()));
        }

        query
            .order(dsl::id.asc())
            .first::<i64>(&mut *self.conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn max_id(&mut self) -> PgResult<Option<i64>> {
        use schema::users::{self, dsl};

        let mut query = users::table.select(dsl::id).into_boxed();

        if !self.filter.include_deleted {
            query = query.filter(dsl::deleted_at.is_null());
        }
        if let Some(name) = &self.filter.name {
            query = query.filter(dsl::name.eq(name.clone()));
        }

        query
            .order(dsl::id.desc())
            .first::<i64>(&mut *self.conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    async fn count(&mut self) -> PgResult<i64> {
        use schema::users::{self, dsl};

        let mut query = users::table.into_boxed();

        if !self.filter.include_deleted {
            query = query.filter(dsl::deleted_at.is_null());
        }
        if let Some(name) = &self.filter.name {
            query = query.filter(dsl::name.eq(name.clone()));
        }

        query
            .count()
            .get_result(&mut *self.conn)
            .await
            .map_err(PgError::from)
    }
}

/// Repository for user table operations.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserRepository;

impl UserRepository {
    /// Creates a new user repository instance.
    pub fn new() -> Self {
        Self
    }

    /// Creates a new user in the database.
    pub async fn create_user(conn: &mut AsyncPgConnection, new_user: NewUser) -> PgResult<User> {
        use schema::users;

        diesel::insert_into(users::table)
            .values(&new_user)
            .returning(User::as_returning())
            .get_result(conn)
            .await
            .map_err(PgError::from)
    }

    /// Finds a user by its ID, excluding soft-deleted users.
    pub async fn find_user_by_id(
        conn: &mut AsyncPgConnection,
        user_id: i64,
    ) -> PgResult<Option<User>> {
        use schema::users::{self, dsl};

        users::table
            .filter(dsl::id.eq(user_id))
            .filter(dsl::deleted_at.is_null())
            .select(User::as_select())
            .first(conn)
            .await
            .optional()
            .map_err(PgError::from)
    }

    /// Soft-deletes a user.
    ///
    /// Returns whether a live user row was marked as deleted.
    pub async fn soft_delete_user(conn: &mut AsyncPgConnection, user_id: i64) -> PgResult<bool> {
        use schema::users::{self, dsl};

        let now = jiff_diesel::Timestamp::from(jiff::Timestamp::now());
        let updated = diesel::update(users::table)
            .filter(dsl::id.eq(user_id))
            .filter(dsl::deleted_at.is_null())
            .set(dsl::deleted_at.eq(Some(now)))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(updated > 0)
    }

    /// Restores a soft-deleted user.
    ///
    /// Returns whether a deleted user row was restored.
    pub async fn restore_user(conn: &mut AsyncPgConnection, user_id: i64) -> PgResult<bool> {
        use schema::users::{self, dsl};

        let updated = diesel::update(users::table)
            .filter(dsl::id.eq(user_id))
            .filter(dsl::deleted_at.is_not_null())
            .set(dsl::deleted_at.eq(None::<jiff_diesel::Timestamp>))
            .execute(conn)
            .await
            .map_err(PgError::from)?;

        Ok(updated > 0)
    }

    /// Counts the users matching the given filter.
    pub async fn count_users(conn: &mut AsyncPgConnection, filter: UserFilter) -> PgResult<i64> {
        let mut source = UserKeysetSource::new(conn, filter);
        source.count().await
    }

    /// Returns the first page of users matching the filter, newest first.
    pub async fn paginate_users_first(
        conn: &mut AsyncPgConnection,
        codec: &TokenCodec,
        filter: UserFilter,
        limit: i64,
    ) -> Result<CursorPage<User>, PageError> {
        let source = UserKeysetSource::new(conn, filter);
        let mut paginator = CursorPaginator::new(source, codec, limit)?;
        paginator.first_page().await
    }

    /// Returns the page of users after the cursor, walking toward older
    /// records.
    pub async fn paginate_users_after(
        conn: &mut AsyncPgConnection,
        codec: &TokenCodec,
        filter: UserFilter,
        limit: i64,
        cursor: &str,
    ) -> Result<CursorPage<User>, PageError> {
        let source = UserKeysetSource::new(conn, filter);
        let mut paginator = CursorPaginator::new(source, codec, limit)?;
        paginator.next_page(cursor).await
    }

    /// Returns the page of users before the cursor, walking back toward
    /// newer records.
    pub async fn paginate_users_before(
        conn: &mut AsyncPgConnection,
        codec: &TokenCodec,
        filter: UserFilter,
        limit: i64,
        cursor: &str,
    ) -> Result<CursorPage<User>, PageError> {
        let source = UserKeysetSource::new(conn, filter);
        let mut paginator = CursorPaginator::new(source, codec, limit)?;
        paginator.previous_page(cursor).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_builders() {
        let filter = UserFilter::default();
        assert!(filter.name.is_none());
        assert!(!filter.include_deleted);

        let filter = UserFilter::default().by_name("ada").with_deleted();
        assert_eq!(filter.name.as_deref(), Some("ada"));
        assert!(filter.include_deleted);
    }
}
