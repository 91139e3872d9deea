//! User model for PostgreSQL database operations.

use diesel::prelude::*;
use jiff_diesel::Timestamp;

use crate::schema::users;
use crate::types::KeysetRecord;

/// User row, ordered by its monotonically assigned identifier.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    /// Unique user identifier, assigned in insertion order and never reused.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Timestamp when the user was created.
    pub created_at: Timestamp,
    /// Timestamp when the user was last updated.
    pub updated_at: Timestamp,
    /// Timestamp when the user was soft-deleted.
    pub deleted_at: Option<Timestamp>,
}

/// Data for creating a new user.
#[derive(Debug, Default, Clone, Insertable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewUser {
    /// Display name.
    pub name: String,
}

impl User {
    /// Returns whether this user is soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Returns how long ago the user was created.
    pub fn age(&self) -> jiff::Span {
        jiff::Timestamp::now() - jiff::Timestamp::from(self.created_at)
    }
}

impl NewUser {
    /// Creates a new user with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl KeysetRecord for User {
    fn keyset_id(&self) -> i64 {
        self.id
    }
}
