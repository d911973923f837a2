//! Pagination state over a fetched user batch.
//!
//! A session pairs the immutable list of fetched records with the index of
//! the record currently on screen. The index only moves through the bounded
//! step methods, so `0 <= index < len` holds whenever the list is non-empty.

use crate::api::UserRecord;

/// One fetched batch plus the current pagination index.
///
/// Created per successful fetch and discarded when the user goes back to
/// the entry screen; the record list is never mutated after creation.
#[derive(Debug, Clone, Default)]
pub struct UserSession {
    users: Vec<UserRecord>,
    index: usize,
}

impl UserSession {
    /// Create a session positioned at the first record.
    pub fn new(users: Vec<UserRecord>) -> Self {
        Self { users, index: 0 }
    }

    /// Whether the session holds no records (the NoData state).
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Number of records in the batch.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Zero-based index of the record currently displayed.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The record at the current index, if any.
    pub fn current(&self) -> Option<&UserRecord> {
        self.users.get(self.index)
    }

    /// Whether stepping forward is enabled (not at the last record).
    pub fn has_next(&self) -> bool {
        self.index + 1 < self.users.len()
    }

    /// Whether stepping backward is enabled (not at the first record).
    pub fn has_previous(&self) -> bool {
        self.index > 0
    }

    /// Move to the next record. No-op at the last record.
    ///
    /// Returns whether the index moved.
    pub fn step_forward(&mut self) -> bool {
        if self.has_next() {
            self.index += 1;
            true
        } else {
            false
        }
    }

    /// Move to the previous record. No-op at the first record.
    ///
    /// Returns whether the index moved.
    pub fn step_backward(&mut self) -> bool {
        if self.has_previous() {
            self.index -= 1;
            true
        } else {
            false
        }
    }
}
