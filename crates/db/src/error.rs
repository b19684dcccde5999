use dispatch_core::error::CoreError;
use dispatch_core::types::DbId;

/// Errors surfaced by the data access layer.
///
/// Connection, transport, and query failures come through as [`Database`];
/// nothing is retried or downgraded here. [`InvalidRow`] means a persisted
/// row could not be projected into a transport record, in which case the
/// whole call fails (no partial result).
///
/// [`Database`]: DbError::Database
/// [`InvalidRow`]: DbError::InvalidRow
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("request row {id} is not representable as a transport record: {source}")]
    InvalidRow {
        id: DbId,
        #[source]
        source: CoreError,
    },
}
