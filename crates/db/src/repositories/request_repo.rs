//! Repository for the `requests` table.

use sqlx::PgPool;

use crate::models::request::{CreateRequest, RequestRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, area_id, client_id, subject, body, status, created_at, updated_at";

/// Write and counting operations for requests.
pub struct RequestRepo;

impl RequestRepo {
    /// Insert a new request, returning the created row.
    ///
    /// If `status` is `None`, defaults to `'open'`.
    pub async fn create(pool: &PgPool, input: &CreateRequest) -> Result<RequestRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO requests (area_id, client_id, subject, body, status)
             VALUES ($1, $2, $3, $4, COALESCE($5, 'open'))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, RequestRow>(&query)
            .bind(input.area_id)
            .bind(input.client_id)
            .bind(&input.subject)
            .bind(&input.body)
            .bind(input.status.map(|s| s.as_str()))
            .fetch_one(pool)
            .await
    }

    /// Total number of persisted request rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM requests")
            .fetch_one(pool)
            .await
    }
}
