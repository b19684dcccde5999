//! The request query service: the read-side contract of this crate.
//!
//! Four listing operations over `requests`, filtered by the unique display
//! names of the joined `areas` and `clients` rows. Filters are exact string
//! equality (collation-delegated); an unmatched name yields an empty vec,
//! never an error. Result order is whatever the database returns.
//!
//! Each call checks a connection out of the pool for its own scope and
//! returns it on every exit path; calls share no cursor or transaction
//! state and may be issued concurrently.

use sqlx::PgPool;

use crate::error::DbError;
use crate::models::request::{RequestRecord, RequestRow};

/// Columns of `requests`, table-qualified for use in joined queries.
const REQUEST_COLUMNS: &str = "r.id, r.area_id, r.client_id, r.subject, r.body, r.status, \
    r.created_at, r.updated_at";

/// Read contract for request listings.
///
/// A trait so callers can substitute a fake in tests; [`PgRequestQueries`]
/// is the one production implementation.
pub trait RequestQueries: Send + Sync {
    /// Requests whose client has the given display name.
    fn list_by_client(
        &self,
        client_name: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RequestRecord>, DbError>> + Send;

    /// Requests whose area has the given display name.
    fn list_by_area(
        &self,
        area_name: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RequestRecord>, DbError>> + Send;

    /// Requests matching both names (logical AND of the two filters).
    fn list_by_area_and_client(
        &self,
        area_name: &str,
        client_name: &str,
    ) -> impl std::future::Future<Output = Result<Vec<RequestRecord>, DbError>> + Send;

    /// Every request row, unfiltered.
    fn list_all(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<RequestRecord>, DbError>> + Send;
}

/// PostgreSQL-backed [`RequestQueries`] implementation.
pub struct PgRequestQueries {
    pool: PgPool,
}

impl PgRequestQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl RequestQueries for PgRequestQueries {
    async fn list_by_client(&self, client_name: &str) -> Result<Vec<RequestRecord>, DbError> {
        tracing::debug!(client = client_name, "listing requests by client");
        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM requests r \
             JOIN clients c ON r.client_id = c.id \
             WHERE c.fullname_client = $1"
        );
        let rows = sqlx::query_as::<_, RequestRow>(&query)
            .bind(client_name)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    async fn list_by_area(&self, area_name: &str) -> Result<Vec<RequestRecord>, DbError> {
        tracing::debug!(area = area_name, "listing requests by area");
        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM requests r \
             JOIN areas a ON r.area_id = a.id \
             WHERE a.fullname_area = $1"
        );
        let rows = sqlx::query_as::<_, RequestRow>(&query)
            .bind(area_name)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    async fn list_by_area_and_client(
        &self,
        area_name: &str,
        client_name: &str,
    ) -> Result<Vec<RequestRecord>, DbError> {
        tracing::debug!(
            area = area_name,
            client = client_name,
            "listing requests by area and client"
        );
        let query = format!(
            "SELECT {REQUEST_COLUMNS} FROM requests r \
             JOIN areas a ON r.area_id = a.id \
             JOIN clients c ON r.client_id = c.id \
             WHERE a.fullname_area = $1 AND c.fullname_client = $2"
        );
        let rows = sqlx::query_as::<_, RequestRow>(&query)
            .bind(area_name)
            .bind(client_name)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }

    async fn list_all(&self) -> Result<Vec<RequestRecord>, DbError> {
        tracing::debug!("listing all requests");
        let query = format!("SELECT {REQUEST_COLUMNS} FROM requests r");
        let rows = sqlx::query_as::<_, RequestRow>(&query)
            .fetch_all(&self.pool)
            .await?;
        into_records(rows)
    }
}

/// Project fetched rows into transport records, all-or-nothing.
///
/// The first row that fails validation fails the whole call; callers never
/// see a partial result.
fn into_records(rows: Vec<RequestRow>) -> Result<Vec<RequestRecord>, DbError> {
    rows.into_iter().map(RequestRecord::try_from).collect()
}
