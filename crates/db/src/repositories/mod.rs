//! Repository layer: the seed/writer path.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Steady-state reads go through
//! [`crate::queries::RequestQueries`] instead; these repositories exist for
//! the bootstrap and test-seeding path that populates the tables.

pub mod area_repo;
pub mod client_repo;
pub mod request_repo;

pub use area_repo::AreaRepo;
pub use client_repo::ClientRepo;
pub use request_repo::RequestRepo;
