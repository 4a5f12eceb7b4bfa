//! Test utilities
//!
//! In-memory repositories, fixtures and SQLite-backed databases.
//!
//! Service tests run against the in-memory repositories and check the
//! recorded calls. Handler tests use the mockall-generated
//! `Mock*UseCases`. Repository and end-to-end tests use `seeded_test_db`.

pub mod db;
pub mod fixtures;
pub mod mocks;

pub use db::*;
pub use fixtures::*;
pub use mocks::*;
