//! # Blogicum Infrastructure
//!
//! Concrete implementations of the ports defined in `blogicum-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//! - `--no-default-features` - no database driver, in-memory store only

pub mod database;

pub use database::{DatabaseConfig, DatabaseConnections, InMemoryBlogStore};
