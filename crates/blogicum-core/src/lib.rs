//! # Blogicum Core
//!
//! The domain layer of the Blogicum blog.
//! This crate holds the publication rules and use cases with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

pub use error::{DomainError, RepoError};
pub use service::{BlogService, CategoryPage, POSTS_ON_INDEX_PAGE};
