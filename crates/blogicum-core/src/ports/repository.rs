use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Category, Location, Post, PostEntry, User, VisiblePostQuery};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    ///
    /// Posts of a deleted user go with it; posts of a deleted category or
    /// location lose the reference.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

#[async_trait]
pub trait CategoryRepository: BaseRepository<Category, i32> {
    /// Find a category by slug, only if it is published.
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError>;
}

#[async_trait]
pub trait LocationRepository: BaseRepository<Location, i32> {}

/// Post repository.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, i32> {
    /// Posts matching `query`, newest first, with author, location and
    /// category attached.
    async fn find_visible(&self, query: &VisiblePostQuery) -> Result<Vec<PostEntry>, RepoError>;
}
