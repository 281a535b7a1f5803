//! In-memory blog store - used as fallback when no database is configured.
//!
//! Mirrors the relational rules of the PostgreSQL schema: unique slugs and
//! usernames, checked references, cascade from authors to posts and
//! null-on-delete from categories and locations.
//! Note: Data is lost on process restart.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blogicum_core::domain::{
    Category, Location, Post, PostEntry, User, Validate, VisiblePostQuery, newest_first,
};
use blogicum_core::error::RepoError;
use blogicum_core::ports::{
    BaseRepository, CategoryRepository, LocationRepository, PostRepository, UserRepository,
};

#[derive(Default)]
struct Tables {
    users: BTreeMap<Uuid, User>,
    categories: BTreeMap<i32, Category>,
    locations: BTreeMap<i32, Location>,
    posts: BTreeMap<i32, Post>,
    last_id: i32,
}

impl Tables {
    /// Keys are drawn from one counter shared by every table.
    fn assign_id(&mut self, id: i32) -> i32 {
        if id == 0 {
            self.last_id += 1;
            self.last_id
        } else {
            self.last_id = self.last_id.max(id);
            id
        }
    }

    fn check_post_references(&self, post: &Post) -> Result<(), RepoError> {
        if !self.users.contains_key(&post.author_id) {
            return Err(RepoError::Constraint(format!(
                "author {} does not exist",
                post.author_id
            )));
        }
        if let Some(id) = post.category_id.filter(|id| !self.categories.contains_key(id)) {
            return Err(RepoError::Constraint(format!("category {id} does not exist")));
        }
        if let Some(id) = post.location_id.filter(|id| !self.locations.contains_key(id)) {
            return Err(RepoError::Constraint(format!("location {id} does not exist")));
        }
        Ok(())
    }

    fn entry(&self, post: &Post) -> Option<PostEntry> {
        Some(PostEntry {
            post: post.clone(),
            author: self.users.get(&post.author_id)?.clone(),
            location: post
                .location_id
                .and_then(|id| self.locations.get(&id))
                .cloned(),
            category: post
                .category_id
                .and_then(|id| self.categories.get(&id))
                .cloned(),
        })
    }
}

fn validate<T: Validate>(entity: &T) -> Result<(), RepoError> {
    entity
        .validate()
        .map_err(|e| RepoError::Validation(e.to_string()))
}

/// In-memory store implementing every blog repository over one set of
/// tables guarded by an async RwLock.
#[derive(Default)]
pub struct InMemoryBlogStore {
    tables: RwLock<Tables>,
}

impl InMemoryBlogStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryBlogStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }

    async fn save(&self, mut user: User) -> Result<User, RepoError> {
        validate(&user)?;
        let mut tables = self.tables.write().await;

        if tables
            .users
            .values()
            .any(|u| u.username == user.username && u.id != user.id)
        {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        if let Some(stored) = tables.users.get(&user.id) {
            user.created_at = stored.created_at;
        }

        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let before = tables.posts.len();
        tables.posts.retain(|_, post| post.author_id != id);
        tracing::debug!(
            author_id = %id,
            removed_posts = before - tables.posts.len(),
            "Deleted author"
        );
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryBlogStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Category, i32> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepoError> {
        Ok(self.tables.read().await.categories.get(&id).cloned())
    }

    async fn save(&self, mut category: Category) -> Result<Category, RepoError> {
        validate(&category)?;
        let mut tables = self.tables.write().await;

        if tables
            .categories
            .values()
            .any(|c| c.slug == category.slug && c.id != category.id)
        {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }
        if let Some(stored) = tables.categories.get(&category.id) {
            category.created_at = stored.created_at;
        }

        category.id = tables.assign_id(category.id);
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.categories.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        for post in tables.posts.values_mut() {
            if post.category_id == Some(id) {
                post.category_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CategoryRepository for InMemoryBlogStore {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .find(|c| c.slug == slug && c.is_published)
            .cloned())
    }
}

#[async_trait]
impl BaseRepository<Location, i32> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Location>, RepoError> {
        Ok(self.tables.read().await.locations.get(&id).cloned())
    }

    async fn save(&self, mut location: Location) -> Result<Location, RepoError> {
        validate(&location)?;
        let mut tables = self.tables.write().await;

        if let Some(stored) = tables.locations.get(&location.id) {
            location.created_at = stored.created_at;
        }

        location.id = tables.assign_id(location.id);
        tables.locations.insert(location.id, location.clone());
        Ok(location)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        if tables.locations.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        for post in tables.posts.values_mut() {
            if post.location_id == Some(id) {
                post.location_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl LocationRepository for InMemoryBlogStore {}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryBlogStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        validate(&post)?;
        let mut tables = self.tables.write().await;

        tables.check_post_references(&post)?;
        if let Some(stored) = tables.posts.get(&post.id) {
            post.created_at = stored.created_at;
        }

        post.id = tables.assign_id(post.id);
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut tables = self.tables.write().await;
        tables.posts.remove(&id).map(|_| ()).ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryBlogStore {
    async fn find_visible(&self, query: &VisiblePostQuery) -> Result<Vec<PostEntry>, RepoError> {
        let tables = self.tables.read().await;

        let mut entries: Vec<PostEntry> = tables
            .posts
            .values()
            .filter_map(|post| tables.entry(post))
            .filter(|entry| query.matches(entry))
            .collect();
        newest_first(&mut entries);

        if let Some(limit) = query.limit {
            entries.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        }
        Ok(entries)
    }
}
