//! Read-side use cases behind the public blog pages.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::{Category, PostEntry, VisiblePostQuery};
use crate::error::DomainError;
use crate::ports::{CategoryRepository, PostRepository};

/// Number of posts on the front page.
pub const POSTS_ON_INDEX_PAGE: u64 = 5;

/// A published category and its visible posts.
#[derive(Debug, Clone)]
pub struct CategoryPage {
    pub category: Category,
    pub posts: Vec<PostEntry>,
}

#[derive(Clone)]
pub struct BlogService {
    posts: Arc<dyn PostRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl BlogService {
    pub fn new(posts: Arc<dyn PostRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { posts, categories }
    }

    /// The most recent visible posts for the front page.
    pub async fn recent_posts(&self, now: DateTime<Utc>) -> Result<Vec<PostEntry>, DomainError> {
        let query = VisiblePostQuery::at(now).limit(POSTS_ON_INDEX_PAGE);
        let posts = self.posts.find_visible(&query).await?;
        tracing::debug!(count = posts.len(), "Loaded front page posts");
        Ok(posts)
    }

    /// A single visible post.
    pub async fn post_detail(&self, id: i32, now: DateTime<Utc>) -> Result<PostEntry, DomainError> {
        let query = VisiblePostQuery::at(now).post(id).limit(1);
        self.posts
            .find_visible(&query)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::not_found("Post", id))
    }

    /// A published category with all of its visible posts.
    pub async fn category_posts(
        &self,
        slug: &str,
        now: DateTime<Utc>,
    ) -> Result<CategoryPage, DomainError> {
        let category = self
            .categories
            .find_published_by_slug(slug)
            .await?
            .ok_or_else(|| DomainError::not_found("Category", slug))?;

        let query = VisiblePostQuery::at(now).in_category(category.id);
        let posts = self.posts.find_visible(&query).await?;
        tracing::debug!(slug, count = posts.len(), "Loaded category posts");

        Ok(CategoryPage { category, posts })
    }
}
