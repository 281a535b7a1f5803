//! PostgreSQL repository implementations.

use std::collections::{BTreeSet, HashMap};

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, QuerySelect};
use uuid::Uuid;

use blogicum_core::domain::{Category, Location, PostEntry, User, VisiblePostQuery};
use blogicum_core::error::RepoError;
use blogicum_core::ports::{
    CategoryRepository, LocationRepository, PostRepository, UserRepository,
};

use super::entity::category::{self, Entity as CategoryEntity};
use super::entity::location::{self, Entity as LocationEntity};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL user repository.
pub type PostgresUserRepository = PostgresBaseRepository<UserEntity>;

/// PostgreSQL category repository.
pub type PostgresCategoryRepository = PostgresBaseRepository<CategoryEntity>;

/// PostgreSQL location repository.
pub type PostgresLocationRepository = PostgresBaseRepository<LocationEntity>;

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl CategoryRepository for PostgresCategoryRepository {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<Category>, RepoError> {
        tracing::debug!(slug, "Finding published category");

        let result = CategoryEntity::find()
            .filter(category::Column::Slug.eq(slug))
            .filter(category::Column::IsPublished.eq(true))
            .one(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }
}

#[async_trait]
impl LocationRepository for PostgresLocationRepository {}

impl PostgresPostRepository {
    async fn load_authors(&self, ids: BTreeSet<Uuid>) -> Result<HashMap<Uuid, User>, RepoError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = UserEntity::find()
            .filter(user::Column::Id.is_in(ids))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| (m.id, m.into())).collect())
    }

    async fn load_locations(
        &self,
        ids: BTreeSet<i32>,
    ) -> Result<HashMap<i32, Location>, RepoError> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }
        let models = LocationEntity::find()
            .filter(location::Column::Id.is_in(ids))
            .all(self.db.as_ref())
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(|m| (m.id, m.into())).collect())
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_visible(&self, query: &VisiblePostQuery) -> Result<Vec<PostEntry>, RepoError> {
        // The category is joined so its flag can be filtered on; a post
        // without a category passes the category check.
        let mut select = PostEntity::find()
            .find_also_related(CategoryEntity)
            .filter(post::Column::IsPublished.eq(true))
            .filter(post::Column::PubDate.lte(query.now))
            .filter(
                Condition::any()
                    .add(post::Column::CategoryId.is_null())
                    .add(category::Column::IsPublished.eq(true)),
            );

        if let Some(id) = query.post_id {
            select = select.filter(post::Column::Id.eq(id));
        }
        if let Some(id) = query.category_id {
            select = select.filter(post::Column::CategoryId.eq(id));
        }

        let mut select = select
            .order_by_desc(post::Column::PubDate)
            .order_by_desc(post::Column::Id);
        if let Some(limit) = query.limit {
            select = select.limit(limit);
        }

        let rows = select.all(self.db.as_ref()).await.map_err(map_db_err)?;

        // One query per related table instead of one per post.
        let authors = self
            .load_authors(rows.iter().map(|(p, _)| p.author_id).collect())
            .await?;
        let locations = self
            .load_locations(rows.iter().filter_map(|(p, _)| p.location_id).collect())
            .await?;

        let mut entries = Vec::with_capacity(rows.len());
        for (post, category) in rows {
            let Some(author) = authors.get(&post.author_id).cloned() else {
                tracing::warn!(post_id = post.id, "Skipping post with missing author");
                continue;
            };
            let location = post
                .location_id
                .and_then(|id| locations.get(&id).cloned());

            entries.push(PostEntry {
                post: post.into(),
                author,
                location,
                category: category.map(Into::into),
            });
        }

        Ok(entries)
    }
}
