use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::publishable::Publishable;
use super::text::short_label;
use super::validation::{Validate, validate_title};
use super::{Category, Location, User};
use crate::error::DomainError;

/// Post entity - a single publication.
///
/// `pub_date` may lie in the future, in which case the post stays hidden
/// until that moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    pub location_id: Option<i32>,
    pub category_id: Option<i32>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new published post without location or category.
    pub fn new(
        author_id: Uuid,
        title: impl Into<String>,
        text: impl Into<String>,
        pub_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            text: text.into(),
            pub_date,
            author_id,
            location_id: None,
            category_id: None,
            is_published: true,
            created_at: Utc::now(),
        }
    }

    pub fn in_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn at_location(mut self, location_id: i32) -> Self {
        self.location_id = Some(location_id);
        self
    }

    pub fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }

    /// Published and not scheduled for later.
    pub fn is_live(&self, now: DateTime<Utc>) -> bool {
        self.is_published && self.pub_date <= now
    }

    /// Public visibility given the post's category, if it has one.
    pub fn is_visible(&self, category: Option<&Category>, now: DateTime<Utc>) -> bool {
        self.is_live(now) && category.is_none_or(|c| c.is_published())
    }
}

impl Validate for Post {
    fn validate(&self) -> Result<(), DomainError> {
        validate_title("title", &self.title)
    }
}

impl Publishable for Post {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_label(&self.title))
    }
}

/// A post together with the records it references, loaded up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostEntry {
    pub post: Post,
    pub author: User,
    pub location: Option<Location>,
    pub category: Option<Category>,
}

impl PostEntry {
    pub fn is_visible(&self, now: DateTime<Utc>) -> bool {
        self.post.is_visible(self.category.as_ref(), now)
    }

    /// The location, unless it has been hidden.
    pub fn public_location(&self) -> Option<&Location> {
        self.location.as_ref().filter(|l| l.is_published())
    }
}

/// Default ordering: newest `pub_date` first, ties broken by newest id.
pub fn newest_first(entries: &mut [PostEntry]) {
    entries.sort_by(|a, b| {
        b.post
            .pub_date
            .cmp(&a.post.pub_date)
            .then_with(|| b.post.id.cmp(&a.post.id))
    });
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn post(now: DateTime<Utc>) -> Post {
        Post::new(Uuid::new_v4(), "Morning", "Fog over the river", now)
    }

    #[test]
    fn test_visible_without_category() {
        let now = Utc::now();
        assert!(post(now).is_visible(None, now));
    }

    #[test]
    fn test_hidden_when_unpublished() {
        let now = Utc::now();
        assert!(!post(now).unpublished().is_visible(None, now));
    }

    #[test]
    fn test_hidden_when_scheduled() {
        let now = Utc::now();
        let scheduled = post(now + Duration::minutes(1));
        assert!(!scheduled.is_visible(None, now));
        assert!(scheduled.is_visible(None, now + Duration::minutes(1)));
    }

    #[test]
    fn test_category_gates_visibility() {
        let now = Utc::now();
        let open = Category::new("Travel", "", "travel");
        let hidden = open.clone().unpublished();
        assert!(post(now).is_visible(Some(&open), now));
        assert!(!post(now).is_visible(Some(&hidden), now));
    }

    #[test]
    fn test_public_location_hides_unpublished() {
        let now = Utc::now();
        let entry = PostEntry {
            post: post(now),
            author: User::new("leo"),
            location: Some(Location::new("Moscow").unpublished()),
            category: None,
        };
        assert!(entry.public_location().is_none());
    }

    #[test]
    fn test_newest_first_orders_by_pub_date() {
        let now = Utc::now();
        let author = User::new("leo");
        let mut entries: Vec<PostEntry> = [2, 0, 1]
            .into_iter()
            .map(|age| {
                let mut p = post(now - Duration::days(age));
                p.id = (10 - age) as i32;
                PostEntry {
                    post: p,
                    author: author.clone(),
                    location: None,
                    category: None,
                }
            })
            .collect();
        newest_first(&mut entries);
        let ids: Vec<i32> = entries.iter().map(|e| e.post.id).collect();
        assert_eq!(ids, vec![10, 9, 8]);
    }
}
