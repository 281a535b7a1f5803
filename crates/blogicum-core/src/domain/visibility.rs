//! The public-visibility query shared by every listing and detail page.

use chrono::{DateTime, Utc};

use super::PostEntry;

/// Selects posts visible at `now`: published, not scheduled for later, and
/// either uncategorised or in a published category.
///
/// Narrowing filters stack on top of that base rule.
#[derive(Debug, Clone, PartialEq)]
pub struct VisiblePostQuery {
    pub now: DateTime<Utc>,
    pub post_id: Option<i32>,
    pub category_id: Option<i32>,
    pub limit: Option<u64>,
}

impl VisiblePostQuery {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            post_id: None,
            category_id: None,
            limit: None,
        }
    }

    pub fn post(mut self, post_id: i32) -> Self {
        self.post_id = Some(post_id);
        self
    }

    pub fn in_category(mut self, category_id: i32) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Row-level check, ignoring `limit`.
    pub fn matches(&self, entry: &PostEntry) -> bool {
        entry.is_visible(self.now)
            && self.post_id.is_none_or(|id| entry.post.id == id)
            && self
                .category_id
                .is_none_or(|id| entry.post.category_id == Some(id))
    }
}
