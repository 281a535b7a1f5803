use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::publishable::Publishable;
use super::text::{is_valid_slug, short_label};
use super::validation::{MAX_SLUG_LENGTH, Validate, validate_max_length, validate_title};
use crate::error::DomainError;

/// Category entity - a thematic section of the blog addressed by its slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Zero until the category is stored.
    pub id: i32,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Create a new, published category.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        slug: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            slug: slug.into(),
            is_published: true,
            created_at: Utc::now(),
        }
    }

    pub fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }
}

impl Validate for Category {
    fn validate(&self) -> Result<(), DomainError> {
        validate_title("title", &self.title)?;
        if !is_valid_slug(&self.slug) {
            return Err(DomainError::Validation(format!(
                "slug {:?} may contain only latin letters, digits, hyphen and underscore",
                self.slug
            )));
        }
        validate_max_length("slug", &self.slug, MAX_SLUG_LENGTH)
    }
}

impl Publishable for Category {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_label(&self.title))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category_is_published() {
        let category = Category::new("Travel", "Trips and roads", "travel");
        assert!(category.is_published());
        assert!(category.validate().is_ok());
        assert!(!category.unpublished().is_published());
    }

    #[test]
    fn test_rejects_bad_slug() {
        let category = Category::new("Travel", "", "travel notes");
        assert!(matches!(
            category.validate(),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_overlong_slug() {
        let fits = Category::new("Travel", "", "s".repeat(MAX_SLUG_LENGTH));
        assert!(fits.validate().is_ok());
        let category = Category::new("Travel", "", "s".repeat(MAX_SLUG_LENGTH + 1));
        assert!(matches!(
            category.validate(),
            Err(DomainError::Validation(_))
        ));
    }
}
