use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::publishable::Publishable;
use super::text::short_label;
use super::validation::{Validate, validate_title};
use crate::error::DomainError;

/// Location entity - a geographic tag attached to posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            is_published: true,
            created_at: Utc::now(),
        }
    }

    pub fn unpublished(mut self) -> Self {
        self.is_published = false;
        self
    }
}

impl Validate for Location {
    fn validate(&self) -> Result<(), DomainError> {
        validate_title("name", &self.name)
    }
}

impl Publishable for Location {
    fn is_published(&self) -> bool {
        self.is_published
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_label(&self.name))
    }
}
