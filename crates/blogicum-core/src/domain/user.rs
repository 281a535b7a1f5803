use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{
    MAX_NAME_LENGTH, Validate, validate_max_length, validate_required,
};
use crate::error::DomainError;

/// User entity - the author of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamp.
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            first_name: String::new(),
            last_name: String::new(),
            created_at: Utc::now(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    /// Full name when one is known, username otherwise.
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

impl Validate for User {
    fn validate(&self) -> Result<(), DomainError> {
        validate_required("username", &self.username, MAX_NAME_LENGTH)?;
        validate_max_length("first_name", &self.first_name, MAX_NAME_LENGTH)?;
        validate_max_length("last_name", &self.last_name, MAX_NAME_LENGTH)
    }
}
