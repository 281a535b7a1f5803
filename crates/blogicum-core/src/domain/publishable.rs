use chrono::{DateTime, Utc};

/// Shared shape of every record that can be hidden from the public site.
///
/// Records are published by default and carry the moment they were created,
/// which never changes afterwards.
pub trait Publishable {
    fn is_published(&self) -> bool;

    fn created_at(&self) -> DateTime<Utc>;
}
