//! Domain entities - the core business objects.

mod category;
mod location;
mod post;
mod publishable;
pub mod text;
mod user;
mod validation;
mod visibility;

pub use category::Category;
pub use location::Location;
pub use post::{Post, PostEntry, newest_first};
pub use publishable::Publishable;
pub use user::User;
pub use validation::{
    MAX_NAME_LENGTH, MAX_SLUG_LENGTH, MAX_TITLE_LENGTH, Validate, validate_max_length,
    validate_required, validate_title,
};
pub use visibility::VisiblePostQuery;
