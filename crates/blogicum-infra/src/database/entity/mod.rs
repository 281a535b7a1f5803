//! SeaORM entities mirroring the blog schema.

pub mod category;
pub mod location;
pub mod post;
pub mod user;
