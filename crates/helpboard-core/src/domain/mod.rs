//! Domain entities.

mod post;
mod settings;

pub use post::{NewPost, Post, PostId, PostIdError, NO_IMAGE, POSTS_PARTITION};
pub use settings::{Setting, LOCATIONS_PARTITION, TYPES_PARTITION};
