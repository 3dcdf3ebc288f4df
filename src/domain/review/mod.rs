//! Review Context - 书评限界上下文

mod entity;
mod errors;
mod value_objects;

pub use entity::Review;
pub use errors::ReviewError;
pub use value_objects::{Comment, ReviewId};
