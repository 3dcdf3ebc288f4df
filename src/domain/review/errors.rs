//! Review Context - Errors

use thiserror::Error;

use crate::domain::rating::RatingError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    #[error("Comment cannot be empty")]
    EmptyComment,

    #[error(transparent)]
    InvalidRating(#[from] RatingError),
}

impl ReviewError {
    pub fn field(&self) -> &'static str {
        match self {
            ReviewError::EmptyComment => "comment",
            ReviewError::InvalidRating(_) => "rating",
        }
    }
}
