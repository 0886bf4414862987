use thiserror::Error as DError;

/// Reason a review submission was rejected
#[derive(Debug, Clone, Eq, PartialEq, DError)]
pub enum Violation {
    #[error("User name is required")]
    NameRequired,

    #[error("Rating must be between {0} and {1} stars")]
    RatingOutOfRange(i32, i32),

    #[error("Review comment is required")]
    CommentRequired,

    #[error("Review must be at least {0} words")]
    CommentTooShort(usize),
}
