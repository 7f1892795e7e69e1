// Low-level database access traits.
// Each repository is responsible for a single entity. Related
// entities are only referenced by their id and never modified or
// loaded by another repository.

use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// A comment record before the storage has assigned an id.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommentRecord {
    pub user_email  : Option<String>,
    pub author_name : Option<String>,
    pub rating      : RatingValue,
    pub text        : String,
    pub created_at  : TimestampMs,
}

pub trait CommentRepository {
    /// Appends a single record. The storage assigns the next id.
    fn create_comment(&self, comment: NewCommentRecord) -> Result<()>;

    /// All records, materialized, ordered by timestamp descending.
    /// Ties at millisecond resolution are broken by id descending,
    /// i.e. by insertion order.
    fn all_comments(&self) -> Result<Vec<Comment>>;
}
