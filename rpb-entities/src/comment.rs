use crate::{rating::*, time::*};

/// A rating with an accompanying text, submitted by an
/// authenticated user.
///
/// The author fields are denormalized copies of the identity at
/// submission time. A later identity change does not retroactively
/// alter stored comments.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id          : i64,
    pub user_email  : Option<String>,
    pub author_name : Option<String>,
    pub rating      : RatingValue,
    pub text        : String,
    pub created_at  : TimestampMs,
}
