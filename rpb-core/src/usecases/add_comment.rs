use super::prelude::*;

/// Validates and stores a new comment on behalf of the given author.
///
/// The author identity is taken from the active session, never from
/// the request body. The timestamp is stamped here, at submission
/// time, with millisecond precision.
pub fn add_comment<R>(repo: &R, author: &UserProfile, rating: i64, text: &str) -> Result<()>
where
    R: CommentRepository,
{
    let rating = RatingValue::try_from(rating)?;
    let comment = NewCommentRecord {
        user_email: Some(author.email.clone()),
        author_name: author.name.clone(),
        rating,
        text: text.trim().to_owned(),
        created_at: TimestampMs::now(),
    };
    repo.create_comment(comment)?;
    Ok(())
}
