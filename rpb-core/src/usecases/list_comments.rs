use super::prelude::*;

/// Loads the full comment feed, newest first.
///
/// Each call re-reads the whole table. There is no pagination and
/// no caching; the result is a finite, materialized sequence.
pub fn list_comments<R>(repo: &R) -> Result<Vec<Comment>>
where
    R: CommentRepository,
{
    let comments = repo.all_comments()?;
    Ok(comments)
}
