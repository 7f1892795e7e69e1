use super::*;

impl<'a> CommentRepository for DbReadWrite<'a> {
    fn create_comment(&self, comment: NewCommentRecord) -> Result<()> {
        create_comment(&mut self.conn.borrow_mut(), comment)
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
}

impl<'a> CommentRepository for DbReadOnly<'a> {
    fn create_comment(&self, _comment: NewCommentRecord) -> Result<()> {
        unreachable!();
    }
    fn all_comments(&self) -> Result<Vec<Comment>> {
        all_comments(&mut self.conn.borrow_mut())
    }
}

fn create_comment(conn: &mut SqliteConnection, comment: NewCommentRecord) -> Result<()> {
    let NewCommentRecord {
        user_email,
        author_name,
        rating,
        text,
        created_at,
    } = comment;
    let new_comment = models::NewComment {
        user_email: user_email.as_deref(),
        name: author_name.as_deref(),
        rating: i16::from(i8::from(rating)),
        comment: &text,
        timestamp: created_at.as_millis(),
    };
    let _count = diesel::insert_into(schema::comments::table)
        .values(&new_comment)
        .execute(conn)
        .map_err(from_diesel_err)?;
    debug_assert_eq!(1, _count);
    Ok(())
}

fn all_comments(conn: &mut SqliteConnection) -> Result<Vec<Comment>> {
    use schema::comments::dsl;
    schema::comments::table
        .order((dsl::timestamp.desc(), dsl::id.desc()))
        .load::<models::CommentRecord>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(comment_from_record)
        .collect()
}

fn comment_from_record(record: models::CommentRecord) -> Result<Comment> {
    let models::CommentRecord {
        id,
        user_email,
        name,
        rating,
        comment,
        timestamp,
    } = record;
    // Inserts are validated, so a stored record outside the rating
    // range indicates a corrupted database.
    let rating = RatingValue::try_from(i64::from(rating))
        .map_err(|_| repo::Error::Other(anyhow!("invalid rating value {rating} in record {id}")))?;
    Ok(Comment {
        id,
        user_email,
        author_name: name,
        rating,
        text: comment,
        created_at: TimestampMs::from_millis(timestamp),
    })
}
