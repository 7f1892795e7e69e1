// NOTE:
// The `timestamp` column is stored as unix timestamp in
// **milli**seconds.

use super::schema::comments;

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub user_email: Option<&'a str>,
    pub name: Option<&'a str>,
    pub rating: i16,
    pub comment: &'a str,
    pub timestamp: i64,
}

#[derive(Queryable)]
pub struct CommentRecord {
    pub id: i64,
    pub user_email: Option<String>,
    pub name: Option<String>,
    pub rating: i16,
    pub comment: String,
    pub timestamp: i64,
}
