use super::*;
use json::RatingInput;

#[post("/api/comments", format = "application/json", data = "<new_comment>")]
pub fn post_comment(
    db: sqlite::Connections,
    auth: Auth,
    new_comment: JsonResult<json::NewCommentRequest>,
) -> Result<json::OkResponse> {
    // The identity comes from the session, never from the body.
    let author = auth.profile()?.clone();
    let json::NewCommentRequest { rating, comment } = new_comment?.into_inner();
    let rating = rating
        .as_ref()
        .and_then(RatingInput::to_integer)
        .unwrap_or_default();
    let comment = comment.unwrap_or_default();
    usecases::add_comment(&db.exclusive()?, &author, rating, &comment)?;
    Ok(Json(json::OkResponse { ok: true }))
}

#[get("/api/reputation")]
pub fn get_reputation(db: sqlite::Connections) -> Result<json::ReputationResponse> {
    let comments = usecases::list_comments(&db.shared()?)?;
    let data = comments.into_iter().map(Into::into).collect();
    Ok(Json(json::ReputationResponse { ok: true, data }))
}
