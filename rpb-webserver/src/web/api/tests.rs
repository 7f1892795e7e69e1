use super::*;
use rpb_core::{
    entities::{RatingValue, TimestampMs},
    repositories::{CommentRepository as _, NewCommentRecord},
};

pub mod prelude {

    use crate::web::{self, api, sqlite};

    pub use crate::web::tests::prelude::*;

    pub fn setup() -> (Client, sqlite::Connections) {
        web::tests::rocket_test_setup(vec![("/", api::routes())])
    }

    pub fn test_json(r: &LocalResponse) {
        assert_eq!(
            r.headers().get("Content-Type").collect::<Vec<_>>()[0],
            "application/json"
        );
    }

    pub fn login(client: &Client) {
        let res = client
            .post("/session_login")
            .header(ContentType::JSON)
            .body(format!(r#"{{"id_token":"{VALID_ID_TOKEN}"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::Ok);
    }

    pub fn comment_count(db: &sqlite::Connections) -> usize {
        use rpb_core::repositories::CommentRepository as _;
        db.shared().unwrap().all_comments().unwrap().len()
    }
}

use self::prelude::*;

#[test]
fn login_with_a_valid_token() {
    let (client, _db) = setup();
    let res = client
        .post("/session_login")
        .header(ContentType::JSON)
        .body(format!(r#"{{"id_token":"{VALID_ID_TOKEN}"}}"#))
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = res.into_string().unwrap();
    let response: json::LoginResponse = serde_json::from_str(&body).unwrap();
    assert!(response.ok);
    assert_eq!(TEST_USER_EMAIL, response.user.email);
    assert_eq!(Some(TEST_USER_NAME.to_owned()), response.user.name);
}

#[test]
fn login_without_id_token() {
    let (client, _db) = setup();
    let res = client
        .post("/session_login")
        .header(ContentType::JSON)
        .body("{}")
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    let body = res.into_string().unwrap();
    let response: json::ErrorResponse = serde_json::from_str(&body).unwrap();
    assert!(!response.ok);
}

#[test]
fn login_with_a_rejected_token_creates_no_session() {
    let (client, db) = setup();
    let res = client
        .post("/session_login")
        .header(ContentType::JSON)
        .body(r#"{"id_token":"forged"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);

    // Submitting afterwards must still be unauthenticated.
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":3,"comment":"ok"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    assert_eq!(0, comment_count(&db));
}

#[test]
fn comment_requires_authentication() {
    let (client, db) = setup();
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":3,"comment":"ok"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    test_json(&res);
    let body = res.into_string().unwrap();
    let response: json::ErrorResponse = serde_json::from_str(&body).unwrap();
    assert!(!response.ok);
    assert_eq!("not authenticated", response.error);
    assert_eq!(0, comment_count(&db));
}

#[test]
fn comment_with_out_of_range_rating_is_never_stored() {
    let (client, db) = setup();
    login(&client);
    for rating in [-1, 0, 6, 42] {
        let res = client
            .post("/api/comments")
            .header(ContentType::JSON)
            .body(format!(r#"{{"rating":{rating},"comment":"nope"}}"#))
            .dispatch();
        assert_eq!(res.status(), Status::BadRequest);
        let body = res.into_string().unwrap();
        let response: json::ErrorResponse = serde_json::from_str(&body).unwrap();
        assert!(!response.ok);
    }
    assert_eq!(0, comment_count(&db));
}

#[test]
fn comment_without_rating_is_rejected() {
    let (client, db) = setup();
    login(&client);
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"comment":"no rating given"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::BadRequest);
    assert_eq!(0, comment_count(&db));
}

#[test]
fn comment_in_range_is_stored_once_and_trimmed() {
    let (client, db) = setup();
    login(&client);
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":5,"comment":"  great  "}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);

    let comments = db.shared().unwrap().all_comments().unwrap();
    assert_eq!(1, comments.len());
    assert_eq!("great", comments[0].text);
    assert_eq!(5, i8::from(comments[0].rating));
    assert_eq!(Some(TEST_USER_EMAIL.to_owned()), comments[0].user_email);
    assert_eq!(Some(TEST_USER_NAME.to_owned()), comments[0].author_name);
}

#[test]
fn comment_identity_cannot_be_spoofed_by_the_body() {
    let (client, db) = setup();
    login(&client);
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":4,"comment":"ok","user_email":"evil@example.com","name":"Evil"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let comments = db.shared().unwrap().all_comments().unwrap();
    assert_eq!(Some(TEST_USER_EMAIL.to_owned()), comments[0].user_email);
    assert_eq!(Some(TEST_USER_NAME.to_owned()), comments[0].author_name);
}

#[test]
fn comment_rating_is_coerced_from_a_string() {
    let (client, db) = setup();
    login(&client);
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":"3","comment":"coerced"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let comments = db.shared().unwrap().all_comments().unwrap();
    assert_eq!(1, comments.len());
    assert_eq!(3, i8::from(comments[0].rating));
}

#[test]
fn comment_with_missing_text_is_stored_empty() {
    let (client, db) = setup();
    login(&client);
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":4}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    let comments = db.shared().unwrap().all_comments().unwrap();
    assert_eq!("", comments[0].text);
}

#[test]
fn logout_ends_the_session() {
    let (client, db) = setup();
    login(&client);

    let res = client.post("/logout").dispatch();
    assert_eq!(res.status(), Status::Ok);

    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":4,"comment":"after logout"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Unauthorized);
    assert_eq!(0, comment_count(&db));
}

#[test]
fn logout_is_idempotent() {
    let (client, _db) = setup();
    // No login before.
    let res = client.post("/logout").dispatch();
    assert_eq!(res.status(), Status::Ok);
    let body = res.into_string().unwrap();
    let response: json::OkResponse = serde_json::from_str(&body).unwrap();
    assert!(response.ok);
}

fn insert_comment(db: &sqlite::Connections, text: &str, millis: i64) {
    db.exclusive()
        .unwrap()
        .create_comment(NewCommentRecord {
            user_email: Some(TEST_USER_EMAIL.to_owned()),
            author_name: Some(TEST_USER_NAME.to_owned()),
            rating: RatingValue::try_from(4).unwrap(),
            text: text.to_owned(),
            created_at: TimestampMs::from_millis(millis),
        })
        .unwrap();
}

#[test]
fn reputation_requires_no_authentication() {
    let (client, _db) = setup();
    let res = client.get("/api/reputation").dispatch();
    assert_eq!(res.status(), Status::Ok);
    test_json(&res);
    let body = res.into_string().unwrap();
    let response: json::ReputationResponse = serde_json::from_str(&body).unwrap();
    assert!(response.ok);
    assert!(response.data.is_empty());
}

#[test]
fn reputation_is_ordered_newest_first() {
    let (client, db) = setup();
    insert_comment(&db, "older", 1_000);
    insert_comment(&db, "newer", 2_000);

    let body = client
        .get("/api/reputation")
        .dispatch()
        .into_string()
        .unwrap();
    let response: json::ReputationResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(2, response.data.len());
    assert_eq!("newer", response.data[0].comment);
    assert_eq!(2_000, response.data[0].timestamp);
    assert_eq!("older", response.data[1].comment);
}

#[test]
fn reputation_breaks_timestamp_ties_by_insertion_order() {
    let (client, db) = setup();
    insert_comment(&db, "first", 1_000);
    insert_comment(&db, "second", 1_000);

    let body = client
        .get("/api/reputation")
        .dispatch()
        .into_string()
        .unwrap();
    let response: json::ReputationResponse = serde_json::from_str(&body).unwrap();
    assert_eq!("second", response.data[0].comment);
    assert_eq!("first", response.data[1].comment);
}

#[test]
fn reputation_is_stable_without_writes() {
    let (client, db) = setup();
    insert_comment(&db, "one", 1_000);
    insert_comment(&db, "two", 2_000);

    let first = client
        .get("/api/reputation")
        .dispatch()
        .into_string()
        .unwrap();
    let second = client
        .get("/api/reputation")
        .dispatch()
        .into_string()
        .unwrap();
    assert_eq!(first, second);
}

#[test]
fn reputation_reflects_comments_submitted_via_the_api() {
    let (client, db) = setup();
    login(&client);
    let res = client
        .post("/api/comments")
        .header(ContentType::JSON)
        .body(r#"{"rating":5,"comment":"via api"}"#)
        .dispatch();
    assert_eq!(res.status(), Status::Ok);
    assert_eq!(1, comment_count(&db));

    let body = client
        .get("/api/reputation")
        .dispatch()
        .into_string()
        .unwrap();
    let response: json::ReputationResponse = serde_json::from_str(&body).unwrap();
    assert_eq!(1, response.data.len());
    assert_eq!("via api", response.data[0].comment);
    assert_eq!(5, response.data[0].rating);
    assert_eq!(Some(TEST_USER_EMAIL.to_owned()), response.data[0].user_email);
}
