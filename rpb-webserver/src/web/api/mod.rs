use std::{fmt::Display, result};

use rocket::{
    self, get,
    http::{Cookie, CookieJar, Status},
    post,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use super::{guards::*, sqlite};
use rpb_boundary as json;
use rpb_core::usecases;

mod comments;
mod error;
mod users;

pub use self::error::Error as ApiError;

#[cfg(test)]
pub mod tests;

type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        // ---   session   --- //
        users::post_session_login,
        users::post_logout,
        // ---   comments   --- //
        comments::post_comment,
        comments::get_reputation,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let envelope = json::ErrorResponse {
        ok: false,
        error: err.to_string(),
    };
    Json(envelope).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
