use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use super::json_error_response;
use rpb_core::usecases::Error as ParameterError;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),
    #[error("{0}")]
    BadRequest(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::BadRequest(anyhow!(err)),
            JsonError::Parse(_raw, err) => Self::BadRequest(anyhow!(err)),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(anyhow!(err))
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::Parameter(err) => match err {
                ParameterError::Unauthorized => {
                    json_error_response(req, &err, Status::Unauthorized)
                }
                ParameterError::RatingValue | ParameterError::IdentityToken => {
                    json_error_response(req, &err, Status::BadRequest)
                }
                ParameterError::Repo(_) => {
                    error!("Error: {err}");
                    Err(Status::InternalServerError)
                }
            },
            Error::BadRequest(err) => json_error_response(req, &err, Status::BadRequest),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
