use thiserror::Error;

use crate::repositories;

#[derive(Debug, Error)]
pub enum Error {
    #[error("rating must be 1..5")]
    RatingValue,
    #[error("not authenticated")]
    Unauthorized,
    #[error("invalid id token")]
    IdentityToken,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<rpb_entities::rating::RatingValueOutOfRange> for Error {
    fn from(_: rpb_entities::rating::RatingValueOutOfRange) -> Self {
        Self::RatingValue
    }
}