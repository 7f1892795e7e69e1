mod add_comment;
mod error;
mod list_comments;
mod login;

pub use self::{add_comment::*, error::Error, list_comments::*, login::*};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{entities::*, repositories::*};
}
