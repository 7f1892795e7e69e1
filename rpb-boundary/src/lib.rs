use serde::{Deserialize, Serialize};

mod conv;

/// Request body of `POST /session_login`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Credentials {
    pub id_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

/// Request body of `POST /api/comments`.
///
/// Both fields are optional on the wire; missing values are treated
/// like the original defaults (rating zero, empty comment) and fail
/// validation downstream where appropriate.
#[derive(Debug, Default, Deserialize)]
pub struct NewCommentRequest {
    #[serde(default)]
    pub rating: Option<RatingInput>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Lenient rating input: clients send either a JSON integer or an
/// integer formatted as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    Integer(i64),
    Text(String),
}

impl RatingInput {
    pub fn to_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentView {
    pub user_email : Option<String>,
    pub name       : Option<String>,
    pub rating     : i8,
    pub comment    : String,
    pub timestamp  : i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub ok: bool,
    pub user: UserInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReputationResponse {
    pub ok: bool,
    pub data: Vec<CommentView>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub ok: bool,
    pub error: String,
}
