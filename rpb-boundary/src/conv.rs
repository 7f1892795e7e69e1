use rpb_entities::{comment::Comment, user::UserProfile};

use super::*;

// NOTE:
// We cannot impl From<T> in the consuming crates, because the JSON
// structs and the entities both are outside of them.

impl From<UserProfile> for UserInfo {
    fn from(from: UserProfile) -> Self {
        let UserProfile {
            email,
            name,
            picture,
        } = from;
        Self {
            email,
            name,
            picture,
        }
    }
}

impl From<UserInfo> for UserProfile {
    fn from(from: UserInfo) -> Self {
        let UserInfo {
            email,
            name,
            picture,
        } = from;
        Self {
            email,
            name,
            picture,
        }
    }
}

impl From<Comment> for CommentView {
    fn from(from: Comment) -> Self {
        let Comment {
            user_email,
            author_name,
            rating,
            text,
            created_at,
            ..
        } = from;
        Self {
            user_email,
            name: author_name,
            rating: rating.into_inner(),
            comment: text,
            timestamp: created_at.as_millis(),
        }
    }
}
