use std::ops::Deref;

use rocket::{
    self,
    request::{FromRequest, Outcome, Request},
};

use rpb_boundary::UserInfo;
use rpb_core::{
    entities::UserProfile, gateways::identity::IdentityTokenGateway,
    usecases::Error as ParameterError,
};

pub const COOKIE_USER_KEY: &str = "repboard-user";

type Result<T> = std::result::Result<T, ParameterError>;

/// Authentication state of the current request.
///
/// The guard itself never fails; endpoints that require an identity
/// call [`Auth::profile`] and turn the absence into a 401.
#[derive(Debug)]
pub struct Auth {
    profile: Option<UserProfile>,
}

impl Auth {
    pub fn profile(&self) -> Result<&UserProfile> {
        self.profile.as_ref().ok_or(ParameterError::Unauthorized)
    }

    fn profile_from_cookie(request: &Request) -> Option<UserProfile> {
        request
            .cookies()
            .get_private(COOKIE_USER_KEY)
            .and_then(|cookie| serde_json::from_str::<UserInfo>(cookie.value()).ok())
            .map(Into::into)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let profile = Self::profile_from_cookie(request);
        Outcome::Success(Auth { profile })
    }
}

pub struct Identity(pub Box<dyn IdentityTokenGateway + Send + Sync>);

impl Deref for Identity {
    type Target = dyn IdentityTokenGateway;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
