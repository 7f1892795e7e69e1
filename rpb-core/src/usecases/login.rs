use super::prelude::*;
use crate::gateways::identity::IdentityTokenGateway;

/// Verifies an identity token and turns the claims into a session
/// profile.
///
/// Every verifier failure is mapped to the same error so that the
/// caller cannot leak details about why a token was rejected.
pub fn login_with_identity_token(
    gateway: &dyn IdentityTokenGateway,
    id_token: &str,
) -> Result<UserProfile> {
    let claims = gateway.verify_id_token(id_token).map_err(|err| {
        log::debug!("Identity token rejected: {err}");
        Error::IdentityToken
    })?;
    Ok(UserProfile {
        email: claims.email,
        name: claims.name,
        picture: claims.picture,
    })
}
