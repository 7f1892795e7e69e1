use thiserror::Error;

/// The attributes of a user as confirmed by the identity provider.
///
/// Claims are validated once at the verifier boundary. Everything
/// behind this type can be trusted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedClaims {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("identity token rejected: {0}")]
    Rejected(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Validates an opaque identity token against the expected issuer
/// and audience.
///
/// Implementations must reject malformed, expired, wrong-audience,
/// and unverifiable tokens alike. Callers treat every failure
/// uniformly as an authentication failure and must never trust
/// claims from a failed verification.
pub trait IdentityTokenGateway {
    fn verify_id_token(&self, id_token: &str) -> Result<VerifiedClaims, Error>;
}
