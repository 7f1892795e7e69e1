use anyhow::anyhow;
use serde::Deserialize;
use time::OffsetDateTime;

use rpb_core::gateways::identity::{Error, IdentityTokenGateway, VerifiedClaims};

const TOKENINFO_URL: &str = "https://oauth2.googleapis.com/tokeninfo";

const ACCEPTED_ISSUERS: [&str; 2] = ["accounts.google.com", "https://accounts.google.com"];

/// An identity verifier backed by Google's `tokeninfo` endpoint.
///
/// The endpoint validates the token signature on Google's side; this
/// gateway checks the remaining claims (audience, issuer, expiry)
/// against the configured OAuth client id.
#[derive(Debug, Clone)]
pub struct GoogleIdentity {
    client_id: String,
    tokeninfo_url: String,
    client: reqwest::blocking::Client,
}

impl GoogleIdentity {
    pub fn new(client_id: String) -> Self {
        Self {
            client_id,
            tokeninfo_url: TOKENINFO_URL.to_owned(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

// Numeric fields are returned as JSON strings by the endpoint.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    iss: String,
    exp: String,
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

fn claims_from_token_info(
    info: TokenInfo,
    client_id: &str,
    now: OffsetDateTime,
) -> Result<VerifiedClaims, Error> {
    let TokenInfo {
        aud,
        iss,
        exp,
        email,
        name,
        picture,
    } = info;
    if aud != client_id {
        return Err(Error::Rejected("audience mismatch".to_owned()));
    }
    if !ACCEPTED_ISSUERS.contains(&iss.as_str()) {
        return Err(Error::Rejected(format!("unknown issuer '{iss}'")));
    }
    let exp: i64 = exp
        .parse()
        .map_err(|_| Error::Rejected("malformed expiry".to_owned()))?;
    if exp <= now.unix_timestamp() {
        return Err(Error::Rejected("token expired".to_owned()));
    }
    let email = email.ok_or_else(|| Error::Rejected("no email claim".to_owned()))?;
    Ok(VerifiedClaims {
        email,
        name,
        picture,
    })
}

impl IdentityTokenGateway for GoogleIdentity {
    fn verify_id_token(&self, id_token: &str) -> Result<VerifiedClaims, Error> {
        let response = self
            .client
            .get(&self.tokeninfo_url)
            .query(&[("id_token", id_token)])
            .send()
            .map_err(|err| {
                log::warn!("Failed to reach the identity verifier: {err}");
                Error::Other(anyhow!(err))
            })?;
        if !response.status().is_success() {
            // The endpoint answers with a client error for any
            // malformed or expired token.
            return Err(Error::Rejected(format!(
                "verifier answered with status {}",
                response.status()
            )));
        }
        let info: TokenInfo = response.json().map_err(|err| Error::Other(anyhow!(err)))?;
        claims_from_token_info(info, &self.client_id, OffsetDateTime::now_utc())
    }
}
