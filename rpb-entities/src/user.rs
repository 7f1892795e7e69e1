/// The verified identity of a logged-in user.
///
/// Created from the claims returned by the identity verifier and
/// kept in the session for the lifetime of the login.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub email   : String,
    pub name    : Option<String>,
    pub picture : Option<String>,
}
