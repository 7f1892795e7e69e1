use super::*;

#[post("/session_login", format = "application/json", data = "<credentials>")]
pub fn post_session_login(
    identity: &State<Identity>,
    cookies: &CookieJar<'_>,
    credentials: JsonResult<json::Credentials>,
) -> Result<json::LoginResponse> {
    let json::Credentials { id_token } = credentials?.into_inner();
    let profile = usecases::login_with_identity_token(&*identity.0, &id_token)?;
    let user = json::UserInfo::from(profile);
    cookies.add_private(Cookie::new(COOKIE_USER_KEY, serde_json::to_string(&user)?));
    Ok(Json(json::LoginResponse { ok: true, user }))
}

#[post("/logout")]
pub fn post_logout(cookies: &CookieJar<'_>) -> Json<json::OkResponse> {
    // Removing an absent session cookie is not an error.
    cookies.remove_private(COOKIE_USER_KEY);
    Json(json::OkResponse { ok: true })
}
