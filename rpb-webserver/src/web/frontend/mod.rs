use rocket::{get, http::ContentType, routes, Route};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Assets;

pub fn routes() -> Vec<Route> {
    routes![get_index]
}

#[get("/")]
fn get_index() -> Option<(ContentType, Vec<u8>)> {
    let asset = Assets::get("index.html")?;
    Some((ContentType::HTML, asset.data.into_owned()))
}
