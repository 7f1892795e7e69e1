use std::env;

const DEFAULT_DB_URL: &str = "repboard.db";
const DB_CONNECTION_POOL_SIZE: u32 = 10;

// Only used when REPBOARD_SECRET_KEY is unset. Sessions signed with it
// do not survive an operator setting a real key.
const INSECURE_DEFAULT_SECRET_KEY: &str =
    "8f9c1d2e3b4a5968778695a4b3c2d1e0f1e2d3c4b5a697887796a5b4c3d2e1f0";

#[derive(Debug, Clone)]
pub struct Cfg {
    pub db_url: String,
    pub db_connection_pool_size: u32,
    pub google_client_id: Option<String>,
    pub secret_key: String,
}

impl Cfg {
    pub fn from_env_or_default() -> Self {
        let mut cfg = Self::default();
        if let Ok(db_url) = env::var("DATABASE_URL") {
            cfg.db_url = db_url;
        }
        match env::var("GOOGLE_CLIENT_ID") {
            Ok(client_id) => {
                cfg.google_client_id = Some(client_id);
            }
            Err(_) => {
                log::warn!("No Google client id found, login will reject all tokens");
            }
        }
        match env::var("REPBOARD_SECRET_KEY") {
            Ok(key) => {
                cfg.secret_key = key;
            }
            Err(_) => {
                log::warn!("No secret key found, using an insecure default");
            }
        }
        cfg
    }
}

impl Default for Cfg {
    fn default() -> Self {
        Self {
            db_url: DEFAULT_DB_URL.to_string(),
            db_connection_pool_size: DB_CONNECTION_POOL_SIZE,
            google_client_id: None,
            secret_key: INSECURE_DEFAULT_SECRET_KEY.to_string(),
        }
    }
}
