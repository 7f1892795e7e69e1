use clap::Parser;

use rpb_gateways::google::GoogleIdentity;

mod cfg;

#[derive(Debug, Parser)]
#[command(version, about = "Reputation board with Google sign-in")]
struct Args {
    /// TCP port the web server listens on.
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Path of the SQLite database file (overrides DATABASE_URL).
    #[arg(long)]
    db_url: Option<String>,

    /// Allow cross-origin requests from anywhere.
    #[arg(long)]
    enable_cors: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    let mut cfg = cfg::Cfg::from_env_or_default();
    if let Some(db_url) = args.db_url {
        cfg.db_url = db_url;
    }

    log::info!("Opening SQLite database at {}", cfg.db_url);
    let connections =
        rpb_db_sqlite::Connections::init(&cfg.db_url, cfg.db_connection_pool_size)?;
    rpb_db_sqlite::run_embedded_database_migrations(connections.exclusive()?)?;

    let identity = GoogleIdentity::new(cfg.google_client_id.unwrap_or_default());

    rpb_webserver::run(
        connections,
        args.enable_cors,
        rpb_webserver::Cfg {
            port: args.port,
            secret_key: cfg.secret_key,
        },
        Box::new(identity),
    )
    .await;

    Ok(())
}
