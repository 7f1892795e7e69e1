use rocket::{figment::Figment, Rocket, Route};

use rpb_core::gateways::identity::IdentityTokenGateway;
use rpb_db_sqlite::Connections;

pub mod api;
mod frontend;
mod guards;
mod sqlite;


#[derive(Debug, Clone)]
pub struct Cfg {
    pub port: u16,
    pub secret_key: String,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    figment: Option<Figment>,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
    identity: guards::Identity,
) -> Rocket<rocket::Build> {
    let InstanceOptions { mounts, figment } = options;

    let r = match figment {
        Some(figment) => rocket::custom(figment),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(identity);
    for (m, routes) in mounts {
        instance = instance.mount(m, routes);
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/", api::routes()), ("/", frontend::routes())]
}

pub async fn run(
    db: Connections,
    enable_cors: bool,
    cfg: Cfg,
    identity: Box<dyn IdentityTokenGateway + Send + Sync>,
) {
    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", cfg.port))
        .merge(("secret_key", cfg.secret_key));
    let options = InstanceOptions {
        mounts: mounts(),
        figment: Some(figment),
    };

    let instance = rocket_instance(options, db.into(), guards::Identity(identity));
    let server_task = if enable_cors {
        let cors = rocket_cors::CorsOptions::default().to_cors().unwrap();
        instance.attach(cors).launch()
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
