use actix_web::{middleware::Logger, web, App, HttpServer};

pub mod config;
#[cfg(feature = "sqlite")]
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod store;
pub mod validate;

use config::Config;
use store::MessageStore;

/// Serves the message API on `config.host:config.port` until shutdown.
/// `store` is shared by every worker.
pub async fn serve<S>(config: &Config, store: S) -> std::io::Result<()>
where
    S: MessageStore + Send + Sync + 'static,
{
    let store = web::Data::new(store);
    log::info!("listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(store.clone())
            .configure(handlers::configure::<S>)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
