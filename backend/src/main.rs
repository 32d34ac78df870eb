mod config;
mod error;
mod provider;
mod services;
mod store;

use crate::config::Config;
use crate::provider::RecipeApi;
use crate::store::RecipeStore;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;

    let store = RecipeStore::open(&config.database_path).map_err(|e| {
        error!("Cannot open recipe store at {}: {}", config.database_path, e);
        io::Error::other(e)
    })?;
    let api = RecipeApi::from_config(&config).map_err(|e| {
        error!("Cannot build provider client: {}", e);
        io::Error::other(e)
    })?;

    let store = web::Data::new(store);
    let api = web::Data::new(api);
    let allowed_origin = config.allowed_origin.clone();

    info!(
        "Server running at http://{}:{} (provider {}, store {})",
        config.host, config.port, config.provider_base_url, config.database_path
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(services::cors(&allowed_origin))
            .app_data(store.clone())
            .app_data(api.clone())
            .configure(services::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
