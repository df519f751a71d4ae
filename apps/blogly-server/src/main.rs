//! # Blogly Server
//!
//! Actix-web entry point: loads configuration, connects to the database,
//! applies migrations and serves the JSON API.

use actix_web::{App, HttpServer, web};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod state;
mod telemetry;

use config::AppConfig;
use state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    telemetry::init_tracing(config.json_logs);

    tracing::info!("Starting Blogly server on {}:{}", config.host, config.port);

    let db = blogly_infra::connect(&config.database)
        .await
        .context("connecting to the database")?;

    if config.auto_migrate {
        Migrator::up(&db, None)
            .await
            .context("applying database migrations")?;
        tracing::info!("Database schema is up to date");
    }

    let state = AppState::new(db);

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
