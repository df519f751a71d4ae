//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` and applies or reverts the Blogly schema,
//! e.g. `migration up`, `migration down`, `migration status`.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    tracing::info!("Running Blogly migrations");

    cli::run_cli(migration::Migrator).await;
}
