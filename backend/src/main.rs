//! Backend entry-point: loads settings, prepares storage and serves the API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use roster::inbound::http::health::HealthState;
use roster::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use roster::settings::ServerSettings;
use server::{ServerConfig, create_server};

async fn connect(settings: &ServerSettings, url: &str) -> std::io::Result<DbPool> {
    if settings.run_migrations() {
        let owned = url.to_owned();
        tokio::task::spawn_blocking(move || run_migrations(&owned))
            .await
            .map_err(|err| std::io::Error::other(format!("migration task failed: {err}")))?
            .map_err(std::io::Error::other)?;
    }
    let config = PoolConfig::new(url).with_max_size(settings.pool_max_size());
    DbPool::new(config)
        .await
        .map_err(|err| std::io::Error::other(format!("database pool: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|err| std::io::Error::other(format!("invalid settings: {err}")))?;

    let mut config = ServerConfig::new(settings.bind_addr());
    if let Some(url) = settings.database_url() {
        config = config.with_db_pool(connect(&settings, url).await?);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, config)?;
    info!(addr = %settings.bind_addr(), "roster listening");
    server.await
}
