use std::net::TcpListener;

use anyhow::{Context, Result};
use cotacao::{ServerConfig, server};
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::from_env()?;
    let listener = TcpListener::bind(&config.listen_addr)
        .with_context(|| format!("Can't bind {}", config.listen_addr))?;
    let state = server::AppState::new(&config)?;

    info!("Starting server on {}...", listener.local_addr()?);
    server::run(listener, state)?.await?;

    Ok(())
}
