use anyhow::Result;
use cotacao::{ClientConfig, client};
use log::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting client...");
    let config = ClientConfig::from_env()?;

    match client::run(&config).await {
        Ok(reply) => info!("Dollar: {}", reply.dollar),
        Err(err) => {
            error!("{err}");
            return Err(err.into());
        }
    }

    Ok(())
}
