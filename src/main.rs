use anyhow::Context;
use dotenv::dotenv;
use message_wall::config::Config;
use message_wall::store::MemoryStore;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_env().context("invalid configuration")?;

    match config.database_url.as_deref() {
        #[cfg(feature = "sqlite")]
        Some(url) => {
            let store = message_wall::store::SqliteStore::connect(url)
                .await
                .with_context(|| format!("failed to open database {url}"))?;
            log::info!("using sqlite store at {url}");
            message_wall::serve(&config, store).await?;
        }
        #[cfg(not(feature = "sqlite"))]
        Some(_) => {
            log::warn!("DATABASE_URL is set but sqlite support is not compiled in, using memory store");
            message_wall::serve(&config, MemoryStore::new()).await?;
        }
        None => {
            log::info!("using in-memory store");
            message_wall::serve(&config, MemoryStore::new()).await?;
        }
    }

    Ok(())
}
