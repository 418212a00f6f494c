use anyhow::Result;
use tracing::info;

use askyourmufti_gateway::{config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("askyourmufti_gateway=info".parse()?),
        )
        .init();

    info!("Starting locale gateway");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!(
        "Default locale: {}, preference cookie: {}, bypass prefixes: {:?}",
        config.default_locale, config.locale_cookie_name, config.bypass_prefixes
    );

    server::serve(&config).await
}
