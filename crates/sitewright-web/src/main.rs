//! Server binary: reads configuration from the environment, wires up the
//! optional CMS client, and serves the site.

use sitewright_cms::{CmsClient, CmsConfig};
use sitewright_web::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    let cms = match std::env::var("CMS_BASE_URL") {
        Ok(base_url) => {
            let mut cms_config = CmsConfig::new(&base_url)?;
            if let Ok(token) = std::env::var("CMS_API_TOKEN") {
                cms_config = cms_config.with_token(token);
            }
            tracing::info!(%base_url, "CMS client configured");
            Some(CmsClient::new(cms_config)?)
        }
        Err(_) => {
            tracing::warn!("CMS_BASE_URL not set; content routes disabled");
            None
        }
    };

    let port = config.port;
    let state = AppState::with_config(config, cms);
    let app = sitewright_web::app(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(%port, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
