use trucky_api_client::TruckyClient;

// Quick connectivity check against the configured API (TRUCKY_API_URL, default https://api.truckyapp.com).
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let api = TruckyClient::from_env()?;
    tracing::info!("Querying {}", api.service_url());

    match api.servers().await {
        Some(_) => tracing::info!("servers loaded"),
        None => tracing::error!("servers request failed"),
    }

    match api.pois().await {
        Some(_) => tracing::info!("pois loaded"),
        None => tracing::error!("pois request failed"),
    }

    match api.resolve_vanity_url("dowmeister").await {
        Some(resp) => tracing::info!("vanity url resolved: {}", resp),
        None => tracing::error!("vanity url request failed"),
    }

    Ok(())
}
