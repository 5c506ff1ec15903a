use eml_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> AppResult<()> {
    setup_logger();

    let client = Client::from_env()?;

    let status = client.get_status().await?;
    info!("\n{}", status);
    info!("Enabled: {:?}", status.enabled_integrations());

    if status.cache {
        let keys = client.get_cache_keys().await?;
        info!("{} cached analyses", keys.len());
        for key in &keys {
            info!("  {}", key);
        }
    }

    Ok(())
}
