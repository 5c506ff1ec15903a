use eml_client::prelude::*;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample.eml".to_string());

    let client = Client::from_env()?;
    info!("Analyzing '{}' against {}", path, client.config().rest_api.base_url);

    let response = client.analyze_path(Path::new(&path)).await?;
    info!("\n{}", response);

    if response.is_malicious() {
        for verdict in response.malicious_verdicts() {
            info!("{} flagged the message: {}", verdict.name, verdict);
        }
    }

    // Round trip through the cache when the backend has it enabled
    let status = client.get_status().await?;
    if status.cache {
        let cached = client.lookup(&response.id).await?;
        info!("Cached analysis has {} verdicts", cached.verdicts.len());
    }

    if status.openai {
        if let Some(body) = response.eml.plaintext_body() {
            let reply = client
                .chatgpt(&response.eml.header, body, DEFAULT_CHAT_PROMPT, None)
                .await?;
            info!("Chat reply:\n{}", reply);
        }
    }

    Ok(())
}
