//! docsum - synchronize AI-generated summaries into the document service.
//!
//! Behavior is fully environment-driven; see the variables resolved in
//! `docsum_core::config`.

use tracing::{info, warn};

use docsum_cli::writer::SummaryWriter;
use docsum_client::PaperlessClient;
use docsum_core::{EnvConfig, SummarizerConfig};
use docsum_inference::{OllamaBackend, StreamEcho};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    docsum_cli::init_tracing();

    let env = EnvConfig::from_env()?;
    let config = SummarizerConfig::from_env();

    let client = PaperlessClient::new(&env.base_url, &env.token);
    let backend = OllamaBackend::from_env(config.model.clone());

    if !backend.health_check().await? {
        warn!("Model server is unreachable, generation requests will fail");
    }

    let stats = SummaryWriter::new(&client, &backend, &env, &config)
        .with_echo(StreamEcho::Stdout)
        .run()
        .await?;

    info!(
        scanned = stats.scanned,
        summarized = stats.summarized,
        failed = stats.failed,
        "docsum finished"
    );
    Ok(())
}
