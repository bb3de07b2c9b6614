//! docsum-cleanup - purge AI summary notes from the document service.
//!
//! Usage:
//!   docsum-cleanup all      delete summary notes across every document
//!   docsum-cleanup <id>     delete summary notes of one document

use std::env;

use tracing::info;

use docsum_cli::cleanup::{CleanupTarget, NoteCleanup};
use docsum_client::PaperlessClient;
use docsum_core::{EnvConfig, SummarizerConfig};

fn print_usage() {
    eprintln!("Usage: docsum-cleanup <all|document-id>");
    eprintln!();
    eprintln!("  all            delete AI summary notes across every document");
    eprintln!("  <document-id>  delete AI summary notes of one document");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    docsum_cli::init_tracing();

    // The argument is validated before configuration or any network call.
    let args: Vec<String> = env::args().skip(1).collect();
    let target = match CleanupTarget::parse(&args) {
        Ok(target) => target,
        Err(e) => {
            print_usage();
            return Err(e.into());
        }
    };

    let env_config = EnvConfig::from_env()?;
    let config = SummarizerConfig::from_env();

    let client = PaperlessClient::new(&env_config.base_url, &env_config.token);
    let deleted = NoteCleanup::new(&client, &config.marker).run(target).await?;

    info!(deleted, "docsum-cleanup finished");
    Ok(())
}
