use catalog_viewer_lib::{init_tracing_subscriber, run, Cli};
use clap::Parser;
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env for RUST_LOG / CV_CONFIG during development
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if let Err(err) = init_tracing_subscriber() {
        eprintln!("Failed to initialize tracing: {err:#}");
    }

    if let Err(err) = run(cli).await {
        error!(error = %format!("{err:#}"), "Catalog viewer stopped");
        return Err(err);
    }
    Ok(())
}
