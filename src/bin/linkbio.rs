use anyhow::Result;
use linkbio::cli;
use rustls::crypto::ring;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    // Both rustls backends end up compiled in, so the process default has to
    // be picked explicitly before sqlx or the OTLP exporter open a connection.
    ring::default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("Failed to install rustls crypto provider"))?;

    let action = cli::start()?;

    action.execute().await?;

    // Flush any spans still buffered by the batch exporter.
    cli::telemetry::shutdown_tracer();

    Ok(())
}
