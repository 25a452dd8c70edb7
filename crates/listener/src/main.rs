use clap::Parser;
use eyre::Result;
use tracing::info;
use webhook_listener::{cli::Cli, logging::init_tracing, webhook::start_webhook_server};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    init_tracing(config.log_format)?;

    info!(
        addr = %config.socket_addr(),
        max_body_bytes = ?config.max_body_bytes,
        expose_fault_details = config.expose_fault_details,
        "Starting webhook listener"
    );

    start_webhook_server(config).await?;

    info!("Webhook listener shutdown complete");
    Ok(())
}
