use anyhow::Context;
use clap::Parser;

use mockapi::cli::Args;
use mockapi::logging::init_tracing;
use mockapi::server::ApiServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = args.load_config().context("failed to load configuration")?;
    tracing::debug!(?config, "Effective configuration");

    let mut server = ApiServer::new(&config)?;
    let addr = server
        .bind()
        .await
        .with_context(|| format!("failed to bind {}", server.addr))?;
    tracing::info!("Listening on http://{}", addr);

    server.run().await.context("server error")?;
    Ok(())
}
