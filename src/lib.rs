pub mod agent;
pub mod animation;
pub mod cli;
pub mod llm;
pub mod models;
pub mod palette;
pub mod prompt;
pub mod server;

use agent::PaletteAgent;
use cli::Args;
use log::info;
use server::Server;
use std::error::Error;
use std::sync::Arc;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("HTTP Port: {}", args.http_port);
    info!("TLS Enabled: {}", args.enable_tls);
    info!("Completion Model: {}", args.ai_model);
    info!("Completion Base URL: {}", args.ai_base_url);
    info!("Completion Timeout: {}s", args.ai_timeout_secs);
    info!("Completion Configured: {}", llm::is_configured(&args.ai_api_key));
    info!("-------------------------");

    let agent = Arc::new(PaletteAgent::new(&args)?);
    let server = Server::new(agent, args);
    server.run().await?;

    Ok(())
}
