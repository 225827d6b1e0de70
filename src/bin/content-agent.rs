use clap::Parser;
use content_agent::content::service::ContentService;
use content_agent::server;
use content_agent::utils::config_loader;
use content_agent::utils::logging;
use anyhow::Result;
use content_agent::utils::logging::LogLevel;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "content-agent.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config).await?;
    logging::run(&service_config, args.log_level);

    // -------------------------------
    // 2. Build content service (cms client or static pages)
    // -------------------------------

    let content = ContentService::from_config(&service_config.content)?;

    // -------------------------------
    // 3. Serve pages over http
    // -------------------------------

    info!("Service starting...");
    server::server::start(&service_config.settings, content).await
}
