use clap::Parser;

use courier_rs::cli::{self, Cli};
use courier_rs::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_settings(&cli)?;
    let logger_config = settings.logger.clone().into_logger_config()?;
    init_logger(&logger_config)?;

    tracing::debug!(
        name = %settings.application.name,
        version = %settings.application.version,
        "starting"
    );

    cli::execute().await?;

    Ok(())
}
