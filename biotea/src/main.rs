use anyhow::Result;
use biotea::cli::Cli;
use biotea::{application, config, logging};
use clap::Parser;
use tracing::debug;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    debug!("Starting bioTEA.");

    let config = config::load(cli.config.as_deref())?;
    let outcome = application::run(cli.command, &config).await?;
    application::report(outcome);

    Ok(())
}
