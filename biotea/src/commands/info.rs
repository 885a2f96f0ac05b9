use crate::banner::TEA_LOGO;
use crate::commands::Outcome;
use crate::config::Config;
use crate::containers::{
    DockerRuntime, LocalTagSource, RegistryClient, RemoteTagSource, list_versions,
};
use crate::error::BioteaError;
use colored::Colorize;
use tracing::info;

pub fn logo() -> Outcome {
    println!("{TEA_LOGO}");
    Outcome::Done
}

pub fn biotea() -> Outcome {
    println!("{}", "--- BioTEA Info ---".bright_blue());
    println!("{}{}", "Version: ".bright_green(), env!("CARGO_PKG_VERSION"));
    Outcome::Done
}

pub async fn containers(config: &Config) -> Result<Outcome, BioteaError> {
    let registry = RegistryClient::new(&config.containers)?;
    let runtime = DockerRuntime::new(&config.containers);
    containers_with(&registry, &runtime).await
}

pub async fn containers_with(
    remote: &dyn RemoteTagSource,
    local: &dyn LocalTagSource,
) -> Result<Outcome, BioteaError> {
    info!("Getting container info...");
    let listing = list_versions(remote, local).await?;
    print!("{}", listing.render());
    Ok(Outcome::Done)
}
