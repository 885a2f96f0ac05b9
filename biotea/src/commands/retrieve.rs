use crate::commands::Outcome;
use crate::config::Config;
use crate::error::BioteaError;
use crate::geo::{self, GeoClient};
use std::path::Path;

pub async fn retrieve(
    config: &Config,
    output_path: &Path,
    geo_id: &str,
) -> Result<Outcome, BioteaError> {
    let client = GeoClient::new(&config.geo)?;
    let metadata = geo::retrieve(&client, geo_id, output_path).await?;
    println!(
        "Wrote metadata for {} samples of {} to {}",
        metadata.sample_count(),
        metadata.accession,
        output_path.join(geo::METADATA_FILE_NAME).display()
    );
    Ok(Outcome::Done)
}
