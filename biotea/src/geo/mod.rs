//! GEO series retrieval.

pub mod client;
pub mod metadata;
pub mod soft;

pub use client::GeoClient;
pub use metadata::{METADATA_FILE_NAME, SeriesMetadata};

use crate::error::BioteaError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

static SERIES_ACCESSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^GSE\d+$").expect("valid accession pattern"));

/// Source of SOFT sample records for a series accession.
#[async_trait::async_trait]
pub trait SeriesSource: Send + Sync {
    async fn fetch_series(&self, accession: &str) -> Result<String, BioteaError>;
}

/// Normalizes a `GSE` accession to upper case.
pub fn validate_accession(series_id: &str) -> Result<String, BioteaError> {
    let trimmed = series_id.trim();
    if SERIES_ACCESSION.is_match(trimmed) {
        Ok(trimmed.to_ascii_uppercase())
    } else {
        Err(BioteaError::ArgumentValidation(format!(
            "'{series_id}' is not a GEO series accession (expected GSE followed by digits)"
        )))
    }
}

/// Fetches the sample metadata of `series_id` and writes it to
/// `<output_dir>/metadata.csv`.
pub async fn retrieve(
    source: &dyn SeriesSource,
    series_id: &str,
    output_dir: &Path,
) -> Result<SeriesMetadata, BioteaError> {
    let accession = validate_accession(series_id)?;

    info!("Retrieving data for {accession}...");
    let text = source.fetch_series(&accession).await?;
    let metadata = soft::parse_samples(&accession, &text)?;

    info!("Writing metadata...");
    let path = metadata.write_csv(output_dir)?;
    info!(
        "Done retrieving data for {accession}: {} samples written to {}.",
        metadata.sample_count(),
        path.display()
    );

    Ok(metadata)
}
