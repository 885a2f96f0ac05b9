use crate::config::GeoConfig;
use crate::error::BioteaError;
use crate::geo::SeriesSource;
use reqwest::StatusCode;
use tracing::debug;

const NOT_FOUND_NOTICE: &str = "Could not find";

/// Downloads the SOFT description of a series' samples from GEO.
pub struct GeoClient {
    client: reqwest::Client,
    base_url: String,
}

impl GeoClient {
    pub fn new(config: &GeoConfig) -> Result<Self, BioteaError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BioteaError::ArgumentValidation(
                "GEO base URL is empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| BioteaError::GeoUnreachable {
                url: base_url.clone(),
                reason: format!("failed to build HTTP client: {err}"),
            })?;

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn series_url(&self, accession: &str) -> String {
        format!(
            "{}/geo/query/acc.cgi?acc={accession}&targ=gsm&form=text&view=brief",
            self.base_url
        )
    }
}

#[async_trait::async_trait]
impl SeriesSource for GeoClient {
    async fn fetch_series(&self, accession: &str) -> Result<String, BioteaError> {
        let url = self.series_url(accession);
        let unreachable = |reason: String| BioteaError::GeoUnreachable {
            url: url.clone(),
            reason,
        };

        debug!("GET {url}");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| unreachable(format!("error sending request: {err}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(BioteaError::SeriesNotFound(accession.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(unreachable(format!("request failed: {status} {}", body.trim())));
        }

        let body = response
            .text()
            .await
            .map_err(|err| unreachable(format!("failed to read response body: {err}")))?;
        if reports_missing_series(&body) {
            return Err(BioteaError::SeriesNotFound(accession.to_string()));
        }

        Ok(body)
    }
}

/// GEO answers unknown accessions with a 200 notice page. Sample text may quote
/// the same phrase, so the notice only counts when no sample record came back.
fn reports_missing_series(body: &str) -> bool {
    !body.lines().any(|line| line.trim_start().starts_with("^SAMPLE")) && body.contains(NOT_FOUND_NOTICE)
}
