use crate::config::ContainersConfig;
use crate::containers::RemoteTagSource;
use crate::error::BioteaError;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct TagsPage {
    results: Vec<TagEntry>,
}

#[derive(Debug, Deserialize)]
struct TagEntry {
    name: String,
}

/// Lists published tags through the Docker Hub repository API.
pub struct RegistryClient {
    client: reqwest::Client,
    url: String,
}

impl RegistryClient {
    pub fn new(config: &ContainersConfig) -> Result<Self, BioteaError> {
        let url = tags_url(&config.registry_url, &config.repository, config.page_size)?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| BioteaError::RegistryUnreachable {
                url: url.clone(),
                reason: format!("failed to build HTTP client: {err}"),
            })?;

        Ok(Self { client, url })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    fn unreachable(&self, reason: impl Into<String>) -> BioteaError {
        BioteaError::RegistryUnreachable {
            url: self.url.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl RemoteTagSource for RegistryClient {
    async fn list_remote_tags(&self) -> Result<Vec<String>, BioteaError> {
        debug!("GET {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|err| self.unreachable(format!("error sending request: {err}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(self.unreachable(format!("request failed: {status} {}", body.trim())));
        }

        let status = response.status();
        let page = response.json::<TagsPage>().await.map_err(|err| {
            self.unreachable(format!("failed to decode json response from {status}: {err}"))
        })?;

        Ok(page.results.into_iter().map(|entry| entry.name).collect())
    }
}

fn tags_url(base: &str, repository: &str, page_size: u32) -> Result<String, BioteaError> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(BioteaError::ArgumentValidation(
            "registry URL is empty".to_string(),
        ));
    }

    let repository = repository.trim().trim_matches('/');
    if repository.is_empty() {
        return Err(BioteaError::ArgumentValidation(
            "container repository is empty".to_string(),
        ));
    }

    Ok(format!(
        "{base}/v2/repositories/{repository}/tags?page_size={page_size}"
    ))
}
