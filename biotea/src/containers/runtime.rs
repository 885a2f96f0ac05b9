use crate::config::ContainersConfig;
use crate::containers::LocalTagSource;
use crate::error::BioteaError;
use std::collections::BTreeSet;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tokio::time::timeout;
use tracing::debug;

/// Queries a docker-compatible CLI (`docker`, `podman`) for pulled tags.
#[derive(Debug, Clone)]
pub struct DockerRuntime {
    runtime: String,
    repository: String,
    timeout: Duration,
}

impl DockerRuntime {
    #[must_use]
    pub fn new(config: &ContainersConfig) -> Self {
        Self {
            runtime: config.runtime.clone(),
            repository: config.repository.clone(),
            timeout: config.timeout,
        }
    }

    fn unavailable(&self, reason: impl Into<String>) -> BioteaError {
        BioteaError::RuntimeUnavailable {
            runtime: self.runtime.clone(),
            reason: reason.into(),
        }
    }
}

#[async_trait::async_trait]
impl LocalTagSource for DockerRuntime {
    async fn list_local_tags(&self) -> Result<BTreeSet<String>, BioteaError> {
        let mut cmd = Command::new(&self.runtime);
        cmd.arg("images")
            .arg(&self.repository)
            .arg("--format")
            .arg("{{.Tag}}")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        debug!("running {} images {}", self.runtime, self.repository);
        let output = match timeout(self.timeout, cmd.output()).await {
            Ok(result) => {
                result.map_err(|err| self.unavailable(format!("failed to execute: {err}")))?
            }
            Err(_) => {
                return Err(self.unavailable(format!(
                    "no answer within {}s",
                    self.timeout.as_secs()
                )));
            }
        };

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.unavailable(format!(
                "`{} images` exited with {}: {}",
                self.runtime,
                output.status,
                stderr.trim()
            )));
        }

        Ok(parse_image_tags(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// One tag per line; dangling images show up as `<none>`.
fn parse_image_tags(stdout: &str) -> BTreeSet<String> {
    stdout
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != "<none>")
        .map(ToString::to_string)
        .collect()
}
