//! GATTACA container versions: what the registry publishes and what the
//! local runtime has pulled.

pub mod reconcile;
pub mod registry;
pub mod runtime;

pub use reconcile::{ReconciledTag, reconcile, render_listing};
pub use registry::RegistryClient;
pub use runtime::DockerRuntime;

use crate::error::BioteaError;
use std::collections::BTreeSet;
use tracing::debug;

/// Published container tags, in the order the registry returns them.
#[async_trait::async_trait]
pub trait RemoteTagSource: Send + Sync {
    async fn list_remote_tags(&self) -> Result<Vec<String>, BioteaError>;
}

/// Container tags present in the local runtime.
#[async_trait::async_trait]
pub trait LocalTagSource: Send + Sync {
    async fn list_local_tags(&self) -> Result<BTreeSet<String>, BioteaError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionListing {
    pub installed: BTreeSet<String>,
    pub available: Vec<String>,
}

impl VersionListing {
    #[must_use]
    pub fn reconciled(&self) -> Vec<ReconciledTag> {
        reconcile(&self.installed, &self.available)
    }

    #[must_use]
    pub fn render(&self) -> String {
        render_listing(&self.installed, &self.reconciled())
    }
}

pub async fn list_versions(
    remote: &dyn RemoteTagSource,
    local: &dyn LocalTagSource,
) -> Result<VersionListing, BioteaError> {
    let installed = local.list_local_tags().await?;
    debug!("{} container tags installed locally", installed.len());
    let available = remote.list_remote_tags().await?;
    debug!("{} container tags published remotely", available.len());

    Ok(VersionListing {
        installed,
        available,
    })
}
