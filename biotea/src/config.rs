use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_REGISTRY_URL: &str = "https://hub.docker.com";
pub const DEFAULT_REPOSITORY: &str = "cmalab/gattaca";
pub const DEFAULT_RUNTIME: &str = "docker";
pub const DEFAULT_PAGE_SIZE: u32 = 100;
pub const DEFAULT_GEO_URL: &str = "https://www.ncbi.nlm.nih.gov";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

const LOCAL_CONFIG_PATH: &str = ".biotea/config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML in {}: {source}", .path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("Config file not found: {0}")]
    NotFound(String),
    #[error("Invalid value for {name}: '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

/// On-disk shape of `config.toml`. Every field is optional so a local file
/// only needs to carry what it overrides.
///
/// ```toml
/// [containers]
/// registry_url = "https://hub.docker.com"
/// repository = "cmalab/gattaca"
/// runtime = "docker"
/// page_size = 100
/// timeout_secs = 10
///
/// [geo]
/// base_url = "https://www.ncbi.nlm.nih.gov"
/// timeout_secs = 10
/// ```
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub containers: ContainersFile,
    #[serde(default)]
    pub geo: GeoFile,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContainersFile {
    pub registry_url: Option<String>,
    pub repository: Option<String>,
    pub runtime: Option<String>,
    pub page_size: Option<u32>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeoFile {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub containers: ContainersConfig,
    pub geo: GeoConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainersConfig {
    pub registry_url: String,
    pub repository: String,
    pub runtime: String,
    pub page_size: u32,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            containers: ContainersConfig {
                registry_url: DEFAULT_REGISTRY_URL.to_string(),
                repository: DEFAULT_REPOSITORY.to_string(),
                runtime: DEFAULT_RUNTIME.to_string(),
                page_size: DEFAULT_PAGE_SIZE,
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
            geo: GeoConfig {
                base_url: DEFAULT_GEO_URL.to_string(),
                timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            },
        }
    }
}

impl ConfigFile {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_optional_file(path: &Path) -> Result<Self, ConfigError> {
        match Self::from_file(path) {
            Ok(file) => {
                debug!("loaded config from {}", path.display());
                Ok(file)
            }
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            Err(err) => Err(err),
        }
    }

    /// Field-by-field merge where `local` wins over `self`.
    #[must_use]
    pub fn merge(self, local: Self) -> Self {
        Self {
            containers: ContainersFile {
                registry_url: local.containers.registry_url.or(self.containers.registry_url),
                repository: local.containers.repository.or(self.containers.repository),
                runtime: local.containers.runtime.or(self.containers.runtime),
                page_size: local.containers.page_size.or(self.containers.page_size),
                timeout_secs: local
                    .containers
                    .timeout_secs
                    .or(self.containers.timeout_secs),
            },
            geo: GeoFile {
                base_url: local.geo.base_url.or(self.geo.base_url),
                timeout_secs: local.geo.timeout_secs.or(self.geo.timeout_secs),
            },
        }
    }

    /// Applies `BIOTEA_*` overrides, reading variables through `lookup`.
    pub fn apply_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("BIOTEA_REGISTRY_URL") {
            self.containers.registry_url = Some(url);
        }
        if let Some(repository) = lookup("BIOTEA_REPOSITORY") {
            self.containers.repository = Some(repository);
        }
        if let Some(runtime) = lookup("BIOTEA_RUNTIME") {
            self.containers.runtime = Some(runtime);
        }
        if let Some(url) = lookup("BIOTEA_GEO_URL") {
            self.geo.base_url = Some(url);
        }
        if let Some(raw) = lookup("BIOTEA_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or(ConfigError::InvalidValue {
                    name: "BIOTEA_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
            self.containers.timeout_secs = Some(secs);
            self.geo.timeout_secs = Some(secs);
        }
        Ok(self)
    }

    /// Fills in defaults. Zero timeouts and page sizes are rejected, whether
    /// they come from a file or from the environment.
    pub fn resolve(self) -> Result<Config, ConfigError> {
        Ok(Config {
            containers: ContainersConfig {
                registry_url: self
                    .containers
                    .registry_url
                    .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string()),
                repository: self
                    .containers
                    .repository
                    .unwrap_or_else(|| DEFAULT_REPOSITORY.to_string()),
                runtime: self
                    .containers
                    .runtime
                    .unwrap_or_else(|| DEFAULT_RUNTIME.to_string()),
                page_size: positive(
                    "containers.page_size",
                    self.containers.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
                )?,
                timeout: timeout_secs("containers.timeout_secs", self.containers.timeout_secs)?,
            },
            geo: GeoConfig {
                base_url: self
                    .geo
                    .base_url
                    .unwrap_or_else(|| DEFAULT_GEO_URL.to_string()),
                timeout: timeout_secs("geo.timeout_secs", self.geo.timeout_secs)?,
            },
        })
    }
}

fn positive<T>(name: &'static str, value: T) -> Result<T, ConfigError>
where
    T: Copy + Default + PartialEq + ToString,
{
    if value == T::default() {
        return Err(ConfigError::InvalidValue {
            name,
            value: value.to_string(),
        });
    }
    Ok(value)
}

fn timeout_secs(name: &'static str, secs: Option<u64>) -> Result<Duration, ConfigError> {
    positive(name, secs.unwrap_or(DEFAULT_TIMEOUT_SECS)).map(Duration::from_secs)
}

pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|home| PathBuf::from(home).join(".config/biotea/config.toml"))
}

/// Loads the effective configuration.
///
/// An explicit path is used alone and must exist. Otherwise the global file
/// is merged with `.biotea/config.toml`, and both may be absent. Environment
/// overrides are applied last.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match explicit {
        Some(path) => ConfigFile::from_file(path)?,
        None => {
            let global = match global_config_path() {
                Some(path) => ConfigFile::from_optional_file(&path)?,
                None => ConfigFile::default(),
            };
            let local = ConfigFile::from_optional_file(Path::new(LOCAL_CONFIG_PATH))?;
            global.merge(local)
        }
    };

    let file = file.apply_overrides(|key| {
        envmnt::exists(key).then(|| envmnt::get_or(key, ""))
    })?;

    file.resolve()
}
