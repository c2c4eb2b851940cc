use super::schema::ResolverConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

const LOCAL_CONFIG: &str = "pinpoint.yaml";
const HOME_CONFIG_DIR: &str = ".pinpoint";
const HOME_CONFIG_FILE: &str = "config.yaml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from `./pinpoint.yaml`, then `~/.pinpoint/config.yaml`, falling
    /// back to `ResolverConfig::default()`.
    pub async fn load_default() -> Result<ResolverConfig, ConfigError> {
        let paths = Self::search_paths(Path::new("."), dirs::home_dir().as_deref());
        Self::load_first(&paths).await
    }

    /// Candidate config files, most local first.
    pub fn search_paths(working_dir: &Path, home: Option<&Path>) -> Vec<PathBuf> {
        let mut paths = vec![working_dir.join(LOCAL_CONFIG)];
        if let Some(home) = home {
            paths.push(home.join(HOME_CONFIG_DIR).join(HOME_CONFIG_FILE));
        }
        paths
    }

    /// First existing file in `paths`; defaults when none exists.
    pub async fn load_first(paths: &[PathBuf]) -> Result<ResolverConfig, ConfigError> {
        match paths.iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(path).await,
            None => {
                debug!("No resolver config found, using defaults");
                Ok(ResolverConfig::default())
            }
        }
    }

    pub async fn load_from(path: &Path) -> Result<ResolverConfig, ConfigError> {
        debug!("Loading resolver config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<ResolverConfig, ConfigError> {
        let config: ResolverConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }
}
