use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use flatfs_core::PathPolicy;
use serde::Deserialize;
type Result<T> = anyhow::Result<T>;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "FLATFS_CONFIG";
/// Config file picked up from the working directory when present.
pub const DEFAULT_CONFIG_FILE: &str = "flatfs.toml";

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub path_policy: PathPolicy,
    #[serde(default)]
    pub serialize_writes: bool,
}

impl GatewayConfig {
    /// `FLATFS_CONFIG` first, then `flatfs.toml` if it exists, then defaults.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Self::from_file(path);
        }
        if Path::new(DEFAULT_CONFIG_FILE).is_file() {
            return Self::from_file(DEFAULT_CONFIG_FILE);
        }
        Ok(Self::default())
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to deserialize gateway config")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            host: default_host(),
            port: default_port(),
            path_policy: PathPolicy::default(),
            serialize_writes: false,
        }
    }
}

fn default_root() -> String {
    ".".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}
