//! Server configuration, read from a TOML file

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use wayfinder_core::GraphSource;

use crate::error::ServerError;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// Address the HTTP listener binds to
    pub bind: SocketAddr,
    /// JSON graph data file; the demo building is served when unset
    pub graph_data_path: Option<PathBuf>,
    /// Directory for uploaded floor plan images
    pub upload_dir: PathBuf,
    /// Accepted floor plan image extensions, lowercase without the dot
    pub allowed_extensions: Vec<String>,
    pub request_timeout_secs: u64,
    pub max_concurrent_requests: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            graph_data_path: None,
            upload_dir: PathBuf::from("uploads"),
            allowed_extensions: ["png", "jpg", "jpeg"].map(String::from).to_vec(),
            request_timeout_secs: 10,
            max_concurrent_requests: 256,
        }
    }
}

impl ServerConfig {
    /// Reads and validates a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid TOML for
    /// this config, or fails validation
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            std::io::Error::new(
                e.kind(),
                format!("Failed to read config '{}': {}", path.display(), e),
            )
        })?;
        let config = Self::from_toml_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ServerError> {
        Ok(toml::from_str(text)?)
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if self.request_timeout_secs == 0 {
            return Err(ServerError::InvalidConfig(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.max_concurrent_requests == 0 {
            return Err(ServerError::InvalidConfig(
                "max_concurrent_requests must be greater than zero".to_string(),
            ));
        }
        if self.allowed_extensions.is_empty() {
            return Err(ServerError::InvalidConfig(
                "allowed_extensions must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether a floor plan image with this file name may be uploaded
    pub fn allows_upload(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.allowed_extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }

    pub fn graph_source(&self) -> GraphSource {
        GraphSource {
            graph_data_path: self.graph_data_path.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
