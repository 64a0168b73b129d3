use thiserror::Error;

/// Startup failures of the server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Failed to parse config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Failed to build navigation graph: {0}")]
    Graph(#[from] wayfinder_core::Error),
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
