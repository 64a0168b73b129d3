use std::path::PathBuf;

/// Where the navigation graph comes from at startup
#[derive(Debug, Clone, Default)]
pub struct GraphSource {
    /// JSON graph data file; the built-in demo building is used when unset
    pub graph_data_path: Option<PathBuf>,
}
