use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use super::records::GraphData;
use crate::Error;

/// Reads a JSON graph data file (`{"nodes": [...], "edges": [...]}`).
pub fn load_graph_data(path: &Path) -> Result<GraphData, Error> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("Failed to open file '{}': {}", path.display(), e),
        )
    })?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}
