use serde::{Deserialize, Serialize};

use crate::Distance;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeRecord {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub landmark: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EdgeRecord {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

/// Contents of a graph data file
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<NodeRecord>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl NodeRecord {
    pub fn new(id: &str, x: f64, y: f64, landmark: &str) -> Self {
        Self {
            id: id.to_string(),
            x,
            y,
            landmark: landmark.to_string(),
        }
    }
}

impl EdgeRecord {
    pub fn new(from: &str, to: &str, distance: Distance) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            distance,
        }
    }
}
