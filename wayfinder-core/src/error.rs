use thiserror::Error;

use crate::Distance;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown marker: {0}")]
    UnknownMarker(String),
    #[error("Invalid distance {distance} between {from} and {to}")]
    InvalidDistance {
        from: String,
        to: String,
        distance: Distance,
    },
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Invalid graph data file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
