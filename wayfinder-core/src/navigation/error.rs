use thiserror::Error;

/// Failures of the visitor-facing navigation queries.
///
/// The messages are shown to visitors as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("QR code {0} not found")]
    MarkerNotFound(String),
    #[error("Landmark {0} not found")]
    LandmarkNotFound(String),
    #[error("No path found from {start} to {landmark}")]
    NoRouteFound { start: String, landmark: String },
}
