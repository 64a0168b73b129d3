//! Navigation graph components - marker nodes, walkways and neighbor views

use geo::Point;

use crate::Distance;

/// Navigation graph node
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerNode {
    /// Scanned marker code
    pub id: String,
    /// Position on the floor plan
    pub geometry: Point<f64>,
    /// Human-readable name shown to visitors
    pub landmark: String,
}

impl MarkerNode {
    pub fn new(id: impl Into<String>, x: f64, y: f64, landmark: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            geometry: Point::new(x, y),
            landmark: landmark.into(),
        }
    }

    pub fn x(&self) -> f64 {
        self.geometry.x()
    }

    pub fn y(&self) -> f64 {
        self.geometry.y()
    }

    /// Case-insensitive comparison against a requested landmark name
    pub fn has_landmark(&self, name: &str) -> bool {
        self.landmark.to_lowercase() == name.to_lowercase()
    }
}

/// Navigation graph edge (walkable connection)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Walkway {
    /// Walking cost between both ends
    pub distance: Distance,
}

impl Walkway {
    pub fn walking_distance(&self) -> Distance {
        self.distance
    }
}

/// One side of a walkway, as seen from a marker
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub to: String,
    pub distance: Distance,
}
