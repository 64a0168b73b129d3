//! This module is responsible for loading marker and walkway data
//! (JSON graph files or the built-in demo building) and building the
//! navigation graph.

mod builder;
mod config;
mod demo;
mod parser;
mod records;

pub use builder::{build_graph, create_navigation_graph};
pub use config::GraphSource;
pub use demo::demo_graph_data;
pub use parser::load_graph_data;
pub use records::{EdgeRecord, GraphData, NodeRecord};
