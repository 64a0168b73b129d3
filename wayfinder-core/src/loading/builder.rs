use log::{info, warn};

use super::config::GraphSource;
use super::demo::demo_graph_data;
use super::parser::load_graph_data;
use super::records::GraphData;
use crate::{Error, model::NavigationGraph, routing::shortest_distances};

/// Creates the navigation graph described by the configured source
///
/// # Errors
///
/// Returns an error if the graph file cannot be read or describes an
/// invalid graph
pub fn create_navigation_graph(source: &GraphSource) -> Result<NavigationGraph, Error> {
    let data = match &source.graph_data_path {
        Some(path) => {
            validate_source(source)?;
            info!("Loading graph data: {}", path.display());
            load_graph_data(path)?
        }
        None => {
            info!("No graph data file configured, using demo building");
            demo_graph_data()
        }
    };

    build_graph(&data)
}

/// Builds a graph from records: all markers first, then walkways.
///
/// # Errors
///
/// Fails on the first walkway with an unknown endpoint or an invalid
/// distance.
pub fn build_graph(data: &GraphData) -> Result<NavigationGraph, Error> {
    let mut graph = NavigationGraph::new();

    for node in &data.nodes {
        if graph.contains(&node.id) {
            warn!("Marker {} defined more than once, keeping the last record", node.id);
        }
        graph.add_node(&node.id, node.x, node.y, &node.landmark);
    }

    for edge in &data.edges {
        graph.add_edge(&edge.from, &edge.to, edge.distance)?;
    }

    info!(
        "Navigation graph built with {} markers and {} walkways",
        graph.node_count(),
        graph.edge_count()
    );
    report_unreachable_markers(&graph);

    Ok(graph)
}

fn validate_source(source: &GraphSource) -> Result<(), Error> {
    if let Some(path) = &source.graph_data_path {
        if !path.exists() {
            return Err(Error::InvalidData(format!(
                "Graph data file not found: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Warns about markers that lie outside the walkway network of the first
/// marker; routes to them will always fail.
fn report_unreachable_markers(graph: &NavigationGraph) {
    let Some(first) = graph.nodes().next() else {
        return;
    };

    let reached = shortest_distances(graph, &first.id);
    let unreachable: Vec<&str> = graph
        .nodes()
        .filter(|node| !reached.contains_key(&node.id))
        .map(|node| node.id.as_str())
        .collect();

    if !unreachable.is_empty() {
        warn!(
            "{} of {} markers cannot be reached from {}: {}",
            unreachable.len(),
            graph.node_count(),
            first.id,
            unreachable.join(", ")
        );
    }
}
