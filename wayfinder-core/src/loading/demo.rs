use super::records::{EdgeRecord, GraphData, NodeRecord};

/// Small demo building: an entrance, one junction and two destinations
/// (4 markers, 3 walkways).
pub fn demo_graph_data() -> GraphData {
    GraphData {
        nodes: vec![
            NodeRecord::new("entrance", 0.0, 0.0, "Main Entrance"),
            NodeRecord::new("hallway1", 10.0, 0.0, "Hallway Junction"),
            NodeRecord::new("cafeteria", 10.0, 15.0, "Cafeteria"),
            NodeRecord::new("elevator", 20.0, 0.0, "Elevator"),
        ],
        edges: vec![
            EdgeRecord::new("entrance", "hallway1", 10.0),
            EdgeRecord::new("hallway1", "cafeteria", 15.0),
            EdgeRecord::new("hallway1", "elevator", 10.0),
        ],
    }
}
