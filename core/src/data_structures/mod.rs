//! Dataset structures and their synthetic generators
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod generator;
pub mod graph;

pub use self::generator::{generate_graph, generate_graph_with, random_dataset, random_dataset_with};
pub use self::graph::{Graph, GraphEdge, GraphNode, NodeId, Position};
