//! Weighted graph dataset for shortest-path traces
//!
//! A deliberately plain representation: nodes carry a 2-D layout position
//! for the renderer, edges are undirected with strictly positive integer
//! weights. Node and edge order is significant, since traversal order feeds
//! tie-breaking in the shortest-path generator.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Node identifier ensuring type safety and preventing mixing with other numeric types
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub usize);

impl NodeId {
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 2D position on the layout canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance_to(&self, other: &Position) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Graph vertex with its layout coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
}

impl GraphNode {
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id: NodeId(id), x, y }
    }

    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Undirected weighted edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Always positive
    pub weight: u32,
}

impl GraphEdge {
    pub fn new(from: usize, to: usize, weight: u32) -> Self {
        Self {
            from: NodeId(from),
            to: NodeId(to),
            weight,
        }
    }

    #[inline]
    pub fn touches(&self, node: NodeId) -> bool {
        self.from == node || self.to == node
    }

    /// Endpoint opposite to `node`, assuming the edge touches it
    #[inline]
    pub fn other(&self, node: NodeId) -> NodeId {
        if self.from == node {
            self.to
        } else {
            self.from
        }
    }

    /// Whether this edge joins `a` and `b` in either direction
    #[inline]
    pub fn connects(&self, a: NodeId, b: NodeId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }
}

/// Graph dataset consumed by the shortest-path generator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn new(nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        Self { nodes, edges }
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids in declaration order
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.iter().any(|node| node.id == id)
    }

    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Whether an edge between `a` and `b` exists in either direction
    pub fn has_edge_between(&self, a: NodeId, b: NodeId) -> bool {
        self.edges.iter().any(|edge| edge.connects(a, b))
    }

    /// Edges incident to `node` in declaration order
    pub fn edges_touching(&self, node: NodeId) -> impl Iterator<Item = &GraphEdge> + '_ {
        self.edges.iter().filter(move |edge| edge.touches(node))
    }
}
