//! Synthetic dataset generation
//!
//! Random numeric arrays for the sort/search family and randomized weighted
//! graphs for the shortest-path algorithm. All generators take an explicit
//! RNG so sessions can be reproduced from a seed.

use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::config::GraphLayout;
use crate::data_structures::graph::{Graph, GraphEdge, GraphNode, NodeId, Position};

/// Default length of a generated numeric dataset
pub const DEFAULT_DATASET_SIZE: usize = 20;

/// Random values uniformly drawn from the inclusive `[min, max]` range
pub fn random_dataset_with<R: Rng + ?Sized>(rng: &mut R, size: usize, min: i64, max: i64) -> Vec<i64> {
    let (low, high) = if min <= max { (min, max) } else { (max, min) };
    (0..size).map(|_| rng.gen_range(low..=high)).collect()
}

/// `size` random values in `[10, 99]` from an entropy-seeded RNG
pub fn random_dataset(size: usize) -> Vec<i64> {
    random_dataset_with(&mut ChaCha20Rng::from_entropy(), size, 10, 99)
}

/// Random graph with `node_count` nodes and the default layout
pub fn generate_graph(node_count: usize) -> Graph {
    generate_graph_with(&mut ChaCha20Rng::from_entropy(), node_count, &GraphLayout::default())
}

/// Random graph built from `rng`
///
/// Nodes are reject-sampled so that no two lie closer than
/// `layout.min_distance`; after `layout.max_attempts` failed samples the
/// last one is kept, so near-overlap is possible but never fatal. A
/// backbone `i -> i+1` makes every node reachable from node 0, and each node
/// then gains at most one extra edge to a random distinct node not already
/// adjacent to it.
pub fn generate_graph_with<R: Rng + ?Sized>(rng: &mut R, node_count: usize, layout: &GraphLayout) -> Graph {
    let nodes = place_nodes(rng, node_count, layout);
    let max_weight = layout.max_weight.max(1);
    let mut edges: Vec<GraphEdge> = Vec::with_capacity(node_count.saturating_mul(2));

    for i in 1..node_count {
        edges.push(GraphEdge::new(i - 1, i, rng.gen_range(1..=max_weight)));
    }

    for i in 0..node_count {
        if !rng.gen_bool(0.5) {
            continue;
        }
        let target = rng.gen_range(0..node_count);
        if target == i {
            continue;
        }
        let exists = edges.iter().any(|edge| edge.connects(NodeId(i), NodeId(target)));
        if exists {
            continue;
        }
        edges.push(GraphEdge::new(i, target, rng.gen_range(1..=max_weight)));
    }

    debug!("Generated graph with {} nodes and {} edges", nodes.len(), edges.len());
    Graph::new(nodes, edges)
}

fn place_nodes<R: Rng + ?Sized>(rng: &mut R, node_count: usize, layout: &GraphLayout) -> Vec<GraphNode> {
    let mut placed: Vec<Position> = Vec::with_capacity(node_count);
    let attempts = layout.max_attempts.max(1);

    for id in 0..node_count {
        let mut candidate = sample_position(rng, layout);
        let mut tries = 1;
        while tries < attempts && too_close(&candidate, &placed, layout.min_distance) {
            candidate = sample_position(rng, layout);
            tries += 1;
        }
        if too_close(&candidate, &placed, layout.min_distance) {
            trace!("Node {} accepted after {} attempts without minimum spacing", id, tries);
        }
        placed.push(candidate);
    }

    placed
        .into_iter()
        .enumerate()
        .map(|(id, pos)| GraphNode::new(id, pos.x, pos.y))
        .collect()
}

fn sample_position<R: Rng + ?Sized>(rng: &mut R, layout: &GraphLayout) -> Position {
    Position::new(
        sample_axis(rng, layout.margin, layout.width - layout.margin),
        sample_axis(rng, layout.margin, layout.height - layout.margin),
    )
}

fn sample_axis<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low..high)
    } else {
        low
    }
}

fn too_close(candidate: &Position, placed: &[Position], min_distance: f64) -> bool {
    placed.iter().any(|other| candidate.distance_to(other) < min_distance)
}
