//! Dijkstra single-source shortest path over an undirected weighted graph
//!
//! Node selection is a linear scan over the unvisited nodes in declaration
//! order, so ties go to the node declared first. Each settled node is
//! announced with a `visit` carrying its source path; reaching the
//! destination ends the trace with a `path` step.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::collections::{HashMap, HashSet};

use log::{debug, trace};

use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::data_structures::graph::{Graph, NodeId};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, StepKind, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl TraceGenerator for Dijkstra {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::Dijkstra
    }

    fn generate(&self, input: &Dataset, params: &AlgorithmParams) -> Trace {
        match input.as_graph() {
            Some(graph) => dijkstra(graph, params.source, params.destination),
            None => dijkstra(&Graph::default(), params.source, params.destination),
        }
    }
}

/// Trace of Dijkstra from `source`, stopping early at `destination` if given
///
/// Endpoints are not validated: ids missing from the graph simply never get
/// selected, and the trace ends in a completion `sorted` step.
pub fn dijkstra(graph: &Graph, source: NodeId, destination: Option<NodeId>) -> Trace {
    let mut steps = Vec::new();
    let mut distances: HashMap<NodeId, u64> = HashMap::with_capacity(graph.node_count());
    let mut parents: HashMap<NodeId, NodeId> = HashMap::new();
    let mut unvisited: HashSet<NodeId> = graph.node_ids().collect();

    if graph.contains_node(source) {
        distances.insert(source, 0);
        steps.push(Step::highlight(
            vec![source.as_usize()],
            format!("Initialize distances. Start node {source} is 0, others Infinity."),
        ));
    } else {
        debug!("shortest path source {source} is not in the graph");
        steps.push(Step::highlight(Vec::new(), format!("Start node {source} is not in the graph.")));
    }

    while let Some((current, distance)) = closest_unvisited(graph, &unvisited, &distances) {
        unvisited.remove(&current);

        let path = path_to(&parents, current);
        steps.push(
            Step::new(
                StepKind::Visit,
                vec![current.as_usize()],
                format!("Visit node {current} with current shortest distance {distance}."),
            )
            .with_value(to_value(distance))
            .with_path(path.clone()),
        );

        if destination == Some(current) {
            let route: Vec<String> = path.iter().map(ToString::to_string).collect();
            steps.push(
                Step::new(
                    StepKind::Path,
                    path.iter().map(|id| id.as_usize()).collect(),
                    format!("Shortest path to {current} found: {} (distance {distance}).", route.join(" -> ")),
                )
                .with_value(to_value(distance))
                .with_path(path),
            );
            return steps;
        }

        for edge in graph.edges_touching(current) {
            let neighbor = edge.other(current);
            if !unvisited.contains(&neighbor) {
                continue;
            }

            steps.push(
                Step::compare(
                    vec![current.as_usize(), neighbor.as_usize()],
                    format!("Check neighbor {neighbor} via edge weight {}.", edge.weight),
                )
                .with_edge(current, neighbor),
            );

            let alternative = distance + u64::from(edge.weight);
            let improves = distances.get(&neighbor).map_or(true, |&known| alternative < known);
            if improves {
                distances.insert(neighbor, alternative);
                parents.insert(neighbor, current);
                steps.push(
                    Step::new(
                        StepKind::Relax,
                        vec![neighbor.as_usize()],
                        format!("Update distance of node {neighbor} to {alternative}."),
                    )
                    .with_value(to_value(alternative))
                    .with_edge(current, neighbor),
                );
            }
        }
    }

    let description = match destination {
        Some(target) => {
            trace!("no path from {source} to {target}");
            format!("No path from {source} to {target}.")
        }
        None => "Dijkstra Algorithm Completed.".to_string(),
    };
    steps.push(Step::sorted(graph.node_ids().map(NodeId::as_usize).collect(), description));
    steps
}

/// Unvisited node with the smallest finite distance, first declared on ties
fn closest_unvisited(
    graph: &Graph,
    unvisited: &HashSet<NodeId>,
    distances: &HashMap<NodeId, u64>,
) -> Option<(NodeId, u64)> {
    let mut best: Option<(NodeId, u64)> = None;
    for id in graph.node_ids().filter(|id| unvisited.contains(id)) {
        if let Some(&distance) = distances.get(&id) {
            if best.map_or(true, |(_, known)| distance < known) {
                best = Some((id, distance));
            }
        }
    }
    best
}

/// Source-to-`node` path following parent pointers
fn path_to(parents: &HashMap<NodeId, NodeId>, node: NodeId) -> Vec<NodeId> {
    let mut path = vec![node];
    let mut current = node;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

fn to_value(distance: u64) -> i64 {
    i64::try_from(distance).unwrap_or(i64::MAX)
}
