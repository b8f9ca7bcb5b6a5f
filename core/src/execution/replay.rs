//! Trace reconstruction
//!
//! Materializes the dataset state at an arbitrary trace position by
//! replaying mutation steps onto a fresh copy of the initial dataset.
//! State is recomputed from scratch on every call: traces for the supported
//! input sizes stay within a few thousand steps, so no per-index cache is
//! kept.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use log::trace;
use serde::{Deserialize, Serialize};

use crate::data_structures::graph::Graph;
use crate::execution::trace::{Step, StepKind};

/// Input data of a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum Dataset {
    /// Flat integer sequence for the sort and search family
    Array(Vec<i64>),
    /// Weighted graph for the shortest-path family
    Graph(Graph),
}

impl Dataset {
    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            Self::Array(values) => Some(values),
            Self::Graph(_) => None,
        }
    }

    pub fn as_graph(&self) -> Option<&Graph> {
        match self {
            Self::Array(_) => None,
            Self::Graph(graph) => Some(graph),
        }
    }

    /// Element count or node count
    pub fn len(&self) -> usize {
        match self {
            Self::Array(values) => values.len(),
            Self::Graph(graph) => graph.node_count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<i64>> for Dataset {
    fn from(values: Vec<i64>) -> Self {
        Self::Array(values)
    }
}

impl From<Graph> for Dataset {
    fn from(graph: Graph) -> Self {
        Self::Graph(graph)
    }
}

/// Dataset state after replaying `trace[0..=upto]`
///
/// `None` stands for the position before the first step and yields an
/// unmodified copy of `initial`. Graph datasets are returned as-is: graph
/// traces carry no mutations.
pub fn reconstruct(initial: &Dataset, trace: &[Step], upto: Option<usize>) -> Dataset {
    match initial {
        Dataset::Array(values) => Dataset::Array(reconstruct_array(values, trace, upto)),
        Dataset::Graph(graph) => Dataset::Graph(graph.clone()),
    }
}

/// Array specialization of [`reconstruct`]
pub fn reconstruct_array(initial: &[i64], trace: &[Step], upto: Option<usize>) -> Vec<i64> {
    let mut values = initial.to_vec();
    let Some(upto) = upto else {
        return values;
    };
    for step in trace.iter().take(upto.saturating_add(1)) {
        apply_step(&mut values, step);
    }
    values
}

/// Apply one step in place; annotation steps are no-ops
pub fn apply_step(values: &mut [i64], step: &Step) {
    match step.kind {
        StepKind::Swap => {
            if let &[a, b, ..] = step.positions.as_slice() {
                if a < values.len() && b < values.len() {
                    values.swap(a, b);
                } else {
                    trace!("Ignoring swap outside dataset: {} <-> {}", a, b);
                }
            }
        }
        StepKind::Overwrite => {
            let (Some(&index), Some(value)) = (step.positions.first(), step.value) else {
                return;
            };
            if let Some(slot) = values.get_mut(index) {
                *slot = value;
            } else {
                trace!("Ignoring overwrite outside dataset at {}", index);
            }
        }
        _ => {}
    }
}
