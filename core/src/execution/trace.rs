//! Trace events emitted by algorithm generators
//!
//! A trace is the complete, ordered record of what an algorithm did to its
//! input. Each [`Step`] is one semantic event; only [`StepKind::Swap`] and
//! [`StepKind::Overwrite`] change data; everything else is annotation for
//! the consumer.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::data_structures::graph::NodeId;

/// Ordered, finite sequence of steps for one algorithm run
pub type Trace = Vec<Step>;

/// Semantic category of a trace step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Two elements (or a node and a neighbor) are compared
    Compare,
    /// Two positions exchange their values
    Swap,
    /// A single position receives a new value
    Overwrite,
    /// Positions of interest without any data change
    Highlight,
    /// Positions reached their final place
    Sorted,
    /// Search target located
    Found,
    /// Graph node settled by the shortest-path search
    Visit,
    /// Tentative distance of a node improved
    Relax,
    /// Final shortest path to the destination
    Path,
}

impl StepKind {
    /// Whether replaying this kind changes dataset state
    #[inline]
    pub const fn is_mutation(self) -> bool {
        matches!(self, Self::Swap | Self::Overwrite)
    }

    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compare => "compare",
            Self::Swap => "swap",
            Self::Overwrite => "overwrite",
            Self::Highlight => "highlight",
            Self::Sorted => "sorted",
            Self::Found => "found",
            Self::Visit => "visit",
            Self::Relax => "relax",
            Self::Path => "path",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed reference to a graph edge as traversed by the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeRef {
    pub from: NodeId,
    pub to: NodeId,
}

/// One observable event in an algorithm trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Event category
    pub kind: StepKind,

    /// Array indices or node ids involved, valid when the step was produced
    pub positions: Vec<usize>,

    /// Human-readable narration
    pub description: String,

    /// Pseudocode line the step corresponds to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_line: Option<u32>,

    /// Written value for overwrites, distance for graph steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<i64>,

    /// Edge under consideration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edge: Option<EdgeRef>,

    /// Source-to-node path carried by `visit` and `path` steps
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<NodeId>>,
}

impl Step {
    pub fn new(kind: StepKind, positions: Vec<usize>, description: impl Into<String>) -> Self {
        Self {
            kind,
            positions,
            description: description.into(),
            code_line: None,
            value: None,
            edge: None,
            path: None,
        }
    }

    pub fn compare(positions: Vec<usize>, description: impl Into<String>) -> Self {
        Self::new(StepKind::Compare, positions, description)
    }

    pub fn swap(a: usize, b: usize, description: impl Into<String>) -> Self {
        Self::new(StepKind::Swap, vec![a, b], description)
    }

    pub fn overwrite(index: usize, value: i64, description: impl Into<String>) -> Self {
        Self::new(StepKind::Overwrite, vec![index], description).with_value(value)
    }

    pub fn highlight(positions: Vec<usize>, description: impl Into<String>) -> Self {
        Self::new(StepKind::Highlight, positions, description)
    }

    pub fn sorted(positions: Vec<usize>, description: impl Into<String>) -> Self {
        Self::new(StepKind::Sorted, positions, description)
    }

    pub fn found(index: usize, description: impl Into<String>) -> Self {
        Self::new(StepKind::Found, vec![index], description)
    }

    /// Attach the pseudocode line
    #[must_use]
    pub fn at_line(mut self, line: u32) -> Self {
        self.code_line = Some(line);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn with_edge(mut self, from: NodeId, to: NodeId) -> Self {
        self.edge = Some(EdgeRef { from, to });
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: Vec<NodeId>) -> Self {
        self.path = Some(path);
        self
    }

    #[inline]
    pub fn is_mutation(&self) -> bool {
        self.kind.is_mutation()
    }
}

/// Number of steps of `kind` among the first `len` steps of `trace`
pub fn count_kind(trace: &[Step], kind: StepKind, len: usize) -> usize {
    trace.iter().take(len).filter(|step| step.kind == kind).count()
}
