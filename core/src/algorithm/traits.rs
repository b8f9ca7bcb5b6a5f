//! Core algorithm trait definitions
//!
//! Every supported algorithm is a [`TraceGenerator`]: a pure function from an
//! input dataset and its parameters to a finite, ordered [`Trace`]. The
//! closed set of algorithms is named by [`AlgorithmId`], which also carries
//! the catalogue metadata consumers display next to the playback.
//!
//! # Key Design Principles
//! - Generators never fail; degenerate input yields a short informational trace
//! - Generators work on a private copy of the input
//! - Identical arguments always produce an identical trace

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::algorithm::path_finding::Dijkstra;
use crate::algorithm::searching::{BinarySearch, LinearSearch};
use crate::algorithm::sorting::{BubbleSort, HeapSort, MergeSort, QuickSort};
use crate::data_structures::graph::NodeId;
use crate::execution::replay::Dataset;
use crate::execution::trace::Trace;

/// Comprehensive error types for algorithm selection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgorithmError {
    #[error("Unknown algorithm identifier: {0}")]
    UnknownAlgorithm(String),
}

/// Family an algorithm belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmCategory {
    Sorting,
    Searching,
    PathFinding,
}

/// Closed set of supported algorithms
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmId {
    /// Exchange sort with early exit
    #[default]
    #[serde(rename = "exchange-sort")]
    BubbleSort,
    MergeSort,
    /// Lomuto partition sort
    #[serde(rename = "partition-sort")]
    QuickSort,
    HeapSort,
    LinearSearch,
    BinarySearch,
    /// Dijkstra single-source shortest path
    #[serde(rename = "shortest-path")]
    Dijkstra,
}

impl AlgorithmId {
    pub const ALL: [AlgorithmId; 7] = [
        Self::BubbleSort,
        Self::MergeSort,
        Self::QuickSort,
        Self::HeapSort,
        Self::LinearSearch,
        Self::BinarySearch,
        Self::Dijkstra,
    ];

    /// Canonical identifier used by external collaborators
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BubbleSort => "exchange-sort",
            Self::MergeSort => "merge-sort",
            Self::QuickSort => "partition-sort",
            Self::HeapSort => "heap-sort",
            Self::LinearSearch => "linear-search",
            Self::BinarySearch => "binary-search",
            Self::Dijkstra => "shortest-path",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::BubbleSort => "Bubble Sort",
            Self::MergeSort => "Merge Sort",
            Self::QuickSort => "Quick Sort",
            Self::HeapSort => "Heap Sort",
            Self::LinearSearch => "Linear Search",
            Self::BinarySearch => "Binary Search",
            Self::Dijkstra => "Dijkstra's Algorithm",
        }
    }

    /// One-paragraph description shown alongside the playback
    pub const fn summary(self) -> &'static str {
        match self {
            Self::BubbleSort => {
                "Bubble Sort repeatedly steps through the list, compares adjacent elements \
                 and swaps them if they are in the wrong order."
            }
            Self::MergeSort => {
                "Merge Sort divides the input array into two halves, sorts each half recursively, \
                 and then merges the two sorted halves."
            }
            Self::QuickSort => {
                "Quick Sort partitions the array around a pivot so smaller elements precede it, \
                 then sorts both partitions recursively."
            }
            Self::HeapSort => {
                "Heap Sort builds a max heap from the array and repeatedly moves the largest \
                 remaining element to the end."
            }
            Self::LinearSearch => "Linear Search checks every element in order until the target is found.",
            Self::BinarySearch => {
                "Binary Search halves a sorted search range at every step by comparing the \
                 target with the middle element."
            }
            Self::Dijkstra => {
                "Dijkstra's Algorithm settles nodes in order of their shortest known distance \
                 from the source, relaxing the edges of each settled node."
            }
        }
    }

    pub const fn category(self) -> AlgorithmCategory {
        match self {
            Self::BubbleSort | Self::MergeSort | Self::QuickSort | Self::HeapSort => AlgorithmCategory::Sorting,
            Self::LinearSearch | Self::BinarySearch => AlgorithmCategory::Searching,
            Self::Dijkstra => AlgorithmCategory::PathFinding,
        }
    }

    pub fn complexity(self) -> AlgorithmComplexity {
        let (time, space) = match self {
            Self::BubbleSort => ("O(N²)", "O(1)"),
            Self::MergeSort => ("O(N log N)", "O(N)"),
            Self::QuickSort => ("O(N log N)", "O(log N)"),
            Self::HeapSort => ("O(N log N)", "O(1)"),
            Self::LinearSearch => ("O(N)", "O(1)"),
            Self::BinarySearch => ("O(log N)", "O(1)"),
            Self::Dijkstra => ("O(V²)", "O(V)"),
        };
        AlgorithmComplexity {
            time_complexity: time.to_string(),
            space_complexity: space.to_string(),
        }
    }

    /// Whether the working dataset must be sorted before tracing
    #[inline]
    pub const fn requires_sorted_input(self) -> bool {
        matches!(self, Self::BinarySearch)
    }

    /// Whether the algorithm runs on the graph dataset
    #[inline]
    pub const fn uses_graph(self) -> bool {
        matches!(self, Self::Dijkstra)
    }

    /// Whether the algorithm consumes a search target
    #[inline]
    pub const fn uses_target(self) -> bool {
        matches!(self, Self::LinearSearch | Self::BinarySearch)
    }

    pub fn generator(self) -> &'static dyn TraceGenerator {
        match self {
            Self::BubbleSort => &BubbleSort,
            Self::MergeSort => &MergeSort,
            Self::QuickSort => &QuickSort,
            Self::HeapSort => &HeapSort,
            Self::LinearSearch => &LinearSearch,
            Self::BinarySearch => &BinarySearch,
            Self::Dijkstra => &Dijkstra,
        }
    }

    /// Shorthand for `self.generator().generate(..)`
    pub fn generate(self, input: &Dataset, params: &AlgorithmParams) -> Trace {
        self.generator().generate(input, params)
    }
}

impl Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AlgorithmId {
    type Err = AlgorithmError;

    /// Accepts the canonical kebab identifiers as well as the camelCase
    /// route names (`bubbleSort`, `quickSort`, `dijkstra`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = match s.trim() {
            "exchange-sort" | "bubble-sort" | "bubbleSort" => Self::BubbleSort,
            "merge-sort" | "mergeSort" => Self::MergeSort,
            "partition-sort" | "quick-sort" | "quickSort" => Self::QuickSort,
            "heap-sort" | "heapSort" => Self::HeapSort,
            "linear-search" | "linearSearch" => Self::LinearSearch,
            "binary-search" | "binarySearch" => Self::BinarySearch,
            "shortest-path" | "dijkstra" => Self::Dijkstra,
            other => return Err(AlgorithmError::UnknownAlgorithm(other.to_string())),
        };
        Ok(id)
    }
}

/// Algorithm complexity information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmComplexity {
    pub time_complexity: String,
    pub space_complexity: String,
}

/// Parameters of a single trace generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlgorithmParams {
    /// Value searched for by the search family
    pub target: Option<i64>,

    /// Shortest-path source node
    pub source: NodeId,

    /// Shortest-path destination; `None` settles every reachable node
    pub destination: Option<NodeId>,

    /// Node count for generated graphs; `None` defers to the session config
    pub graph_nodes: Option<usize>,
}

impl Default for AlgorithmParams {
    fn default() -> Self {
        Self {
            target: None,
            source: NodeId(0),
            destination: None,
            graph_nodes: None,
        }
    }
}

impl AlgorithmParams {
    pub fn with_target(target: i64) -> Self {
        Self {
            target: Some(target),
            ..Self::default()
        }
    }

    pub fn with_endpoints(source: NodeId, destination: Option<NodeId>) -> Self {
        Self {
            source,
            destination,
            ..Self::default()
        }
    }
}

/// Pure trace generator for one algorithm
///
/// # Invariants
/// - The caller's dataset is never modified
/// - Output is finite and deterministic for given inputs
/// - Replaying mutation steps reproduces the algorithm's result
pub trait TraceGenerator: Debug + Send + Sync {
    /// Returns the algorithm's identifier
    fn id(&self) -> AlgorithmId;

    /// Builds the complete trace for `input`
    fn generate(&self, input: &Dataset, params: &AlgorithmParams) -> Trace;
}
