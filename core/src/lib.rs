//! CHRONOS playback core
//!
//! Deterministic algorithm traces and the machinery to walk them. Every
//! supported algorithm turns an input dataset into an ordered list of
//! semantic [`Step`]s; any position in that list can be materialized into a
//! concrete dataset by replaying its mutation steps; and a
//! [`PlaybackController`] drives forward, backward and timed navigation over
//! the trace, emitting a [`Snapshot`] after every operation.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod execution;
pub mod temporal;

pub use crate::algorithm::{AlgorithmError, AlgorithmId, AlgorithmParams, TraceGenerator};
pub use crate::config::{ConfigError, PlaybackConfig};
pub use crate::data_structures::graph::{Graph, GraphEdge, GraphNode, NodeId};
pub use crate::execution::replay::{reconstruct, Dataset};
pub use crate::execution::trace::{EdgeRef, Step, StepKind, Trace};
pub use crate::temporal::playback::{PlaybackController, PlaybackError};
pub use crate::temporal::snapshot::{PathEndpoints, PlaybackState, Snapshot, StepStats};

/// Crate version, as reported by Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
