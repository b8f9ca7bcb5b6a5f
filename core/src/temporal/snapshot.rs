//! Playback snapshots
//!
//! A [`Snapshot`] is the complete, read-only view of a playback session at
//! one instant. The controller hands out a fresh one after every operation;
//! consumers replace whatever they rendered before and never patch it.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::algorithm::traits::AlgorithmId;
use crate::data_structures::graph::{Graph, NodeId};
use crate::execution::replay::Dataset;
use crate::execution::trace::{count_kind, Step, StepKind};

/// Observable state of the playback state machine
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackState {
    /// Positioned before the first step
    #[default]
    Idle,
    /// Positioned on a step, timer stopped
    Paused,
    /// Timer running
    Playing,
    /// Positioned on the last step, timer stopped
    Finished,
}

impl PlaybackState {
    /// State implied by a pointer position over a trace of `len` steps
    pub fn derive(pointer: Option<usize>, len: usize, playing: bool) -> Self {
        if playing {
            return Self::Playing;
        }
        match pointer {
            None => Self::Idle,
            Some(index) if index + 1 == len => Self::Finished,
            Some(_) => Self::Paused,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Paused => "paused",
            Self::Playing => "playing",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for PlaybackState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running operation counts over the steps taken so far
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepStats {
    /// `compare` steps up to and including the pointer
    pub comparisons: usize,

    /// `swap` steps up to and including the pointer
    pub swaps: usize,

    /// `overwrite` steps up to and including the pointer
    pub overwrites: usize,

    /// Steps taken so far
    pub steps_taken: usize,

    /// Length of the whole trace
    pub total_steps: usize,
}

impl StepStats {
    /// Counts over `trace[0..=pointer]`
    pub fn upto(trace: &[Step], pointer: Option<usize>) -> Self {
        let taken = pointer.map_or(0, |index| (index + 1).min(trace.len()));
        Self {
            comparisons: count_kind(trace, StepKind::Compare, taken),
            swaps: count_kind(trace, StepKind::Swap, taken),
            overwrites: count_kind(trace, StepKind::Overwrite, taken),
            steps_taken: taken,
            total_steps: trace.len(),
        }
    }
}

/// Source and destination handed to the shortest-path algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEndpoints {
    pub source: NodeId,
    pub destination: Option<NodeId>,
}

/// Full view of a playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Algorithm the trace belongs to
    pub algorithm: AlgorithmId,

    /// Dataset reconstructed at the pointer
    pub dataset: Dataset,

    /// Complete trace of the current run, shared between snapshots of the
    /// same run
    pub trace: Arc<[Step]>,

    /// Index of the last applied step; `None` before the first one
    pub pointer: Option<usize>,

    pub state: PlaybackState,

    pub playing: bool,

    /// Autoplay period in milliseconds
    pub speed_ms: u64,

    /// Whether the pointer sits on the last step
    pub finished: bool,

    /// Step under the pointer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_step: Option<Step>,

    /// Target the search family is looking for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_target: Option<i64>,

    /// Endpoints of the shortest-path run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_endpoints: Option<PathEndpoints>,

    pub stats: StepStats,
}

impl Snapshot {
    /// Current array state, if the session runs on numbers
    pub fn array(&self) -> Option<&[i64]> {
        self.dataset.as_array()
    }

    /// Current graph, if the session runs the shortest-path algorithm
    pub fn graph(&self) -> Option<&Graph> {
        self.dataset.as_graph()
    }

    #[inline]
    pub fn step_count(&self) -> usize {
        self.trace.len()
    }

    /// Pretty-printed JSON export
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// JSON export of the trace alone
    pub fn trace_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.trace)
    }
}
