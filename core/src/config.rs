//! Playback configuration
//!
//! Defaults mirror the interactive visualizer: one step per second, twenty
//! random values in `[10, 99]`, and small graphs laid out on an 800×500
//! canvas. Every field is optional when loading from JSON.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid configuration value: {field} - {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Canvas and weighting parameters for synthetic graphs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphLayout {
    /// Canvas width in layout units
    pub width: f64,

    /// Canvas height in layout units
    pub height: f64,

    /// Keep-out band along every canvas border
    pub margin: f64,

    /// Minimum pairwise distance between placed nodes
    pub min_distance: f64,

    /// Placement attempts per node before the last sample is accepted
    pub max_attempts: u32,

    /// Upper bound of the inclusive `[1, max_weight]` edge weight range
    pub max_weight: u32,
}

impl Default for GraphLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin: 50.0,
            min_distance: 60.0,
            max_attempts: 100,
            max_weight: 20,
        }
    }
}

/// Session-wide playback settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Autoplay period in milliseconds
    pub default_speed_ms: u64,

    /// Length of generated random datasets
    pub dataset_size: usize,

    /// Smallest generated value
    pub value_min: i64,

    /// Largest generated value
    pub value_max: i64,

    /// Largest accepted numeric dataset
    pub max_elements: usize,

    /// Node count for freshly generated graphs
    pub default_graph_nodes: usize,

    /// Largest accepted graph node count
    pub max_graph_nodes: usize,

    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,

    pub graph: GraphLayout,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_speed_ms: 1000,
            dataset_size: 20,
            value_min: 10,
            value_max: 99,
            max_elements: 50,
            default_graph_nodes: 8,
            max_graph_nodes: 25,
            seed: None,
            graph: GraphLayout::default(),
        }
    }
}

impl PlaybackConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.default_speed_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "default_speed_ms",
                reason: "autoplay period must be positive".to_string(),
            });
        }
        if self.value_min > self.value_max {
            return Err(ConfigError::Invalid {
                field: "value_min",
                reason: format!("{} exceeds value_max {}", self.value_min, self.value_max),
            });
        }
        if self.dataset_size > self.max_elements {
            return Err(ConfigError::Invalid {
                field: "dataset_size",
                reason: format!("{} exceeds max_elements {}", self.dataset_size, self.max_elements),
            });
        }
        if self.default_graph_nodes > self.max_graph_nodes {
            return Err(ConfigError::Invalid {
                field: "default_graph_nodes",
                reason: format!(
                    "{} exceeds max_graph_nodes {}",
                    self.default_graph_nodes, self.max_graph_nodes
                ),
            });
        }
        if self.graph.max_weight == 0 {
            return Err(ConfigError::Invalid {
                field: "graph.max_weight",
                reason: "edge weights must be positive".to_string(),
            });
        }
        if self.graph.width <= 2.0 * self.graph.margin || self.graph.height <= 2.0 * self.graph.margin {
            return Err(ConfigError::Invalid {
                field: "graph.margin",
                reason: "margin leaves no drawable area".to_string(),
            });
        }
        Ok(())
    }
}
