//! Temporal navigation over algorithm traces
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod playback;
pub mod snapshot;
pub mod timer;

pub use self::playback::{PlaybackController, PlaybackError, SnapshotListener};
pub use self::snapshot::{PathEndpoints, PlaybackState, Snapshot, StepStats};
pub use self::timer::PlaybackTimer;
