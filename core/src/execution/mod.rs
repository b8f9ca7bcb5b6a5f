//! Trace representation and replay
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod replay;
pub mod trace;

pub use self::replay::{reconstruct, Dataset};
pub use self::trace::{count_kind, EdgeRef, Step, StepKind, Trace};
