//! CHRONOS Algorithm Framework
//! Trace generators for the sorting, searching and shortest-path families
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod path_finding;
pub mod searching;
pub mod sorting;
pub mod traits;

pub use self::traits::*;
