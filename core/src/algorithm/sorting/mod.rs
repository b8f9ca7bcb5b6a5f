//! Sorting trace generators
//!
//! Bubble, quick and heap sort mutate through `swap` steps; merge sort
//! writes merged runs back with `overwrite` steps. All four finish with
//! every index marked `sorted`.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod bubble;
pub mod heap;
pub mod merge;
pub mod quick;

pub use self::bubble::{bubble_sort, BubbleSort};
pub use self::heap::{heap_sort, HeapSort};
pub use self::merge::{merge_sort, MergeSort};
pub use self::quick::{quick_sort, QuickSort};

use crate::execution::replay::Dataset;
use crate::execution::trace::Step;

/// Private working copy of the numeric input; graph input sorts as empty
pub(crate) fn working_copy(input: &Dataset) -> Vec<i64> {
    input.as_array().map(<[i64]>::to_vec).unwrap_or_default()
}

/// Completion marker emitted for inputs with nothing to sort
pub(crate) fn trivially_sorted(len: usize) -> Step {
    if len == 0 {
        Step::sorted(Vec::new(), "Array is empty, nothing to sort")
    } else {
        Step::sorted((0..len).collect(), "Array is fully sorted")
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::execution::replay::reconstruct_array;
    use crate::execution::trace::{Step, StepKind};

    /// Replays the whole trace
    pub fn replay(input: &[i64], trace: &[Step]) -> Vec<i64> {
        reconstruct_array(input, trace, trace.len().checked_sub(1))
    }

    pub fn count(trace: &[Step], kind: StepKind) -> usize {
        trace.iter().filter(|step| step.kind == kind).count()
    }

    /// Every index of `0..len` is marked sorted at least once
    pub fn all_marked_sorted(trace: &[Step], len: usize) -> bool {
        (0..len).all(|i| {
            trace
                .iter()
                .any(|step| step.kind == StepKind::Sorted && step.positions.contains(&i))
        })
    }
}
