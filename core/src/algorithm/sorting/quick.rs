//! Quick sort with Lomuto partitioning
//!
//! The pivot is always the last element of the range. Swaps are emitted even
//! when both positions coincide so the trace mirrors the textbook loop.

use crate::algorithm::sorting::{trivially_sorted, working_copy};
use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl TraceGenerator for QuickSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::QuickSort
    }

    fn generate(&self, input: &Dataset, _params: &AlgorithmParams) -> Trace {
        quick_sort(&working_copy(input))
    }
}

/// Trace of Lomuto quick sort over `input`
pub fn quick_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    if arr.is_empty() {
        return vec![trivially_sorted(0)];
    }

    let mut steps = Vec::new();
    let high = arr.len() - 1;
    sort_range(&mut arr, 0, high, &mut steps);

    steps.push(Step::sorted((0..arr.len()).collect(), "Array is fully sorted").at_line(7));
    steps
}

/// Sorts the inclusive range `[low, high]`
fn sort_range(arr: &mut [i64], low: usize, high: usize, steps: &mut Trace) {
    if low == high {
        steps.push(Step::sorted(vec![low], format!("Element at {low} is sorted")).at_line(1));
        return;
    }
    if low > high {
        return;
    }

    steps.push(Step::highlight((low..=high).collect(), format!("Partitioning range [{low}, {high}]")).at_line(1));

    let pivot_index = partition(arr, low, high, steps);

    if pivot_index > low {
        sort_range(arr, low, pivot_index - 1, steps);
    }
    if pivot_index < high {
        sort_range(arr, pivot_index + 1, high, steps);
    }
}

/// Lomuto partition; returns the pivot's final index
fn partition(arr: &mut [i64], low: usize, high: usize, steps: &mut Trace) -> usize {
    let pivot = arr[high];
    steps.push(Step::highlight(vec![high], format!("Choosing pivot element: {pivot}")).at_line(1));

    // next slot for an element smaller than the pivot
    let mut store = low;

    for j in low..high {
        steps.push(Step::compare(vec![j, high], format!("Comparing {} with pivot {pivot}", arr[j])).at_line(3));

        if arr[j] < pivot {
            arr.swap(store, j);
            steps.push(Step::swap(store, j, format!("Swapping {} and {}", arr[store], arr[j])).at_line(4));
            store += 1;
        }
    }

    arr.swap(store, high);
    steps.push(Step::swap(store, high, format!("Placing pivot {pivot} at correct position {store}")).at_line(5));
    steps.push(Step::sorted(vec![store], format!("Pivot {pivot} is now at its sorted position")).at_line(6));

    store
}
