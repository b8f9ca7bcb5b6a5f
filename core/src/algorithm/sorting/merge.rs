//! Top-down merge sort
//!
//! Runs are merged through temporary copies and written back one element
//! at a time, each write emitted as an `overwrite` carrying its value.

use crate::algorithm::sorting::{trivially_sorted, working_copy};
use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl TraceGenerator for MergeSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::MergeSort
    }

    fn generate(&self, input: &Dataset, _params: &AlgorithmParams) -> Trace {
        merge_sort(&working_copy(input))
    }
}

/// Trace of merge sort over `input`
pub fn merge_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    if arr.is_empty() {
        return vec![trivially_sorted(0)];
    }

    let mut steps = Vec::new();
    let right = arr.len() - 1;
    sort_range(&mut arr, 0, right, &mut steps);

    for (i, value) in arr.iter().enumerate() {
        steps.push(Step::sorted(vec![i], format!("{value} is in sorted position")).at_line(0));
    }
    steps
}

fn sort_range(arr: &mut [i64], left: usize, right: usize, steps: &mut Trace) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    sort_range(arr, left, mid, steps);
    sort_range(arr, mid + 1, right, steps);
    merge(arr, left, mid, right, steps);
}

fn merge(arr: &mut [i64], left: usize, mid: usize, right: usize, steps: &mut Trace) {
    let left_run = arr[left..=mid].to_vec();
    let right_run = arr[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        steps.push(
            Step::compare(
                vec![left + i, mid + 1 + j],
                format!("Comparing {} and {}", left_run[i], right_run[j]),
            )
            .at_line(1),
        );

        if left_run[i] <= right_run[j] {
            arr[k] = left_run[i];
            steps.push(overwrite(k, left_run[i], 2));
            i += 1;
        } else {
            arr[k] = right_run[j];
            steps.push(overwrite(k, right_run[j], 3));
            j += 1;
        }
        k += 1;
    }

    for &value in &left_run[i..] {
        arr[k] = value;
        steps.push(overwrite(k, value, 4));
        k += 1;
    }

    for &value in &right_run[j..] {
        arr[k] = value;
        steps.push(overwrite(k, value, 5));
        k += 1;
    }
}

fn overwrite(index: usize, value: i64, line: u32) -> Step {
    Step::overwrite(index, value, format!("Overwrite index {index} with {value}")).at_line(line)
}
