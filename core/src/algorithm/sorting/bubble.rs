//! Exchange (bubble) sort with early exit

use crate::algorithm::sorting::{trivially_sorted, working_copy};
use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl TraceGenerator for BubbleSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BubbleSort
    }

    fn generate(&self, input: &Dataset, _params: &AlgorithmParams) -> Trace {
        bubble_sort(&working_copy(input))
    }
}

/// Trace of bubble sort over `input`
///
/// A pass without swaps proves the prefix sorted: the remaining indices are
/// marked in bulk and the trace ends early.
pub fn bubble_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    if n < 2 {
        return vec![trivially_sorted(n)];
    }

    let mut steps = Vec::new();
    let mut swapped = false;

    for i in 0..n - 1 {
        swapped = false;
        let tail = n - i - 1;

        for j in 0..tail {
            steps.push(Step::compare(vec![j, j + 1], format!("Comparing {} and {}", arr[j], arr[j + 1])).at_line(4));

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                swapped = true;
                steps.push(Step::swap(j, j + 1, format!("Swapped {} and {}", arr[j + 1], arr[j])).at_line(5));
            }
        }

        steps.push(Step::sorted(vec![tail], format!("{} is now in its sorted position", arr[tail])).at_line(1));

        if !swapped {
            for k in 0..tail {
                steps.push(Step::sorted(vec![k], format!("{} is sorted", arr[k])).at_line(7));
            }
            break;
        }
    }

    if swapped {
        steps.push(Step::sorted(vec![0], format!("{} is sorted", arr[0])).at_line(3));
    }

    steps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::sorting::testing::{all_marked_sorted, count, replay};
    use crate::execution::trace::StepKind;

    #[test]
    fn test_sorts_unsorted_input() {
        let input = [3, 1, 2];
        let trace = bubble_sort(&input);

        assert!(count(&trace, StepKind::Swap) > 0);
        assert_eq!(trace.last().map(|s| s.kind), Some(StepKind::Sorted));
        assert_eq!(replay(&input, &trace), vec![1, 2, 3]);
        assert!(all_marked_sorted(&trace, 3));
    }

    #[test]
    fn test_already_sorted_input_never_swaps() {
        let trace = bubble_sort(&[1, 2, 3, 4, 5]);
        assert_eq!(count(&trace, StepKind::Swap), 0);
        // one pass of four comparisons, then the early exit
        assert_eq!(count(&trace, StepKind::Compare), 4);
        assert_eq!(count(&trace, StepKind::Sorted), 5);
    }

    #[test]
    fn test_nearly_sorted_input_exits_early() {
        let nearly = bubble_sort(&[2, 1, 3, 4, 5, 6]);
        let reversed = bubble_sort(&[6, 5, 4, 3, 2, 1]);
        assert!(nearly.len() < reversed.len());
        assert_eq!(count(&nearly, StepKind::Compare), 5 + 4);
    }

    #[test]
    fn test_each_index_sorted_exactly_once() {
        for input in [vec![5, 4, 3, 2, 1], vec![1, 3, 2], vec![2, 2, 1, 1]] {
            let trace = bubble_sort(&input);
            for i in 0..input.len() {
                let marks = trace
                    .iter()
                    .filter(|s| s.kind == StepKind::Sorted && s.positions == vec![i])
                    .count();
                assert_eq!(marks, 1, "index {i} of {input:?}");
            }
        }
    }

    #[test]
    fn test_degenerate_inputs() {
        let empty = bubble_sort(&[]);
        assert_eq!(empty.len(), 1);
        assert!(empty[0].positions.is_empty());

        let single = bubble_sort(&[7]);
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].positions, vec![0]);
    }

    #[test]
    fn test_input_is_not_modified() {
        let input = Dataset::Array(vec![9, 8, 7]);
        let first = BubbleSort.generate(&input, &AlgorithmParams::default());
        let second = BubbleSort.generate(&input, &AlgorithmParams::default());
        assert_eq!(input, Dataset::Array(vec![9, 8, 7]));
        assert_eq!(first, second);
    }
}
