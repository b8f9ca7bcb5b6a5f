//! Heap sort over an implicit binary max heap

use crate::algorithm::sorting::{trivially_sorted, working_copy};
use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl TraceGenerator for HeapSort {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::HeapSort
    }

    fn generate(&self, input: &Dataset, _params: &AlgorithmParams) -> Trace {
        heap_sort(&working_copy(input))
    }
}

/// Trace of heap sort over `input`
pub fn heap_sort(input: &[i64]) -> Trace {
    let mut arr = input.to_vec();
    let n = arr.len();
    if n == 0 {
        return vec![trivially_sorted(0)];
    }

    let mut steps = vec![Step::highlight((0..n).collect(), "Building Max Heap").at_line(1)];

    for i in (0..n / 2).rev() {
        heapify(&mut arr, n, i, &mut steps);
    }

    for end in (1..n).rev() {
        arr.swap(0, end);
        let moved = format!("Moving max element {} to the end (position {end})", arr[end]);
        steps.push(Step::swap(0, end, moved).at_line(8));
        steps.push(Step::sorted(vec![end], format!("Element {} is now sorted", arr[end])).at_line(9));
        heapify(&mut arr, end, 0, &mut steps);
    }

    steps.push(Step::sorted(vec![0], format!("Last element {} is sorted", arr[0])).at_line(9));
    steps.push(Step::sorted((0..n).collect(), "Array is fully sorted").at_line(10));
    steps
}

/// Restores the max-heap property below `root` within the first `size` slots
fn heapify(arr: &mut [i64], size: usize, root: usize, steps: &mut Trace) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    let mut family = vec![root];
    family.extend([left, right].into_iter().filter(|&child| child < size));
    let children: Vec<String> = family[1..].iter().map(ToString::to_string).collect();
    let checking = format!("Heapify: Checking node {root} with children {}", children.join(" "));
    steps.push(Step::highlight(family, checking).at_line(2));

    if left < size {
        steps.push(
            Step::compare(
                vec![left, largest],
                format!("Comparing left child {} with current largest {}", arr[left], arr[largest]),
            )
            .at_line(3),
        );
        if arr[left] > arr[largest] {
            largest = left;
        }
    }

    if right < size {
        steps.push(
            Step::compare(
                vec![right, largest],
                format!("Comparing right child {} with current largest {}", arr[right], arr[largest]),
            )
            .at_line(4),
        );
        if arr[right] > arr[largest] {
            largest = right;
        }
    }

    if largest != root {
        arr.swap(root, largest);
        steps.push(
            Step::swap(
                root,
                largest,
                format!("Swapping {} and {} to maintain max-heap property", arr[root], arr[largest]),
            )
            .at_line(5),
        );
        heapify(arr, size, largest, steps);
    }
}
