//! Binary search over a sorted array
//!
//! The generator trusts its input to be sorted ascending; the playback
//! controller sorts the working dataset before tracing this algorithm.

use log::trace;

use crate::algorithm::searching::missing_target;
use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl TraceGenerator for BinarySearch {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::BinarySearch
    }

    fn generate(&self, input: &Dataset, params: &AlgorithmParams) -> Trace {
        let values = input.as_array().unwrap_or_default();
        match params.target {
            Some(target) => binary_search(values, target),
            None => {
                trace!("binary search started without a target");
                vec![missing_target()]
            }
        }
    }
}

/// Trace of an iterative binary search for `target` in sorted `values`
pub fn binary_search(values: &[i64], target: i64) -> Trace {
    let mut steps = Vec::new();

    if !values.is_empty() {
        // inclusive bounds
        let (mut low, mut high) = (0usize, values.len() - 1);

        while low <= high {
            let mid = low + (high - low) / 2;
            let candidate = values[mid];

            steps.push(
                Step::highlight(
                    vec![low, mid, high],
                    format!("Searching range [{low}, {high}]. Mid index: {mid}, Value: {candidate}"),
                )
                .at_line(2),
            );
            steps.push(Step::compare(vec![mid], format!("Comparing target {target} with {candidate}")).at_line(3));

            if candidate == target {
                steps.push(Step::found(mid, format!("Found target {target} at index {mid}!")).at_line(4));
                return steps;
            }

            if candidate < target {
                steps.push(
                    Step::highlight(vec![low, mid, high], format!("{candidate} < {target}, ignoring left half."))
                        .at_line(5),
                );
                low = mid + 1;
            } else {
                steps.push(
                    Step::highlight(vec![low, mid, high], format!("{candidate} > {target}, ignoring right half."))
                        .at_line(6),
                );
                match mid.checked_sub(1) {
                    Some(next) => high = next,
                    None => break,
                }
            }
        }
    }

    steps.push(Step::highlight(Vec::new(), format!("Target {target} not found.")).at_line(7));
    steps
}
