//! Sequential scan search

use log::trace;

use crate::algorithm::searching::missing_target;
use crate::algorithm::traits::{AlgorithmId, AlgorithmParams, TraceGenerator};
use crate::execution::replay::Dataset;
use crate::execution::trace::{Step, Trace};

#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl TraceGenerator for LinearSearch {
    fn id(&self) -> AlgorithmId {
        AlgorithmId::LinearSearch
    }

    fn generate(&self, input: &Dataset, params: &AlgorithmParams) -> Trace {
        let values = input.as_array().unwrap_or_default();
        match params.target {
            Some(target) => linear_search(values, target),
            None => {
                trace!("linear search started without a target");
                vec![missing_target()]
            }
        }
    }
}

/// Trace of a left-to-right scan for `target`
pub fn linear_search(values: &[i64], target: i64) -> Trace {
    let mut steps = Vec::with_capacity(values.len() + 1);

    for (i, &value) in values.iter().enumerate() {
        steps.push(Step::compare(vec![i], format!("Checking index {i}: Is {value} equal to {target}?")).at_line(2));

        if value == target {
            steps.push(Step::found(i, format!("Found target {target} at index {i}!")).at_line(3));
            return steps;
        }
    }

    steps.push(Step::highlight(Vec::new(), format!("Target {target} not found in the array.")).at_line(4));
    steps
}
