//! Search trace generators
//!
//! Search traces are annotation-only: replaying them never alters the
//! dataset. Both generators end either in a `found` step or in a trailing
//! not-found `highlight` with empty positions.

pub mod binary;
pub mod linear;

pub use self::binary::{binary_search, BinarySearch};
pub use self::linear::{linear_search, LinearSearch};

use crate::execution::trace::Step;

/// Terminal step for a search that was started without a target
pub(crate) fn missing_target() -> Step {
    Step::highlight(Vec::new(), "No search target given, nothing to search for")
}
