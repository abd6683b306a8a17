//! Request bodies of the traverser endpoints

pub mod edge_step;
pub mod jaccard;

pub use edge_step::{EdgeStep, EdgeStepBuilder};
pub use jaccard::{JaccardSimilarityRequest, JaccardSimilarityRequestBuilder};

use crate::error::{HugeError, HugeResult};

/// Sentinel for "unbounded" in degree, capacity and limit parameters
pub const NO_LIMIT: i64 = -1;
pub const DEFAULT_CAPACITY: i64 = 10_000_000;
pub const DEFAULT_DEGREE: i64 = 10_000;

pub(crate) fn check_capacity(capacity: i64) -> HugeResult<()> {
    if capacity > 0 || capacity == NO_LIMIT {
        Ok(())
    } else {
        Err(HugeError::Client(format!(
            "The capacity must be > 0 or == -1, but got: {}",
            capacity
        )))
    }
}
