use serde::Serialize;

use crate::error::Result;
use crate::search::find_path;

/// Default operation set used when a request does not supply its own.
pub const DEFAULT_OPTIONS: [i64; 8] = [-15, -6, -5, -3, 2, 7, 13, 16];

/// High-level path search request.
#[derive(Debug, Clone)]
pub struct PathRequest {
    pub start: i64,
    pub target: i64,
    pub options: Vec<i64>,
    /// Operations that must end the path, in order. Empty means no
    /// trailing requirement.
    pub required: Vec<i64>,
}

impl PathRequest {
    /// Convenience constructor: search from zero with [`DEFAULT_OPTIONS`].
    pub fn new(target: i64) -> Self {
        Self {
            start: 0,
            target,
            options: DEFAULT_OPTIONS.to_vec(),
            required: Vec::new(),
        }
    }
}

/// Planned path returned by the library.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathPlan {
    pub start: i64,
    pub target: i64,
    pub steps: Vec<i64>,
}

impl PathPlan {
    /// Number of operations in the path.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Value reached after applying every operation to the start.
    ///
    /// Folds step by step rather than summing the operations first, so
    /// paths discovered by the search replay without overflow even
    /// when the raw operation sum would not fit in an `i64`.
    pub fn final_value(&self) -> i64 {
        self.steps.iter().fold(self.start, |value, op| value + op)
    }
}

/// Run the search described by `request` and wrap the outcome.
///
/// Returns `Ok(None)` when no path exists within the derived step
/// ceiling; errors only for an invalid operation set.
pub fn plan_path(request: &PathRequest) -> Result<Option<PathPlan>> {
    let required = (!request.required.is_empty()).then_some(request.required.as_slice());
    let steps = find_path(request.start, request.target, &request.options, required)?;

    Ok(steps.map(|steps| PathPlan {
        start: request.start,
        target: request.target,
        steps,
    }))
}
