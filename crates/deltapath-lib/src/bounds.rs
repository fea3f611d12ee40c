use crate::options::OptionSet;

/// Hard cap on the number of steps any single search will consider.
/// Keeps far-apart start/target pairs with small operations from
/// blowing up the frontier; searches that need more steps report no
/// solution instead.
const STEP_CEILING_CAP: usize = 20;

/// Derived limits for one search invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchBounds {
    /// Maximum path length the explorer will consider.
    pub step_ceiling: usize,
    /// Value the explorer actually searches for: the target itself, or
    /// the intermediate target once a required trailing sequence has
    /// been subtracted out.
    pub goal: i64,
}

impl SearchBounds {
    /// Derive the step ceiling and search goal for a run.
    ///
    /// The initial estimate is the distance to the target divided by
    /// the smallest operation magnitude, i.e. the fewest steps any
    /// path could possibly take. The ceiling is twice that estimate,
    /// capped at [`STEP_CEILING_CAP`]; a required sequence of length
    /// `k` further caps it at `estimate + k` and shifts the goal to
    /// the intermediate target reached by undoing the trailing moves.
    ///
    /// Returns `None` when undoing the trailing moves leaves the
    /// `i64` range: no reachable value can equal such a goal, so the
    /// search has nothing to look for.
    pub fn derive(start: i64, target: i64, options: &OptionSet, required: &[i64]) -> Option<Self> {
        let estimate = (target.abs_diff(start) / options.min_step_size()) as usize;
        let mut step_ceiling = STEP_CEILING_CAP.min(estimate.saturating_mul(2));

        let mut goal = target;
        if !required.is_empty() {
            step_ceiling = step_ceiling.min(estimate.saturating_add(required.len()));
            // Walk the trailing sequence backwards, undoing each move.
            for &op in required.iter().rev() {
                goal = goal.checked_sub(op)?;
            }
        }

        Some(Self { step_ceiling, goal })
    }
}
