use std::fmt::Write;

use serde::Serialize;

use crate::planner::PathPlan;

/// Step taken while replaying a planned path.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PathStep {
    /// 1-based position within the path.
    pub index: usize,
    /// Signed operation applied at this step.
    pub delta: i64,
    /// Running total after applying the operation.
    pub total: i64,
}

/// Structured representation of a planned path that higher-level
/// consumers can serialise or render.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PathSummary {
    pub start: i64,
    pub target: i64,
    pub step_count: usize,
    pub steps: Vec<PathStep>,
}

impl PathSummary {
    /// Replay a [`PathPlan`] into per-step deltas and running totals.
    pub fn from_plan(plan: &PathPlan) -> Self {
        let mut total = plan.start;
        let steps = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &delta)| {
                total += delta;
                PathStep {
                    index: index + 1,
                    delta,
                    total,
                }
            })
            .collect::<Vec<_>>();

        Self {
            start: plan.start,
            target: plan.target,
            step_count: steps.len(),
            steps,
        }
    }

    /// Render the summary as a step-by-step text trace.
    pub fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Path found with {} steps:", self.step_count);
        let _ = writeln!(buffer, "Start: {}", self.start);
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "Step {}: {:+} -> {}",
                step.index, step.delta, step.total
            );
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(start: i64, target: i64, steps: Vec<i64>) -> PathPlan {
        PathPlan {
            start,
            target,
            steps,
        }
    }

    #[test]
    fn summary_replays_running_totals() {
        let summary = PathSummary::from_plan(&plan(3, 10, vec![2, 7, -2]));
        assert_eq!(summary.step_count, 3);
        assert_eq!(
            summary.steps,
            vec![
                PathStep {
                    index: 1,
                    delta: 2,
                    total: 5
                },
                PathStep {
                    index: 2,
                    delta: 7,
                    total: 12
                },
                PathStep {
                    index: 3,
                    delta: -2,
                    total: 10
                },
            ]
        );
    }

    #[test]
    fn plain_rendering_matches_trace_format() {
        let summary = PathSummary::from_plan(&plan(0, 9, vec![2, 7]));
        let rendered = summary.render_plain();
        assert_eq!(
            rendered,
            "Path found with 2 steps:\nStart: 0\nStep 1: +2 -> 2\nStep 2: +7 -> 9\n"
        );
    }

    #[test]
    fn empty_path_renders_start_only() {
        let summary = PathSummary::from_plan(&plan(5, 5, Vec::new()));
        assert_eq!(summary.render_plain(), "Path found with 0 steps:\nStart: 5\n");
    }
}
