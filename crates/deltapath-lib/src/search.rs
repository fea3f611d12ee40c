use std::collections::{HashMap, VecDeque};

use tracing::debug;

use crate::bounds::SearchBounds;
use crate::error::Result;
use crate::options::OptionSet;

/// Frontier entry: a value reached so far, the operations taken to
/// reach it, and the steps remaining before the ceiling. Path length
/// plus remaining steps always equals the step ceiling.
#[derive(Debug, Clone)]
struct Node {
    value: i64,
    path: Vec<i64>,
    steps_left: usize,
}

/// Optimistic reachability bound: can `goal` still be reached from
/// `current` within `steps_left` unit-cost operations?
///
/// Necessary but not sufficient. Taking the extreme operation every
/// remaining step is the best any path can do, so a state this check
/// rejects has no completion; states it accepts may still fail.
/// Saturating products keep extreme inputs from overflowing, and
/// saturation only ever widens the bound.
fn can_reach(options: &OptionSet, goal: i64, current: i64, steps_left: usize) -> bool {
    if current == goal {
        return true;
    }
    let steps = steps_left as i64;
    if current < goal {
        options.max_op().saturating_mul(steps).saturating_add(current) >= goal
    } else {
        options.min_op().saturating_mul(steps).saturating_add(current) <= goal
    }
}

/// Find the shortest sequence of operations transforming `start` into
/// `target`, breadth-first within a derived step ceiling.
///
/// When `required_sequence` is given, the search solves for the
/// intermediate target obtained by undoing the trailing moves and
/// appends the sequence verbatim to the discovered prefix.
///
/// Returns `Ok(None)` when no path of length up to the ceiling exists;
/// errors only when the operation set is empty or contains zero.
/// Equal-length solutions tie-break by ascending operation order, so
/// identical inputs always produce identical paths.
pub fn find_path(
    start: i64,
    target: i64,
    options: &[i64],
    required_sequence: Option<&[i64]>,
) -> Result<Option<Vec<i64>>> {
    let options = OptionSet::new(options)?;

    // The shortcut fires on the original target only. A start already
    // at the intermediate target is not special-cased and goes through
    // the normal expansion loop.
    if start == target {
        return Ok(Some(Vec::new()));
    }

    let required = required_sequence.unwrap_or(&[]);
    let Some(bounds) = SearchBounds::derive(start, target, &options, required) else {
        debug!(start, target, "intermediate target out of range");
        return Ok(None);
    };
    let goal = bounds.goal;
    let max_magnitude = options.max_magnitude();

    debug!(
        start,
        target,
        goal,
        step_ceiling = bounds.step_ceiling,
        "derived search bounds"
    );

    let mut queue: VecDeque<Node> = VecDeque::new();
    let mut visited: HashMap<i64, usize> = HashMap::new();

    queue.push_back(Node {
        value: start,
        path: Vec::new(),
        steps_left: bounds.step_ceiling,
    });
    visited.insert(start, 0);

    while let Some(node) = queue.pop_front() {
        if !can_reach(&options, goal, node.value, node.steps_left) {
            continue;
        }

        // A dequeued node is stale only if a strictly shorter path to
        // its value was recorded after it was enqueued. The expansion
        // check below skips on shorter-or-equal instead; the asymmetry
        // is intentional and can cause redundant expansion.
        if visited
            .get(&node.value)
            .is_some_and(|&len| len < node.path.len())
        {
            continue;
        }

        for op in options.iter() {
            // A candidate outside the i64 range can never fold back to
            // the goal; treat it as infeasible.
            let Some(next_value) = node.value.checked_add(op) else {
                continue;
            };
            let next_len = node.path.len() + 1;

            if visited.get(&next_value).is_some_and(|&len| len <= next_len) {
                continue;
            }

            // Tighter admissible prune: one step has been spent, so
            // the remaining distance must be coverable by the largest
            // magnitude in steps_left - 1 moves.
            let distance = goal.abs_diff(next_value);
            let reach =
                (node.steps_left.saturating_sub(1) as u64).saturating_mul(max_magnitude);
            if distance > reach {
                continue;
            }

            if next_len > bounds.step_ceiling {
                continue;
            }

            let mut next_path = node.path.clone();
            next_path.push(op);

            if next_value == goal {
                next_path.extend_from_slice(required);
                return Ok(Some(next_path));
            }

            visited.insert(next_value, next_len);
            queue.push_back(Node {
                value: next_value,
                path: next_path,
                steps_left: node.steps_left - 1,
            });
        }
    }

    debug!(
        visited = visited.len(),
        "search exhausted without reaching goal"
    );
    Ok(None)
}
