use crate::error::{Error, Result};

/// Validated set of operations available to the search.
///
/// Operations are stored sorted in ascending order with duplicates
/// removed, so iteration order (and therefore tie-breaking between
/// equal-length paths) is deterministic. Zero-valued operations are
/// rejected up front: they never change the current value and would
/// make the step ceiling derivation divide by zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSet {
    ops: Vec<i64>,
}

impl OptionSet {
    /// Build an operation set from raw values.
    pub fn new(ops: &[i64]) -> Result<Self> {
        if ops.is_empty() {
            return Err(Error::EmptyOptions);
        }
        if ops.contains(&0) {
            return Err(Error::ZeroOption);
        }

        let mut ops = ops.to_vec();
        ops.sort_unstable();
        ops.dedup();
        Ok(Self { ops })
    }

    /// Algebraically smallest operation in the set.
    pub fn min_op(&self) -> i64 {
        self.ops[0]
    }

    /// Algebraically largest operation in the set.
    pub fn max_op(&self) -> i64 {
        self.ops[self.ops.len() - 1]
    }

    /// Smallest absolute operation value. Always greater than zero.
    pub fn min_step_size(&self) -> u64 {
        self.ops
            .iter()
            .map(|op| op.unsigned_abs())
            .min()
            .unwrap_or(1)
    }

    /// Largest absolute operation value, i.e. `max(|min_op|, |max_op|)`.
    pub fn max_magnitude(&self) -> u64 {
        self.min_op().unsigned_abs().max(self.max_op().unsigned_abs())
    }

    /// Iterate the operations in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.ops.iter().copied()
    }

    /// Operations as a sorted slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.ops
    }

    /// Number of distinct operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the set is empty. Never true for a constructed set.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(OptionSet::new(&[]).unwrap_err(), Error::EmptyOptions);
    }

    #[test]
    fn zero_operation_is_rejected() {
        assert_eq!(OptionSet::new(&[2, 0, -3]).unwrap_err(), Error::ZeroOption);
    }

    #[test]
    fn operations_are_sorted_and_deduplicated() {
        let set = OptionSet::new(&[7, -3, 2, 7, -3]).unwrap();
        assert_eq!(set.as_slice(), &[-3, 2, 7]);
        assert_eq!(set.min_op(), -3);
        assert_eq!(set.max_op(), 7);
    }

    #[test]
    fn magnitudes_use_absolute_values() {
        let set = OptionSet::new(&[-15, -6, -5, -3, 2, 7, 13, 16]).unwrap();
        assert_eq!(set.min_step_size(), 2);
        assert_eq!(set.max_magnitude(), 16);
    }

    #[test]
    fn negative_only_set_magnitudes() {
        let set = OptionSet::new(&[-4, -9]).unwrap();
        assert_eq!(set.min_step_size(), 4);
        assert_eq!(set.max_magnitude(), 9);
    }
}
