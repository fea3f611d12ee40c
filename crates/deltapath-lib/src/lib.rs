//! Deltapath library entry points.
//!
//! This crate finds the shortest sequence of signed integer operations
//! that transforms a starting value into a target value, optionally
//! requiring the sequence to end with a fixed suffix of operations. It
//! exposes the validated operation set, the bounded breadth-first
//! search, a request/plan layer, and structured output summaries.
//! Higher-level consumers (the CLI) should only depend on the items
//! exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod bounds;
pub mod error;
pub mod options;
pub mod output;
pub mod planner;
pub mod search;

pub use bounds::SearchBounds;
pub use error::{Error, Result};
pub use options::OptionSet;
pub use output::{PathStep, PathSummary};
pub use planner::{plan_path, PathPlan, PathRequest, DEFAULT_OPTIONS};
pub use search::find_path;
