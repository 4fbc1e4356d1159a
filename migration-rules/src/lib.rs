//! Migration compatibility rules for business-network data models.
//!
//! Compares a "from" and a "to" version of a model and emits one
//! [`Verdict`] per finding. Rules are pure functions over read-only
//! snapshot views; they never mutate their inputs and keep no state
//! between calls.
//!
//! Two kinds of rule exist:
//! - per-class rules, run on one pair of classes matched by qualified name
//! - global rules, run once over the full lists of class names
//!
//! Both are enumerated in [`registry`] so an orchestrator can run "every
//! known rule" without naming them.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod error;
pub mod model;
pub mod registry;
pub mod rules;
pub mod verdict;

pub use error::{Result, RuleError};
pub use model::{ClassSnapshot, ClassView, PropertySnapshot, PropertyView};
pub use registry::{
    GlobalRule, PerClassRule, global_rule_names, per_class_rule_names, run_global_rule,
    run_per_class_rule,
};
pub use verdict::{Verdict, VerdictResult};
