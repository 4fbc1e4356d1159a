//! Migration checker
//!
//! Loads two model snapshots, matches their classes by qualified name, runs
//! every enabled rule from `migration_rules` and collects the verdicts into
//! a [`MigrationReport`].
//!
//! Parsing the modelling language and rendering the report for a terminal
//! are left to callers; snapshots arrive as JSON or are built in memory.

#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod checker;
pub mod config;
pub mod error;
pub mod report;
pub mod snapshot;

pub use checker::MigrationChecker;
pub use config::CheckerConfig;
pub use error::{CheckerError, Result};
pub use report::{MigrationReport, ReportSummary, RuleEvent};
pub use snapshot::{ModelSnapshot, match_classes};
