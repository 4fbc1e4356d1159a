//! Aggregated result of one checker run.

use migration_rules::{Verdict, VerdictResult};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A verdict tagged with the rule that produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RuleEvent {
    pub rule: String,
    #[serde(flatten)]
    pub verdict: Verdict,
}

impl RuleEvent {
    pub fn new(rule: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            rule: rule.into(),
            verdict,
        }
    }

    pub fn result(&self) -> VerdictResult {
        self.verdict.result
    }
}

/// Per-result counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub successes: usize,
    pub failures: usize,
    pub warnings: usize,
}

/// All events from one run, in evaluation order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MigrationReport {
    pub events: Vec<RuleEvent>,
    #[serde(default)]
    pub warnings_as_failures: bool,
}

impl MigrationReport {
    pub fn new(events: Vec<RuleEvent>, warnings_as_failures: bool) -> Self {
        Self {
            events,
            warnings_as_failures,
        }
    }

    pub fn events(&self) -> &[RuleEvent] {
        &self.events
    }

    pub fn failure_events(&self) -> Vec<&RuleEvent> {
        self.events_with(VerdictResult::Failure)
    }

    pub fn warning_events(&self) -> Vec<&RuleEvent> {
        self.events_with(VerdictResult::Warning)
    }

    pub fn success_events(&self) -> Vec<&RuleEvent> {
        self.events_with(VerdictResult::Success)
    }

    fn events_with(&self, result: VerdictResult) -> Vec<&RuleEvent> {
        self.events.iter().filter(|e| e.result() == result).collect()
    }

    pub fn has_failures(&self) -> bool {
        self.events.iter().any(|e| e.verdict.is_failure())
    }

    pub fn has_warnings(&self) -> bool {
        self.events.iter().any(|e| e.verdict.is_warning())
    }

    /// Process exit status a front end should report: 1 on any failure
    /// (or warning when `warnings_as_failures` is set), else 0.
    pub fn exit_code(&self) -> i32 {
        if self.has_failures() || (self.warnings_as_failures && self.has_warnings()) {
            1
        } else {
            0
        }
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for event in &self.events {
            match event.result() {
                VerdictResult::Success => summary.successes += 1,
                VerdictResult::Failure => summary.failures += 1,
                VerdictResult::Warning => summary.warnings += 1,
            }
        }
        summary
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
