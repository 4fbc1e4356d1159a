//! Verdict events emitted by every rule.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single rule check.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictResult {
    /// The change is compatible.
    Success,
    /// The change breaks existing data.
    Failure,
    /// The change is allowed but risky.
    Warning,
}

impl VerdictResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Warning => "warning",
        }
    }
}

impl std::fmt::Display for VerdictResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform output of a rule invocation.
///
/// `data` identifies the subject of the check (a qualified name or a small
/// record) and is meant for reports only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub result: VerdictResult,
    pub data: Value,
}

impl Verdict {
    pub fn new(result: VerdictResult, data: impl Into<Value>) -> Self {
        Self {
            result,
            data: data.into(),
        }
    }

    /// `Failure` when `failed` holds, `Success` otherwise.
    pub fn check(failed: bool, data: impl Into<Value>) -> Self {
        let result = if failed {
            VerdictResult::Failure
        } else {
            VerdictResult::Success
        };
        Self::new(result, data)
    }

    pub fn warning(data: impl Into<Value>) -> Self {
        Self::new(VerdictResult::Warning, data)
    }

    pub fn is_failure(&self) -> bool {
        self.result == VerdictResult::Failure
    }

    pub fn is_warning(&self) -> bool {
        self.result == VerdictResult::Warning
    }

    pub fn is_success(&self) -> bool {
        self.result == VerdictResult::Success
    }
}
