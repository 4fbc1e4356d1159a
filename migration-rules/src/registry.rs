//! Rule registry
//!
//! Fixed tables of every known rule, keyed by canonical name. Iteration
//! order is declaration order so reports are reproducible.

use std::str::FromStr;

use crate::error::{Result, RuleError};
use crate::model::ClassView;
use crate::rules;
use crate::verdict::Verdict;

/// Rules run on a single class matched across both versions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum PerClassRule {
    ClassNotMadeAbstract,
    MustNotChangeCardinalityProperty,
    NewNotDefaultOptionalProperty,
    DeletingPropertyInstabilityRisk,
}

impl PerClassRule {
    /// All per-class rules in declaration order
    pub fn all() -> [Self; 4] {
        [
            Self::ClassNotMadeAbstract,
            Self::MustNotChangeCardinalityProperty,
            Self::NewNotDefaultOptionalProperty,
            Self::DeletingPropertyInstabilityRisk,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClassNotMadeAbstract => "class_not_made_abstract",
            Self::MustNotChangeCardinalityProperty => "must_not_change_cardinality_property",
            Self::NewNotDefaultOptionalProperty => "new_not_default_optional_property",
            Self::DeletingPropertyInstabilityRisk => "deleting_property_instability_risk",
        }
    }

    pub fn run<C: ClassView>(&self, from: &C, to: &C) -> Result<Vec<Verdict>> {
        let events = match self {
            Self::ClassNotMadeAbstract => rules::class_not_made_abstract(from, to)?,
            Self::MustNotChangeCardinalityProperty => {
                rules::must_not_change_cardinality_property(from, to)?
            }
            Self::NewNotDefaultOptionalProperty => {
                rules::new_not_default_optional_property(from, to)?
            }
            Self::DeletingPropertyInstabilityRisk => {
                rules::deleting_property_instability_risk(from, to)?
            }
        };

        tracing::trace!(
            rule = self.as_str(),
            class = from.qualified_name(),
            events = events.len(),
            "per-class rule evaluated"
        );
        Ok(events)
    }
}

impl FromStr for PerClassRule {
    type Err = RuleError;

    fn from_str(name: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|rule| rule.as_str() == name)
            .ok_or_else(|| RuleError::UnknownRule(name.to_string()))
    }
}

impl std::fmt::Display for PerClassRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rules run once over the class names of both versions.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum GlobalRule {
    FqnInBothLists,
}

impl GlobalRule {
    pub fn all() -> [Self; 1] {
        [Self::FqnInBothLists]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FqnInBothLists => "fqn_in_both_lists",
        }
    }

    pub fn run<S: AsRef<str>>(&self, from: &[S], to: &[S]) -> Result<Vec<Verdict>> {
        let events = match self {
            Self::FqnInBothLists => rules::fqn_in_both_lists(from, to)?,
        };

        tracing::trace!(
            rule = self.as_str(),
            events = events.len(),
            "global rule evaluated"
        );
        Ok(events)
    }
}

impl FromStr for GlobalRule {
    type Err = RuleError;

    fn from_str(name: &str) -> Result<Self> {
        Self::all()
            .into_iter()
            .find(|rule| rule.as_str() == name)
            .ok_or_else(|| RuleError::UnknownRule(name.to_string()))
    }
}

impl std::fmt::Display for GlobalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run the per-class rule registered under `name`.
pub fn run_per_class_rule<C: ClassView>(name: &str, from: &C, to: &C) -> Result<Vec<Verdict>> {
    name.parse::<PerClassRule>()?.run(from, to)
}

/// Run the global rule registered under `name`.
pub fn run_global_rule<S: AsRef<str>>(name: &str, from: &[S], to: &[S]) -> Result<Vec<Verdict>> {
    name.parse::<GlobalRule>()?.run(from, to)
}

pub fn per_class_rule_names() -> Vec<&'static str> {
    PerClassRule::all().iter().map(PerClassRule::as_str).collect()
}

pub fn global_rule_names() -> Vec<&'static str> {
    GlobalRule::all().iter().map(GlobalRule::as_str).collect()
}
