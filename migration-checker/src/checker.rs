//! Rule orchestration
//!
//! For every class present in both snapshots, every enabled per-class rule
//! runs on the pair; every enabled global rule then runs once over the two
//! class name lists. Events are reported per pair in `from` order, then
//! global events.

use migration_rules::{ClassSnapshot, PerClassRule, Verdict};

use crate::config::CheckerConfig;
use crate::error::Result;
use crate::report::{MigrationReport, RuleEvent};
use crate::snapshot::{ModelSnapshot, match_classes};

#[derive(Debug, Clone, Default)]
pub struct MigrationChecker {
    config: CheckerConfig,
}

impl MigrationChecker {
    pub fn new(config: CheckerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckerConfig {
        &self.config
    }

    /// Run all enabled rules sequentially.
    pub fn check(&self, from: &ModelSnapshot, to: &ModelSnapshot) -> Result<MigrationReport> {
        let per_class = self.config.per_class_rules();
        let mut events = Vec::new();

        for (from_class, to_class) in match_classes(from, to) {
            events.extend(check_pair(&per_class, from_class, to_class)?);
        }
        events.extend(self.check_global(from, to)?);

        Ok(self.finish(events))
    }

    /// Run all enabled rules with one task per matched class pair.
    ///
    /// Produces the same report as [`MigrationChecker::check`]; results are
    /// collected in spawn order, not completion order.
    pub async fn check_concurrent(
        &self,
        from: &ModelSnapshot,
        to: &ModelSnapshot,
    ) -> Result<MigrationReport> {
        let per_class = self.config.per_class_rules();

        let handles: Vec<_> = match_classes(from, to)
            .into_iter()
            .map(|(from_class, to_class)| {
                let rules = per_class.clone();
                let from_class = from_class.clone();
                let to_class = to_class.clone();
                tokio::spawn(async move { check_pair(&rules, &from_class, &to_class) })
            })
            .collect();

        let mut events = Vec::new();
        for handle in handles {
            events.extend(handle.await??);
        }
        events.extend(self.check_global(from, to)?);

        Ok(self.finish(events))
    }

    fn check_global(&self, from: &ModelSnapshot, to: &ModelSnapshot) -> Result<Vec<RuleEvent>> {
        let from_names = from.class_names();
        let to_names = to.class_names();
        let mut events = Vec::new();

        for rule in self.config.global_rules() {
            events.extend(tag(rule.as_str(), rule.run(&from_names, &to_names)?));
        }
        Ok(events)
    }

    fn finish(&self, events: Vec<RuleEvent>) -> MigrationReport {
        let report = MigrationReport::new(events, self.config.warnings_as_failures);
        let summary = report.summary();

        tracing::info!(
            events = report.events.len(),
            failures = summary.failures,
            warnings = summary.warnings,
            "Migration check complete"
        );
        report
    }
}

fn check_pair(
    rules: &[PerClassRule],
    from: &ClassSnapshot,
    to: &ClassSnapshot,
) -> migration_rules::Result<Vec<RuleEvent>> {
    tracing::debug!(class = %from.qualified_name, rules = rules.len(), "Checking class pair");

    let mut events = Vec::new();
    for rule in rules {
        events.extend(tag(rule.as_str(), rule.run(from, to)?));
    }
    Ok(events)
}

fn tag(
    rule: &'static str,
    verdicts: Vec<Verdict>,
) -> impl Iterator<Item = RuleEvent> {
    verdicts
        .into_iter()
        .map(move |verdict| RuleEvent::new(rule, verdict))
}
