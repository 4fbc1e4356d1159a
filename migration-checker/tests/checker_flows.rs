//! End-to-end checker runs over JSON snapshots.

use std::io::Write;

use migration_checker::{
    CheckerConfig, MigrationChecker, ModelSnapshot, ReportSummary, RuleEvent,
};
use migration_rules::VerdictResult;
use pretty_assertions::assert_eq;
use serde_json::json;

const FROM_JSON: &str = r#"{
    "classes": [
        {
            "qualified_name": "org.acme.vehicle.Vehicle",
            "properties": [
                { "name": "vin", "qualified_name": "org.acme.vehicle.Vehicle.vin" },
                { "name": "owner", "qualified_name": "org.acme.vehicle.Vehicle.owner" },
                { "name": "notes", "qualified_name": "org.acme.vehicle.Vehicle.notes", "is_optional": true }
            ]
        },
        {
            "qualified_name": "org.acme.vehicle.Driver",
            "properties": [
                { "name": "licence", "qualified_name": "org.acme.vehicle.Driver.licence" }
            ]
        },
        { "qualified_name": "org.acme.vehicle.Garage" }
    ]
}"#;

const TO_JSON: &str = r#"{
    "classes": [
        {
            "qualified_name": "org.acme.vehicle.Driver",
            "is_abstract": true,
            "properties": [
                { "name": "licence", "qualified_name": "org.acme.vehicle.Driver.licence" },
                { "name": "points", "qualified_name": "org.acme.vehicle.Driver.points", "default_value": 0 }
            ]
        },
        {
            "qualified_name": "org.acme.vehicle.Vehicle",
            "properties": [
                { "name": "vin", "qualified_name": "org.acme.vehicle.Vehicle.vin" },
                { "name": "owner", "qualified_name": "org.acme.vehicle.Vehicle.owner", "is_array": true },
                { "name": "colour", "qualified_name": "org.acme.vehicle.Vehicle.colour" }
            ]
        },
        { "qualified_name": "org.acme.vehicle.Fleet" }
    ]
}"#;

fn snapshots() -> (ModelSnapshot, ModelSnapshot) {
    (
        ModelSnapshot::from_json_str(FROM_JSON).expect("from snapshot"),
        ModelSnapshot::from_json_str(TO_JSON).expect("to snapshot"),
    )
}

#[test]
fn reports_every_incompatibility() {
    let (from, to) = snapshots();
    let report = MigrationChecker::default()
        .check(&from, &to)
        .expect("check should run");

    assert_eq!(
        report.summary(),
        ReportSummary {
            // Vehicle: abstract, vin; Driver: licence, points
            successes: 4,
            // Vehicle: owner, colour; Driver: abstract; Garage removed
            failures: 4,
            // Vehicle: notes
            warnings: 1,
        }
    );
    assert_eq!(report.exit_code(), 1);

    let failing: Vec<(&str, &serde_json::Value)> = report
        .failure_events()
        .into_iter()
        .map(|e| (e.rule.as_str(), &e.verdict.data))
        .collect();
    assert_eq!(
        failing,
        vec![
            (
                "must_not_change_cardinality_property",
                &json!({ "fqn": "org.acme.vehicle.Vehicle.owner" })
            ),
            (
                "new_not_default_optional_property",
                &json!({
                    "fqn": "org.acme.vehicle.Vehicle.colour",
                    "optional": false,
                    "defValue": false
                })
            ),
            ("class_not_made_abstract", &json!("org.acme.vehicle.Driver")),
            ("fqn_in_both_lists", &json!(["org.acme.vehicle.Garage"])),
        ]
    );
}

#[test]
fn warnings_as_failures_changes_only_exit_code() {
    let from = ModelSnapshot::from_json_str(
        r#"{ "classes": [ { "qualified_name": "A", "properties": [
            { "name": "x", "qualified_name": "A.x" } ] } ] }"#,
    )
    .expect("from snapshot");
    let to = ModelSnapshot::from_json_str(r#"{ "classes": [ { "qualified_name": "A" } ] }"#)
        .expect("to snapshot");

    let lenient = MigrationChecker::default().check(&from, &to).expect("check");
    let strict = MigrationChecker::new(CheckerConfig {
        warnings_as_failures: true,
        ..Default::default()
    })
    .check(&from, &to)
    .expect("check");

    assert_eq!(lenient.events, strict.events);
    assert_eq!(lenient.exit_code(), 0);
    assert_eq!(strict.exit_code(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_check_matches_sequential() -> anyhow::Result<()> {
    let (from, to) = snapshots();
    let checker = MigrationChecker::default();

    let sequential = checker.check(&from, &to)?;
    let concurrent = checker.check_concurrent(&from, &to).await?;

    assert_eq!(sequential, concurrent);
    Ok(())
}

#[test]
fn snapshots_and_config_load_from_disk() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let from_path = dir.path().join("from.json");
    let to_path = dir.path().join("to.json");
    let config_path = dir.path().join(CheckerConfig::DEFAULT_CONFIG_FILENAME);

    std::fs::write(&from_path, FROM_JSON)?;
    std::fs::write(&to_path, TO_JSON)?;
    let mut config_file = std::fs::File::create(&config_path)?;
    writeln!(
        config_file,
        r#"disabled_rules = ["fqn_in_both_lists", "class_not_made_abstract"]"#
    )?;

    let config = CheckerConfig::load_from_path(&config_path)?;
    let report = MigrationChecker::new(config).check(
        &ModelSnapshot::load_from_path(&from_path)?,
        &ModelSnapshot::load_from_path(&to_path)?,
    )?;

    assert!(
        report
            .events()
            .iter()
            .all(|e| e.rule != "fqn_in_both_lists" && e.rule != "class_not_made_abstract")
    );
    assert_eq!(report.failure_events().len(), 2);
    assert_eq!(report.warning_events().len(), 1);
    assert_eq!(report.success_events().len(), 3);
    Ok(())
}

#[test]
fn missing_snapshot_file_reports_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");

    let err = ModelSnapshot::load_from_path(&path).unwrap_err();
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn report_json_contains_every_event() -> anyhow::Result<()> {
    let (from, to) = snapshots();
    let report = MigrationChecker::default().check(&from, &to)?;

    let value: serde_json::Value = serde_json::from_str(&report.to_json_pretty()?)?;
    let events: Vec<RuleEvent> = serde_json::from_value(value["events"].clone())?;

    assert_eq!(events, report.events);
    assert_eq!(
        events.last().map(RuleEvent::result),
        Some(VerdictResult::Failure)
    );
    Ok(())
}
