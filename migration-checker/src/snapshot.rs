//! Whole-model snapshots and class matching.
//!
//! A snapshot is the already-parsed class list of one model version. The
//! JSON form is `{"classes": [ClassSnapshot, ...]}`.

use std::collections::HashSet;
use std::path::Path;

use migration_rules::{ClassSnapshot, ClassView, PropertyView};
use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelSnapshot {
    #[serde(default)]
    pub classes: Vec<ClassSnapshot>,
}

impl ModelSnapshot {
    pub fn new(classes: Vec<ClassSnapshot>) -> Self {
        Self { classes }
    }

    /// Parse and validate a snapshot from JSON.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(contents)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| CheckerError::io(path, e))?;
        let snapshot = Self::from_json_str(&contents)?;

        tracing::debug!(
            path = %path.display(),
            classes = snapshot.classes.len(),
            "Loaded model snapshot"
        );
        Ok(snapshot)
    }

    /// Qualified names of all classes, in declaration order.
    pub fn class_names(&self) -> Vec<&str> {
        self.classes.iter().map(ClassView::qualified_name).collect()
    }

    pub fn class(&self, fqn: &str) -> Option<&ClassSnapshot> {
        self.classes.iter().find(|c| c.qualified_name() == fqn)
    }

    /// Reject duplicate class names and duplicate property names within a
    /// class. The rules assume both are unique.
    pub fn validate(&self) -> Result<()> {
        let mut seen_classes = HashSet::new();
        for class in &self.classes {
            if !seen_classes.insert(class.qualified_name()) {
                return Err(CheckerError::InvalidSnapshot(format!(
                    "duplicate class `{}`",
                    class.qualified_name()
                )));
            }

            let mut seen_props = HashSet::new();
            for prop in class.properties() {
                if !seen_props.insert(prop.name()) {
                    return Err(CheckerError::InvalidSnapshot(format!(
                        "duplicate property `{}` in class `{}`",
                        prop.name(),
                        class.qualified_name()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Pair up classes present in both snapshots, in `from` order.
///
/// Classes only present on one side are left to the global rules.
pub fn match_classes<'a>(
    from: &'a ModelSnapshot,
    to: &'a ModelSnapshot,
) -> Vec<(&'a ClassSnapshot, &'a ClassSnapshot)> {
    from.classes
        .iter()
        .filter_map(|class| to.class(class.qualified_name()).map(|other| (class, other)))
        .collect()
}
