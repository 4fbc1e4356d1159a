//! Rules comparing whole models rather than a single class pair.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::Result;
use crate::verdict::Verdict;

/// Fails when a class present in `from` is missing from `to`.
///
/// Emits exactly one verdict whose data is the list of removed qualified
/// names, in `from` order. Classes added in `to` are not flagged.
pub fn fqn_in_both_lists<S: AsRef<str>>(from: &[S], to: &[S]) -> Result<Vec<Verdict>> {
    let to: HashSet<&str> = to.iter().map(AsRef::<str>::as_ref).collect();
    let removed: Vec<Value> = from
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|fqn| !to.contains(fqn))
        .map(|fqn| Value::String(fqn.to_string()))
        .collect();

    Ok(vec![Verdict::check(!removed.is_empty(), removed)])
}
