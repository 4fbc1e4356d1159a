//! Rules comparing one class across two model versions.
//!
//! The caller matches `from` and `to` by qualified name. The three
//! property rules partition property names into shared, added and removed
//! sets, so a property appears in exactly one of them.

use std::collections::HashSet;

use serde_json::json;

use crate::error::{Result, RuleError};
use crate::model::{ClassView, PropertyView};
use crate::verdict::Verdict;

/// Fails when a concrete class becomes abstract, since existing instances
/// could no longer be created. Always emits exactly one verdict.
pub fn class_not_made_abstract<C: ClassView>(from: &C, to: &C) -> Result<Vec<Verdict>> {
    let failed = !from.is_abstract() && to.is_abstract();
    Ok(vec![Verdict::check(failed, from.qualified_name())])
}

/// Fails for each property present in both versions whose array flag
/// changed.
///
/// Only properties common to both versions are inspected. Added and removed
/// properties are covered by [`new_not_default_optional_property`] and
/// [`deleting_property_instability_risk`].
pub fn must_not_change_cardinality_property<C: ClassView>(
    from: &C,
    to: &C,
) -> Result<Vec<Verdict>> {
    let from_names = property_names(from);
    let mut events = Vec::new();

    for name in ordered_names(to).filter(|name| from_names.contains(name)) {
        let to_prop = resolve(to, name)?;
        let from_prop = resolve(from, name)?;

        events.push(Verdict::check(
            to_prop.is_array() != from_prop.is_array(),
            json!({ "fqn": to_prop.qualified_name() }),
        ));
    }

    Ok(events)
}

/// Fails for each newly introduced property that is neither optional nor
/// defaulted, because existing instances have no value for it.
///
/// `defValue` in the verdict data records whether a default is declared, not
/// the default itself.
pub fn new_not_default_optional_property<C: ClassView>(from: &C, to: &C) -> Result<Vec<Verdict>> {
    let from_names = property_names(from);
    let mut events = Vec::new();

    for name in ordered_names(to).filter(|name| !from_names.contains(name)) {
        let prop = resolve(to, name)?;
        let optional = prop.is_optional();
        let def_value = prop.default_value().is_some();

        events.push(Verdict::check(
            !optional && !def_value,
            json!({
                "fqn": prop.qualified_name(),
                "optional": optional,
                "defValue": def_value,
            }),
        ));
    }

    Ok(events)
}

/// Warns for each property removed in `to`. Removal is never a hard
/// failure.
pub fn deleting_property_instability_risk<C: ClassView>(
    from: &C,
    to: &C,
) -> Result<Vec<Verdict>> {
    let to_names = property_names(to);
    let mut events = Vec::new();

    for name in ordered_names(from).filter(|name| !to_names.contains(name)) {
        let prop = resolve(from, name)?;
        events.push(Verdict::warning(json!({ "fqn": prop.qualified_name() })));
    }

    Ok(events)
}

fn ordered_names<C: ClassView>(class: &C) -> impl Iterator<Item = &str> {
    class.properties().iter().map(PropertyView::name)
}

fn property_names<C: ClassView>(class: &C) -> HashSet<&str> {
    ordered_names(class).collect()
}

fn resolve<'a, C: ClassView>(class: &'a C, name: &str) -> Result<&'a C::Property> {
    class
        .property(name)
        .ok_or_else(|| RuleError::missing_property(class.qualified_name(), name))
}
