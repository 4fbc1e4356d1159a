//! Read-only views over a parsed model.
//!
//! The rules only consume [`ClassView`] and [`PropertyView`]; any model
//! provider can implement them. [`ClassSnapshot`] and [`PropertySnapshot`]
//! are owned implementations that deserialize from JSON.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property of a class at one point in the model's history.
pub trait PropertyView {
    fn name(&self) -> &str;
    fn qualified_name(&self) -> &str;
    fn is_array(&self) -> bool;
    fn is_optional(&self) -> bool;
    /// `None` when the model declares no default.
    fn default_value(&self) -> Option<&Value>;
}

/// A class at one point in the model's history.
pub trait ClassView {
    type Property: PropertyView;

    fn qualified_name(&self) -> &str;
    fn is_abstract(&self) -> bool;
    /// Properties in declaration order. Names are unique within a class.
    fn properties(&self) -> &[Self::Property];

    /// Look up a property by its short name.
    fn property(&self, name: &str) -> Option<&Self::Property> {
        self.properties().iter().find(|p| p.name() == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropertySnapshot {
    pub name: String,
    pub qualified_name: String,
    #[serde(default)]
    pub is_array: bool,
    #[serde(default)]
    pub is_optional: bool,
    #[serde(default)]
    pub default_value: Option<Value>,
}

impl PropertySnapshot {
    /// Build a required scalar property `name` owned by class `class_fqn`.
    pub fn new(class_fqn: &str, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            qualified_name: format!("{class_fqn}.{name}"),
            name,
            ..Default::default()
        }
    }

    pub fn array(mut self) -> Self {
        self.is_array = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.is_optional = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

impl PropertyView for PropertySnapshot {
    fn name(&self) -> &str {
        &self.name
    }

    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn is_array(&self) -> bool {
        self.is_array
    }

    fn is_optional(&self) -> bool {
        self.is_optional
    }

    fn default_value(&self) -> Option<&Value> {
        self.default_value.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClassSnapshot {
    pub qualified_name: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub properties: Vec<PropertySnapshot>,
}

impl ClassSnapshot {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            ..Default::default()
        }
    }

    pub fn abstract_class(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Append a property; its qualified name is derived from this class.
    pub fn with_property(
        mut self,
        name: &str,
        build: impl FnOnce(PropertySnapshot) -> PropertySnapshot,
    ) -> Self {
        let property = build(PropertySnapshot::new(&self.qualified_name, name));
        self.properties.push(property);
        self
    }
}

impl ClassView for ClassSnapshot {
    type Property = PropertySnapshot;

    fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    fn is_abstract(&self) -> bool {
        self.is_abstract
    }

    fn properties(&self) -> &[PropertySnapshot] {
        &self.properties
    }
}
