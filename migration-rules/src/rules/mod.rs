//! Rule implementations.
//!
//! Every rule is a plain function. Dispatch by name lives in
//! [`crate::registry`].

pub mod global;
pub mod per_class;

pub use global::fqn_in_both_lists;
pub use per_class::{
    class_not_made_abstract, deleting_property_instability_risk,
    must_not_change_cardinality_property, new_not_default_optional_property,
};
