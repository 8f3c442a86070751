//! The built-in rule library
//!
//! Each module contributes a set of rules built from the condition
//! primitives. The registry is constructed once per process; rule conditions
//! themselves are memoized per rule on first use.

mod bounding_rectangle;
mod content_flags;
mod keyboard_focus;
mod landmarks;
mod localized_control_type;
mod names;
mod patterns;
mod siblings;
mod structure;
mod text_properties;

use crate::engine::rule::{Rule, RuleId};
use std::sync::LazyLock;

static ALL_RULES: LazyLock<Vec<Rule>> = LazyLock::new(|| {
    let mut rules = Vec::new();
    rules.extend(bounding_rectangle::rules());
    rules.extend(names::rules());
    rules.extend(localized_control_type::rules());
    rules.extend(text_properties::rules());
    rules.extend(keyboard_focus::rules());
    rules.extend(content_flags::rules());
    rules.extend(landmarks::rules());
    rules.extend(patterns::rules());
    rules.extend(siblings::rules());
    rules.extend(structure::rules());
    rules
});

/// Every rule in the library, constructed on first use and shared for the
/// process lifetime.
pub fn all_rules() -> &'static [Rule] {
    &ALL_RULES
}

/// Looks up a library rule by id.
pub fn get_rule(id: RuleId) -> Option<&'static Rule> {
    all_rules().iter().find(|rule| rule.id() == id)
}
