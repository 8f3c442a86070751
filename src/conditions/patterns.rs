//! Conditions over supported interaction patterns.

use crate::element::{Element, PatternId};
use crate::engine::condition::Condition;

/// True iff the element's capability set contains the named pattern.
pub fn supports(id: PatternId) -> Condition {
    Condition::new(format!("Patterns.{id}"), move |e| e.supports_pattern(id))
}

/// True iff the element supports at least one of the named patterns.
pub fn any_of(ids: &[PatternId]) -> Condition {
    let ids = ids.to_vec();
    Condition::new(pattern_list("Patterns.AnyOf", &ids), move |e: Element<'_>| {
        ids.iter().any(|&id| e.supports_pattern(id))
    })
}

/// True iff the element supports every one of the named patterns.
pub fn all_of(ids: &[PatternId]) -> Condition {
    let ids = ids.to_vec();
    Condition::new(pattern_list("Patterns.AllOf", &ids), move |e: Element<'_>| {
        ids.iter().all(|&id| e.supports_pattern(id))
    })
}

fn pattern_list(prefix: &str, ids: &[PatternId]) -> String {
    let names: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
    format!("{}({})", prefix, names.join(", "))
}
