//! Relationship traversal conditions
//!
//! Queries over the neighborhood of an element, each parameterized by an
//! inner [`Condition`] and itself a condition (or a counting
//! [`ValueCondition`]). Ancestor walks are bounded by tree depth,
//! child/sibling queries by sibling-group size, descendant queries by
//! subtree size.
//!
//! Counting queries never fail: an element with no parent has a sibling
//! count of 0, an element with no children has child and descendant counts
//! of 0.

use crate::element::Element;
use crate::engine::condition::{Condition, ValueCondition};

/// True iff the element has a parent and the parent matches `condition`.
pub fn parent(condition: Condition) -> Condition {
    Condition::new(format!("Parent({condition})"), move |e: Element<'_>| {
        e.parent().is_some_and(|p| condition.matches(p))
    })
}

/// True iff the element has a parent, regardless of what the parent is.
pub fn parent_exists() -> Condition {
    parent(Condition::always()).with_description("ParentExists")
}

/// True iff the element has no parent, or the parent does not match
/// `condition`.
pub fn not_parent(condition: Condition) -> Condition {
    parent(condition).not()
}

/// True iff any ancestor, walking strictly upward from the immediate parent,
/// matches `condition`.
pub fn any_ancestor(condition: Condition) -> Condition {
    any_ancestor_until(condition, Condition::never())
}

/// Walks strictly upward from the immediate parent. Returns true the first
/// time an ancestor matches `condition`; returns false the first time an
/// ancestor matches `stop` without having matched `condition` first, or when
/// the root is passed. At each level `stop` is evaluated before `condition`.
pub fn any_ancestor_until(condition: Condition, stop: Condition) -> Condition {
    let description = format!("AnyAncestorUntil({condition}, stop: {stop})");
    Condition::new(description, move |e: Element<'_>| {
        let mut current = e.parent();
        while let Some(ancestor) = current {
            if stop.matches(ancestor) {
                return false;
            }
            if condition.matches(ancestor) {
                return true;
            }
            current = ancestor.parent();
        }
        false
    })
}

/// True iff no ancestor matches `condition`.
pub fn no_ancestor(condition: Condition) -> Condition {
    any_ancestor(condition).not()
}

/// True iff any direct child matches `condition`. Never recurses.
pub fn any_child(condition: Condition) -> Condition {
    Condition::new(format!("AnyChild({condition})"), move |e: Element<'_>| {
        e.children().any(|c| condition.matches(c))
    })
}

/// True iff no direct child matches `condition`; true for an element with no
/// children.
pub fn no_child(condition: Condition) -> Condition {
    any_child(condition).not()
}

pub fn children_exist() -> Condition {
    any_child(Condition::always()).with_description("ChildrenExist")
}

pub fn no_children() -> Condition {
    children_exist().not().with_description("NoChildrenExist")
}

/// True iff the element has children and every direct child matches
/// `condition`.
pub fn all_children(condition: Condition) -> Condition {
    let description = format!("AllChildren({condition})");
    // children must exist, otherwise the inverted AnyChild would hold vacuously
    (children_exist() & no_child(condition.not())).with_description(description)
}

/// True iff any strict descendant matches `condition`.
pub fn any_descendant(condition: Condition) -> Condition {
    fn walk(e: Element<'_>, condition: &Condition) -> bool {
        e.children()
            .any(|c| condition.matches(c) || walk(c, condition))
    }
    Condition::new(format!("AnyDescendant({condition})"), move |e: Element<'_>| {
        walk(e, &condition)
    })
}

pub fn no_descendant(condition: Condition) -> Condition {
    any_descendant(condition).not()
}

/// Counts the element together with all its siblings (all children of its
/// parent, the element itself included) that match `condition`. 0 when the
/// element has no parent.
pub fn sibling_count(condition: Condition) -> ValueCondition<usize> {
    ValueCondition::new(format!("SiblingCount({condition})"), move |e: Element<'_>| {
        match e.parent() {
            Some(p) => p.children().filter(|c| condition.matches(*c)).count(),
            None => 0,
        }
    })
}

/// Counts the direct children matching `condition`.
pub fn child_count(condition: Condition) -> ValueCondition<usize> {
    ValueCondition::new(format!("ChildCount({condition})"), move |e: Element<'_>| {
        e.children().filter(|c| condition.matches(*c)).count()
    })
}

/// Counts all strict descendants (the element itself excluded) matching
/// `condition`.
pub fn descendant_count(condition: Condition) -> ValueCondition<usize> {
    fn walk(e: Element<'_>, condition: &Condition) -> usize {
        e.children()
            .map(|c| usize::from(condition.matches(c)) + walk(c, condition))
            .sum()
    }
    ValueCondition::new(
        format!("DescendantCount({condition})"),
        move |e: Element<'_>| walk(e, &condition),
    )
}

/// True iff the element shares its control type with at least one sibling.
pub fn siblings_of_same_type() -> Condition {
    Condition::new("SiblingsOfSameType", |e: Element<'_>| {
        let Some(p) = e.parent() else { return false };
        p.children()
            .filter(|c| c.control_type() == e.control_type())
            .count()
            > 1
    })
}
