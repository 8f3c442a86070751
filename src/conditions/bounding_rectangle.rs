//! Conditions over the bounding rectangle
//!
//! The bounding rectangle has three mutually exclusive states: absent,
//! present but empty (zero area), and present and valid. Every condition
//! here distinguishes them.

use crate::element::{Element, Rect};
use crate::engine::condition::Condition;
use std::sync::LazyLock;

/// Slack, in physical pixels, tolerated on each edge when deciding whether a
/// child rectangle completely obscures its container. Rendering and rounding
/// can leave a few pixels uncovered without changing what a user sees.
pub const OVERLAP_MARGIN: i32 = 25;

macro_rules! rect_conditions {
    ($($fn_name:ident => ($label:literal, $test:expr)),* $(,)?) => {
        $(
            pub fn $fn_name() -> Condition {
                static CONDITION: LazyLock<Condition> =
                    LazyLock::new(|| Condition::new($label, $test));
                CONDITION.clone()
            }
        )*
    };
}

rect_conditions! {
    not_null => ("BoundingRectangle.NotNull", |e: Element<'_>| {
        e.bounding_rectangle().is_some()
    }),
    null => ("BoundingRectangle.Null", |e: Element<'_>| {
        e.bounding_rectangle().is_none()
    }),
    empty => ("BoundingRectangle.Empty", |e: Element<'_>| {
        e.bounding_rectangle().is_some_and(|r| r.is_empty())
    }),
    not_empty => ("BoundingRectangle.NotEmpty", |e: Element<'_>| {
        !e.bounding_rectangle().is_some_and(|r| r.is_empty())
    }),
    valid => ("BoundingRectangle.Valid", |e: Element<'_>| {
        e.bounding_rectangle().is_some_and(|r| !r.is_empty())
    }),
    not_valid => ("BoundingRectangle.NotValid", |e: Element<'_>| {
        !e.bounding_rectangle().is_some_and(|r| !r.is_empty())
    }),
    completely_obscures_container => ("BoundingRectangle.CompletelyObscuresContainer", |e: Element<'_>| {
        match (e.bounding_rectangle(), e.parent().and_then(|p| p.bounding_rectangle())) {
            (Some(rect), Some(container)) => obscures(rect, container),
            _ => false,
        }
    }),
}

/// True when `rect`, expanded by [`OVERLAP_MARGIN`] on all four sides,
/// contains `container` on all four edges.
fn obscures(rect: Rect, container: Rect) -> bool {
    rect.left - OVERLAP_MARGIN <= container.left
        && rect.top - OVERLAP_MARGIN <= container.top
        && rect.right + OVERLAP_MARGIN >= container.right
        && rect.bottom + OVERLAP_MARGIN >= container.bottom
}
