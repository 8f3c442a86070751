//! Conditions over boolean element state flags.

use crate::element::{Element, PropertyId, PropertyValue};
use crate::engine::condition::Condition;
use std::sync::LazyLock;

macro_rules! flag_conditions {
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

flag_conditions! {
    is_enabled => ("IsEnabled", |e: Element<'_>| e.is_enabled()),
    is_not_enabled => ("IsNotEnabled", |e: Element<'_>| !e.is_enabled()),
    is_off_screen => ("IsOffScreen", |e: Element<'_>| e.is_off_screen()),
    is_not_off_screen => ("IsNotOffScreen", |e: Element<'_>| !e.is_off_screen()),
    is_keyboard_focusable => ("IsKeyboardFocusable", |e: Element<'_>| e.is_keyboard_focusable()),
    is_not_keyboard_focusable => ("IsNotKeyboardFocusable", |e: Element<'_>| !e.is_keyboard_focusable()),
    is_content_element => ("IsContentElement", |e: Element<'_>| e.is_content_element()),
    is_not_content_element => ("IsNotContentElement", |e: Element<'_>| !e.is_content_element()),
    is_control_element => ("IsControlElement", |e: Element<'_>| e.is_control_element()),
    is_not_control_element => ("IsNotControlElement", |e: Element<'_>| !e.is_control_element()),
    is_content_or_control_element => ("IsContentOrControlElement", |e: Element<'_>| {
        e.is_content_element() || e.is_control_element()
    }),
    is_dialog => ("IsDialog", |e: Element<'_>| {
        matches!(e.property(PropertyId::IsDialog), Some(PropertyValue::Bool(true)))
    }),
}
