//! Composite conditions describing families of elements that rules target.

use crate::engine::condition::Condition;
use crate::element::{Element, ControlType, PatternId};
use crate::conditions::{control_type, patterns};
use std::sync::LazyLock;

const NAME_REQUIRED_TYPES: &[ControlType] = &[
    ControlType::Button,
    ControlType::Calendar,
    ControlType::CheckBox,
    ControlType::ComboBox,
    ControlType::DataGrid,
    ControlType::DataItem,
    ControlType::Document,
    ControlType::Edit,
    ControlType::HeaderItem,
    ControlType::Hyperlink,
    ControlType::List,
    ControlType::ListItem,
    ControlType::Menu,
    ControlType::MenuBar,
    ControlType::MenuItem,
    ControlType::ProgressBar,
    ControlType::RadioButton,
    ControlType::SemanticZoom,
    ControlType::Slider,
    ControlType::Spinner,
    ControlType::SplitButton,
    ControlType::TabItem,
    ControlType::Table,
    ControlType::ToolBar,
    ControlType::Tree,
    ControlType::TreeItem,
    ControlType::Window,
];

const NAME_OPTIONAL_TYPES: &[ControlType] = &[
    ControlType::Group,
    ControlType::Image,
    ControlType::Pane,
    ControlType::StatusBar,
    ControlType::Text,
];

const FOCUSABLE_TYPES: &[ControlType] = &[
    ControlType::Button,
    ControlType::Calendar,
    ControlType::CheckBox,
    ControlType::ComboBox,
    ControlType::Edit,
    ControlType::Hyperlink,
    ControlType::ListItem,
    ControlType::MenuItem,
    ControlType::RadioButton,
    ControlType::Slider,
    ControlType::Spinner,
    ControlType::Tab,
    ControlType::TreeItem,
];

fn control_type_in(description: &'static str, types: &'static [ControlType]) -> Condition {
    Condition::new(description, move |e: Element<'_>| {
        types.contains(&e.control_type())
    })
}

/// Control types whose Name property is required by the platform.
pub fn name_required() -> Condition {
    static CONDITION: LazyLock<Condition> =
        LazyLock::new(|| control_type_in("NameRequired", NAME_REQUIRED_TYPES));
    CONDITION.clone()
}

/// Control types whose Name property is meaningful but not required.
pub fn name_optional() -> Condition {
    static CONDITION: LazyLock<Condition> =
        LazyLock::new(|| control_type_in("NameOptional", NAME_OPTIONAL_TYPES));
    CONDITION.clone()
}

/// Elements a keyboard user expects to reach: interactive control types, or
/// anything exposing an actionable pattern.
pub fn expected_to_be_focusable() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (control_type_in("FocusableControlType", FOCUSABLE_TYPES)
            | patterns::any_of(&[
                PatternId::Invoke,
                PatternId::Toggle,
                PatternId::ExpandCollapse,
                PatternId::SelectionItem,
            ]))
        .with_description("ExpectedToBeFocusable")
    });
    CONDITION.clone()
}

/// Control types where echoing the control type in the name is accepted
/// platform convention rather than redundancy.
pub fn allow_same_name_and_control_type() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (control_type::app_bar()
            | control_type::custom()
            | control_type::header()
            | control_type::pane()
            | control_type::semantic_zoom()
            | control_type::status_bar()
            | control_type::title_bar()
            | control_type::text())
        .with_description("AllowSameNameAndControlType")
    });
    CONDITION.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementBuilder, Pattern};

    #[test]
    fn test_name_required_groups() {
        let button = ElementBuilder::new(ControlType::Button).build();
        let text = ElementBuilder::new(ControlType::Text).build();
        let thumb = ElementBuilder::new(ControlType::Thumb).build();

        assert!(name_required().matches(button.root()));
        assert!(!name_required().matches(text.root()));
        assert!(name_optional().matches(text.root()));
        assert!(!name_required().matches(thumb.root()));
        assert!(!name_optional().matches(thumb.root()));
    }

    #[test]
    fn test_expected_to_be_focusable() {
        let edit = ElementBuilder::new(ControlType::Edit).build();
        assert!(expected_to_be_focusable().matches(edit.root()));

        // a custom element becomes focus-worthy through its patterns
        let custom = ElementBuilder::new(ControlType::Custom)
            .with_pattern(Pattern::new(PatternId::Invoke))
            .build();
        assert!(expected_to_be_focusable().matches(custom.root()));

        let image = ElementBuilder::new(ControlType::Image).build();
        assert!(!expected_to_be_focusable().matches(image.root()));
    }
}
