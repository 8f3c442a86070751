//! Bounding rectangle rules.

use crate::conditions::{bools, bounding_rectangle, control_type, framework, relationships, strings};
use crate::element::PropertyId;
use crate::engine::condition::Condition;
use crate::engine::rule::{Rule, RuleId, Standard};

pub(crate) fn rules() -> Vec<Rule> {
    vec![bounding_rectangle_not_null(), completely_obscures_container()]
}

fn bounding_rectangle_not_null() -> Rule {
    Rule::new(RuleId::BoundingRectangleNotNull, || {
        let system_menu_bar = control_type::menu_bar() & strings::automation_id().is("SystemMenuBar");
        let system_menu_item = control_type::menu_item() & relationships::parent(
            control_type::menu_bar() & strings::automation_id().is("SystemMenuBar"),
        );

        // This exception is meant to apply to the non-Chromium version of Edge
        let edge_groups = control_type::group() & framework::edge();

        // Windows sets the bounding rectangles of the "System" menu bar and
        // menu item to null by default.
        bools::is_not_off_screen() & !edge_groups & !system_menu_bar & !system_menu_item
    })
    .description("An on-screen element must not have a null bounding rectangle")
    .how_to_fix("Ensure the element reports a bounding rectangle, or marks itself off-screen")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::BoundingRectangle)
    .passes_test(|e| Ok(e.bounding_rectangle().is_some()))
}

fn completely_obscures_container() -> Rule {
    Rule::new(RuleId::BoundingRectangleCompletelyObscuresContainer, || {
        // Windows and dialogs can be any size, regardless of their parents
        let is_dialog = control_type::pane() & bools::is_dialog();

        let is_desktop = control_type::pane() & strings::class_name().is("Progman");

        // Light dismiss buttons cover the whole window so that clicking
        // dismisses the combo box
        let is_light_dismiss_button = control_type::button()
            & bools::is_not_keyboard_focusable()
            & framework::xaml()
            & strings::class_name().is("ComboBoxLightDismiss");

        !control_type::window()
            & !is_dialog
            & bools::is_not_off_screen()
            & bounding_rectangle::valid()
            & relationships::parent_exists()
            & relationships::parent(is_desktop.not())
            & relationships::parent(bounding_rectangle::valid())
            & !is_light_dismiss_button
    })
    .description("An element must not completely obscure its container")
    .how_to_fix("Size the element so its container remains reachable, or restructure the tree")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::BoundingRectangle)
    .passes_test(|e| {
        Ok(!bounding_rectangle::completely_obscures_container().matches(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::bounding_rectangle::OVERLAP_MARGIN;
    use crate::element::{ControlType, ElementBuilder, ElementTree, Rect};
    use crate::engine::rule::EvaluationCode;

    fn pane_with_child(container: Rect, child: Rect) -> ElementTree {
        ElementBuilder::new(ControlType::Pane)
            .with_bounding_rectangle(container)
            .with_child(
                ElementBuilder::new(ControlType::Group).with_bounding_rectangle(child),
            )
            .build()
    }

    #[test]
    fn test_not_null_fails_for_missing_rectangle() {
        let rule = bounding_rectangle_not_null();
        let tree = ElementBuilder::new(ControlType::Button).build();

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(rule.evaluate(Some(tree.root())), Ok(EvaluationCode::Error));
    }

    #[test]
    fn test_not_null_skips_off_screen_elements() {
        let rule = bounding_rectangle_not_null();
        let tree = ElementBuilder::new(ControlType::Button).off_screen(true).build();
        assert!(!rule.is_applicable(tree.root()));
    }

    #[test]
    fn test_not_null_excludes_system_menu_bar() {
        let rule = bounding_rectangle_not_null();
        let tree = ElementBuilder::new(ControlType::MenuBar)
            .with_automation_id("SystemMenuBar")
            .build();
        assert!(!rule.is_applicable(tree.root()));
    }

    #[test]
    fn test_obscuring_child_fails() {
        let rule = completely_obscures_container();
        let container = Rect::new(300, 300, 400, 400);
        let tree = pane_with_child(container, container);
        let child = tree.root().children().next().unwrap();

        assert!(rule.is_applicable(child));
        assert_eq!(rule.evaluate(Some(child)), Ok(EvaluationCode::Error));
    }

    #[test]
    fn test_smaller_child_passes() {
        let rule = completely_obscures_container();
        let container = Rect::new(300, 300, 400, 400);
        let m = OVERLAP_MARGIN;
        let tree = pane_with_child(container, Rect::new(300 + m + 1, 300, 400, 400));
        let child = tree.root().children().next().unwrap();

        assert_eq!(rule.evaluate(Some(child)), Ok(EvaluationCode::Pass));
    }

    #[test]
    fn test_windows_are_not_checked() {
        let rule = completely_obscures_container();
        let tree = ElementBuilder::new(ControlType::Pane)
            .with_bounding_rectangle(Rect::new(0, 0, 100, 100))
            .with_child(
                ElementBuilder::new(ControlType::Window)
                    .with_bounding_rectangle(Rect::new(0, 0, 100, 100)),
            )
            .build();
        let window = tree.root().children().next().unwrap();
        assert!(!rule.is_applicable(window));
    }
}
