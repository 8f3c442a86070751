//! Keyboard focusability rules.

use crate::conditions::{bools, control_type, element_groups, relationships};
use crate::element::PropertyId;
use crate::engine::rule::{EvaluationCode, Rule, RuleId, Standard};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        is_keyboard_focusable_should_be_true(),
        is_keyboard_focusable_false_but_disabled(),
        is_keyboard_focusable_false_but_offscreen(),
    ]
}

fn is_keyboard_focusable_should_be_true() -> Rule {
    Rule::new(RuleId::IsKeyboardFocusableShouldBeTrue, || {
        // List items whose children take focus are a special case
        bools::is_enabled()
            & bools::is_not_off_screen()
            & !(control_type::list_item()
                & relationships::any_child(bools::is_keyboard_focusable()))
            & element_groups::expected_to_be_focusable()
    })
    .description("An interactive element must be keyboard focusable")
    .how_to_fix("Make the element focusable, or expose its action on a focusable element")
    .standard(Standard::Keyboard)
    .property_id(PropertyId::IsKeyboardFocusable)
    .error_code(EvaluationCode::Warning)
    .passes_test(|e| Ok(e.is_keyboard_focusable()))
}

fn is_keyboard_focusable_false_but_disabled() -> Rule {
    Rule::new(RuleId::IsKeyboardFocusableFalseButDisabled, || {
        bools::is_not_keyboard_focusable()
            & bools::is_not_enabled()
            & bools::is_not_off_screen()
            & element_groups::expected_to_be_focusable()
    })
    .description("A disabled interactive element is not keyboard focusable")
    .how_to_fix("Confirm the element becomes focusable when enabled")
    .standard(Standard::Keyboard)
    .property_id(PropertyId::IsKeyboardFocusable)
    .error_code(EvaluationCode::Note)
    .passes_test(|_| Ok(false))
}

fn is_keyboard_focusable_false_but_offscreen() -> Rule {
    Rule::new(RuleId::IsKeyboardFocusableFalseButOffscreen, || {
        bools::is_not_keyboard_focusable()
            & bools::is_enabled()
            & bools::is_off_screen()
            & element_groups::expected_to_be_focusable()
    })
    .description("An off-screen interactive element is not keyboard focusable")
    .how_to_fix("Confirm the element becomes focusable when scrolled into view")
    .standard(Standard::Keyboard)
    .property_id(PropertyId::IsKeyboardFocusable)
    .error_code(EvaluationCode::NeedsReview)
    .passes_test(|_| Ok(false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder};

    #[test]
    fn test_unfocusable_button_warns() {
        let rule = is_keyboard_focusable_should_be_true();
        let tree = ElementBuilder::new(ControlType::Button).build();

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(
            rule.evaluate(Some(tree.root())),
            Ok(EvaluationCode::Warning)
        );
    }

    #[test]
    fn test_focusable_button_passes() {
        let rule = is_keyboard_focusable_should_be_true();
        let tree = ElementBuilder::new(ControlType::Button).keyboard_focusable(true).build();
        assert_eq!(rule.evaluate(Some(tree.root())), Ok(EvaluationCode::Pass));
    }

    #[test]
    fn test_list_item_with_focusable_child_is_exempt() {
        let rule = is_keyboard_focusable_should_be_true();
        let tree = ElementBuilder::new(ControlType::ListItem)
            .with_child(ElementBuilder::new(ControlType::Edit).keyboard_focusable(true))
            .build();
        assert!(!rule.is_applicable(tree.root()));
    }

    #[test]
    fn test_disabled_element_yields_note() {
        let rule = is_keyboard_focusable_false_but_disabled();
        let tree = ElementBuilder::new(ControlType::Button).enabled(false).build();

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(rule.evaluate(Some(tree.root())), Ok(EvaluationCode::Note));
    }

    #[test]
    fn test_offscreen_element_needs_review() {
        let rule = is_keyboard_focusable_false_but_offscreen();
        let tree = ElementBuilder::new(ControlType::Button).off_screen(true).build();

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(
            rule.evaluate(Some(tree.root())),
            Ok(EvaluationCode::NeedsReview)
        );
    }
}
