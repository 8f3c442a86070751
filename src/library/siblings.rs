//! Sibling uniqueness rules
//!
//! These rules compare an element against all children of its parent,
//! including itself, so a count of 1 means "no other sibling shares my
//! name". Their applicability conditions guarantee a parent exists; when an
//! evaluation function is invoked directly without that guarantee it reports
//! the violated precondition instead.

use crate::conditions::{bools, bounding_rectangle, control_type, framework, patterns, relationships, strings};
use crate::element::{Element, PatternId, PropertyId};
use crate::engine::condition::Condition;
use crate::engine::rule::{EvaluationCode, Rule, RuleError, RuleId, Standard};
use std::sync::LazyLock;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        hyperlink_name_should_be_unique(),
        sibling_unique_and_focusable(),
        sibling_unique_and_not_focusable(),
    ]
}

fn eligible_hyperlink() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (control_type::hyperlink()
            & bools::is_content_or_control_element()
            & relationships::parent_exists()
            & strings::name().not_null_or_empty()
            & bounding_rectangle::valid())
        .with_description("EligibleHyperlink")
    });
    CONDITION.clone()
}

fn excluded_sibling_types() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        control_type::data_item()
            | control_type::image()
            | control_type::pane()
            | control_type::scroll_bar()
            | control_type::thumb()
            | control_type::tree_item()
            | control_type::list_item()
            | control_type::hyperlink()
    });
    CONDITION.clone()
}

fn eligible_focusable_child() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (bools::is_keyboard_focusable()
            & bools::is_content_or_control_element()
            & !excluded_sibling_types()
            & !patterns::supports(PatternId::GridItem)
            & relationships::parent_exists()
            & strings::name().not_null_or_empty()
            & strings::localized_control_type().not_null_or_empty()
            & bounding_rectangle::valid())
        .with_description("EligibleFocusableChild")
    });
    CONDITION.clone()
}

fn eligible_not_focusable_child() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (bools::is_not_keyboard_focusable()
            & bools::is_content_or_control_element()
            & !excluded_sibling_types()
            & relationships::parent_exists()
            & strings::name().not_null_or_empty()
            & strings::localized_control_type().not_null_or_empty()
            & bounding_rectangle::valid())
        .with_description("EligibleNotFocusableChild")
    });
    CONDITION.clone()
}

/// WPF data items surface their content through unnamed custom children;
/// their direct children are exempt from sibling uniqueness.
fn wpf_data_item_parent() -> Condition {
    control_type::data_item()
        & framework::wpf()
        & relationships::no_child(control_type::custom() | strings::name().null_or_empty())
}

fn require_parent(e: Element<'_>) -> Result<(), RuleError> {
    if e.parent().is_none() {
        return Err(RuleError::InvalidPrecondition(
            "element has no parent".to_string(),
        ));
    }
    Ok(())
}

fn required_name(e: Element<'_>) -> Result<&str, RuleError> {
    e.name()
        .filter(|n| !n.is_empty())
        .ok_or_else(|| RuleError::InvalidPrecondition("Name is null or empty".to_string()))
}

fn hyperlink_name_should_be_unique() -> Rule {
    Rule::new(RuleId::HyperlinkNameShouldBeUnique, eligible_hyperlink)
        .description("Sibling hyperlinks should have unique names")
        .how_to_fix("Give links distinct names so users can tell them apart out of context")
        .standard(Standard::NameRoleValue)
        .evaluate_with(|e| {
            require_parent(e)?;
            let name = required_name(e)?;

            let unique = relationships::sibling_count(
                eligible_hyperlink() & strings::name().is(name),
            )
            .at_most(1);

            Ok(if unique.matches(e) {
                EvaluationCode::Pass
            } else {
                EvaluationCode::Warning
            })
        })
}

fn sibling_unique_and_focusable() -> Rule {
    Rule::new(RuleId::SiblingUniqueAndFocusable, || {
        eligible_focusable_child() & relationships::not_parent(wpf_data_item_parent())
    })
    .description("Focusable sibling elements must not have the same name and localized control type")
    .how_to_fix("Differentiate the elements by name so focus announcements are unambiguous")
    .standard(Standard::NameRoleValue)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        require_parent(e)?;
        let name = required_name(e)?;
        let localized = e.localized_control_type().ok_or_else(|| {
            RuleError::InvalidPrecondition("LocalizedControlType is null".to_string())
        })?;

        let count = relationships::sibling_count(
            eligible_focusable_child()
                & strings::name().is(name)
                & strings::localized_control_type().is(localized),
        )
        .value(e);

        // the count includes the element under test
        if count < 1 {
            return Err(RuleError::NoMatchingElementFound(
                RuleId::SiblingUniqueAndFocusable,
            ));
        }

        Ok(count == 1)
    })
}

fn sibling_unique_and_not_focusable() -> Rule {
    Rule::new(RuleId::SiblingUniqueAndNotFocusable, || {
        eligible_not_focusable_child() & relationships::not_parent(wpf_data_item_parent())
    })
    .description("Sibling elements should not have the same name and localized control type")
    .how_to_fix("Differentiate the elements by name so they are announced unambiguously")
    .standard(Standard::NameRoleValue)
    .property_id(PropertyId::Name)
    .error_code(EvaluationCode::NeedsReview)
    .passes_test(|e| {
        require_parent(e)?;
        let name = required_name(e)?;
        let localized = e.localized_control_type().ok_or_else(|| {
            RuleError::InvalidPrecondition("LocalizedControlType is null".to_string())
        })?;

        let count = relationships::sibling_count(
            eligible_not_focusable_child()
                & strings::name().is(name)
                & strings::localized_control_type().is(localized),
        )
        .value(e);

        if count < 1 {
            return Err(RuleError::NoMatchingElementFound(
                RuleId::SiblingUniqueAndNotFocusable,
            ));
        }

        Ok(count == 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder, ElementTree, Rect};

    fn rect() -> Rect {
        Rect::new(0, 0, 100, 20)
    }

    fn hyperlink(name: &str) -> ElementBuilder {
        ElementBuilder::new(ControlType::Hyperlink)
            .with_name(name)
            .content_element(true)
            .with_bounding_rectangle(rect())
    }

    fn pane_of_hyperlinks(names: &[&str]) -> ElementTree {
        let mut pane = ElementBuilder::new(ControlType::Pane);
        for name in names {
            pane = pane.with_child(hyperlink(name));
        }
        pane.build()
    }

    #[test]
    fn test_duplicate_hyperlink_names_warn() {
        let rule = hyperlink_name_should_be_unique();
        let tree = pane_of_hyperlinks(&["Alice", "Alice"]);
        let second = tree.root().children().nth(1).unwrap();

        assert!(rule.is_applicable(second));
        assert_eq!(rule.evaluate(Some(second)), Ok(EvaluationCode::Warning));
    }

    #[test]
    fn test_distinct_hyperlink_names_pass() {
        let rule = hyperlink_name_should_be_unique();
        let tree = pane_of_hyperlinks(&["Alice", "Bob"]);
        let second = tree.root().children().nth(1).unwrap();

        assert_eq!(rule.evaluate(Some(second)), Ok(EvaluationCode::Pass));
    }

    #[test]
    fn test_hyperlink_without_parent_reports_precondition() {
        let rule = hyperlink_name_should_be_unique();
        let tree = hyperlink("Alice").build();

        assert!(!rule.is_applicable(tree.root()));
        assert_eq!(
            rule.evaluate(Some(tree.root())),
            Err(RuleError::InvalidPrecondition(
                "element has no parent".to_string()
            ))
        );
    }

    fn focusable_button(name: &str) -> ElementBuilder {
        ElementBuilder::new(ControlType::Button)
            .with_name(name)
            .with_localized_control_type("button")
            .keyboard_focusable(true)
            .control_element(true)
            .with_bounding_rectangle(rect())
    }

    #[test]
    fn test_duplicate_focusable_siblings_fail() {
        let rule = sibling_unique_and_focusable();
        let tree = ElementBuilder::new(ControlType::Pane)
            .with_child(focusable_button("Save"))
            .with_child(focusable_button("Save"))
            .build();
        let first = tree.root().children().next().unwrap();

        assert!(rule.is_applicable(first));
        assert_eq!(rule.evaluate(Some(first)), Ok(EvaluationCode::Error));
    }

    #[test]
    fn test_unique_focusable_sibling_passes() {
        let rule = sibling_unique_and_focusable();
        let tree = ElementBuilder::new(ControlType::Pane)
            .with_child(focusable_button("Save"))
            .with_child(focusable_button("Cancel"))
            .build();
        let first = tree.root().children().next().unwrap();

        assert_eq!(rule.evaluate(Some(first)), Ok(EvaluationCode::Pass));
    }

    #[test]
    fn test_not_focusable_duplicates_need_review() {
        let rule = sibling_unique_and_not_focusable();
        let status = |name: &str| {
            ElementBuilder::new(ControlType::Text)
                .with_name(name)
                .with_localized_control_type("text")
                .content_element(true)
                .with_bounding_rectangle(rect())
        };
        let tree = ElementBuilder::new(ControlType::Pane)
            .with_child(status("ready"))
            .with_child(status("ready"))
            .build();
        let first = tree.root().children().next().unwrap();

        assert!(rule.is_applicable(first));
        assert_eq!(rule.evaluate(Some(first)), Ok(EvaluationCode::NeedsReview));
    }
}
