//! Tree structure and framework rules.

use crate::conditions::{bools, bounding_rectangle, control_type, element_groups, framework, ints, relationships};
use crate::element::PropertyId;
use crate::engine::rule::{Rule, RuleError, RuleId, Standard};
use regex::Regex;
use std::sync::LazyLock;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        heading_level_descends_when_nested(),
        parent_child_should_not_have_same_name_and_localized_control_type(),
        framework_does_not_support_ui_automation(),
    ]
}

fn heading_level_descends_when_nested() -> Rule {
    Rule::new(RuleId::HeadingLevelDescendsWhenNested, || {
        ints::heading_level().at_least(1) & ints::heading_level().at_most(9)
    })
    .description("A nested heading's level must not be lower than its ancestors' levels")
    .how_to_fix("Number headings so nesting deeper never decreases the heading level")
    .standard(Standard::InfoAndRelationships)
    .property_id(PropertyId::HeadingLevel)
    .passes_test(|e| {
        let level = e.heading_level().ok_or_else(|| {
            RuleError::InvalidPrecondition("HeadingLevel is not set".to_string())
        })?;

        // bound to this element's own level at evaluation time
        let higher_than_mine = ints::heading_level().greater_than(level);
        Ok(!relationships::any_ancestor(higher_than_mine).matches(e))
    })
}

fn parent_child_should_not_have_same_name_and_localized_control_type() -> Rule {
    Rule::new(
        RuleId::ParentChildShouldNotHaveSameNameAndLocalizedControlType,
        || {
            bools::is_keyboard_focusable()
                & bounding_rectangle::valid()
                & element_groups::name_required()
        },
    )
    .description("An element must not share both name and localized control type with its parent")
    .how_to_fix("Differentiate the element from its container, or merge the duplicate levels")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        let parent = e.parent().ok_or_else(|| {
            RuleError::InvalidPrecondition("element has no parent".to_string())
        })?;

        Ok(e.name() != parent.name()
            || e.localized_control_type() != parent.localized_control_type())
    })
}

fn framework_does_not_support_ui_automation() -> Rule {
    Rule::new(RuleId::FrameworkDoesNotSupportUIAutomation, || {
        framework::win32() & control_type::window()
    })
    .excluded_condition(framework::is_chromium_content)
    .description("The window's UI framework does not implement UI Automation")
    .how_to_fix("Scan the application with a bridge for its framework, or test manually")
    .standard(Standard::ObjectInformation)
    .framework_issue_link("https://go.microsoft.com/fwlink/?linkid=2214160")
    .passes_test(|e| {
        static KNOWN_PROBLEMATIC_CLASSES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
            [r"^\s*SunAwt.*$"].iter().filter_map(|p| Regex::new(p).ok()).collect()
        });

        let Some(class_name) = e.class_name() else {
            return Ok(true);
        };

        Ok(!KNOWN_PROBLEMATIC_CLASSES
            .iter()
            .any(|r| r.is_match(class_name)))
    })
}
