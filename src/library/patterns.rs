//! Rules over supported interaction patterns.

use crate::conditions::{bools, control_type, framework, patterns, relationships};
use crate::element::{PatternId, PropertyId};
use crate::engine::rule::{EvaluationCode, Rule, RuleError, RuleId, Standard};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        progress_bar_range_value(),
        control_should_support_text_pattern(),
        control_should_support_grid_item_pattern(),
        control_should_not_support_value_pattern(),
    ]
}

fn progress_bar_range_value() -> Rule {
    Rule::new(RuleId::ProgressBarRangeValue, || {
        control_type::progress_bar() & patterns::supports(PatternId::RangeValue)
    })
    .description("A progress bar's RangeValue pattern must report a read-only range")
    .how_to_fix("Report Maximum greater than Minimum and IsReadOnly as true")
    .standard(Standard::ObjectInformation)
    .passes_test(|e| {
        let range_value = e.pattern(PatternId::RangeValue).ok_or_else(|| {
            RuleError::InvalidPrecondition("RangeValue pattern is not supported".to_string())
        })?;

        let minimum = range_value.get_int("Minimum").unwrap_or(0);
        let maximum = range_value.get_int("Maximum").unwrap_or(0);
        let is_read_only = range_value.get_bool("IsReadOnly").unwrap_or(false);

        Ok(maximum > minimum && is_read_only)
    })
}

fn control_should_support_text_pattern() -> Rule {
    Rule::new(RuleId::ControlShouldSupportTextPattern, || {
        let win32_edit = control_type::edit() & framework::win32();
        let nonfocusable_direct_ui_edit = control_type::edit()
            & bools::is_not_keyboard_focusable()
            & framework::direct_ui();

        control_type::document()
            | (control_type::edit() & !win32_edit & !nonfocusable_direct_ui_edit)
    })
    .description("Text-bearing controls must support the Text pattern")
    .how_to_fix("Implement the Text pattern so assistive technology can read the content")
    .standard(Standard::AvailableActions)
    .evaluate_with(|e| {
        Ok(if e.supports_pattern(PatternId::Text) {
            EvaluationCode::Pass
        } else {
            EvaluationCode::Error
        })
    })
}

fn control_should_support_grid_item_pattern() -> Rule {
    Rule::new(RuleId::ControlShouldSupportGridItemPattern, || {
        control_type::data_item() & relationships::parent(patterns::supports(PatternId::Grid))
    })
    .description("A data item inside a grid must support the GridItem pattern")
    .how_to_fix("Implement GridItem on the data item or on one of its children")
    .standard(Standard::AvailableActions)
    .passes_test(|e| {
        let grid_item = patterns::supports(PatternId::GridItem);
        Ok((grid_item.clone() | relationships::any_child(grid_item)).matches(e))
    })
}

fn control_should_not_support_value_pattern() -> Rule {
    Rule::new(RuleId::ControlShouldNotSupportValuePattern, control_type::text)
        .description("A text element must not support the Value pattern")
        .how_to_fix("Expose editable content through an Edit control instead")
        .standard(Standard::AvailableActions)
        .property_id(PropertyId::ControlType)
        .error_code(EvaluationCode::Warning)
        .passes_test(|e| Ok(!e.supports_pattern(PatternId::Value)))
}
