//! Rules over the IsControlElement/IsContentElement flags.

use crate::conditions::{bools, bounding_rectangle, element_groups};
use crate::element::PropertyId;
use crate::engine::rule::{EvaluationCode, Rule, RuleId, Standard};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        is_control_element_true_required(),
        is_content_element_property_exists(),
    ]
}

fn is_control_element_true_required() -> Rule {
    Rule::new(RuleId::IsControlElementTrueRequired, || {
        element_groups::name_required() & bounding_rectangle::valid()
    })
    .description("Standard controls must report IsControlElement as true")
    .how_to_fix("Set IsControlElement to true so the element appears in the control view")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::IsControlElement)
    .passes_test(|e| Ok(e.is_control_element()))
}

fn is_content_element_property_exists() -> Rule {
    Rule::new(RuleId::IsContentElementPropertyExists, || {
        bools::is_not_off_screen()
    })
    .description("The IsContentElement property must be exposed")
    .how_to_fix("Report an explicit IsContentElement value for the element")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::IsContentElement)
    .error_code(EvaluationCode::NeedsReview)
    .passes_test(|e| Ok(e.property(PropertyId::IsContentElement).is_some()))
}
