//! Rules over the LocalizedControlType property.

use crate::conditions::{bools, bounding_rectangle, strings};
use crate::element::{Element, PropertyId};
use crate::engine::rule::{Rule, RuleError, RuleId, Standard};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        localized_control_type_not_null(),
        localized_control_type_not_empty(),
        localized_control_type_not_white_space(),
        localized_control_type_not_custom(),
        localized_control_type_excludes_private_unicode_characters(),
    ]
}

fn required_localized_control_type(e: Element<'_>) -> Result<&str, RuleError> {
    e.localized_control_type().ok_or_else(|| {
        RuleError::InvalidPrecondition("LocalizedControlType is null".to_string())
    })
}

fn localized_control_type_not_null() -> Rule {
    Rule::new(RuleId::LocalizedControlTypeNotNull, || {
        bools::is_content_or_control_element() & bounding_rectangle::valid()
    })
    .description("The LocalizedControlType property must not be null")
    .how_to_fix("Report a localized control type, or derive it from a standard control type")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::LocalizedControlType)
    .passes_test(|e| Ok(e.localized_control_type().is_some()))
}

fn localized_control_type_not_empty() -> Rule {
    Rule::new(RuleId::LocalizedControlTypeNotEmpty, || {
        strings::localized_control_type().not_null()
    })
    .description("The LocalizedControlType property must not be an empty string")
    .how_to_fix("Report a non-empty localized control type")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::LocalizedControlType)
    .passes_test(|e| Ok(!required_localized_control_type(e)?.is_empty()))
}

fn localized_control_type_not_white_space() -> Rule {
    Rule::new(RuleId::LocalizedControlTypeNotWhiteSpace, || {
        strings::localized_control_type().not_null_or_empty()
    })
    .description("The LocalizedControlType property must contain more than white space")
    .how_to_fix("Report a meaningful localized control type")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::LocalizedControlType)
    .passes_test(|e| Ok(!required_localized_control_type(e)?.trim().is_empty()))
}

fn localized_control_type_not_custom() -> Rule {
    Rule::new(RuleId::LocalizedControlTypeNotCustom, || {
        strings::localized_control_type().not_null_or_empty()
    })
    .description("The LocalizedControlType property must not be the literal text \"custom\"")
    .how_to_fix("Describe what the custom control actually is, e.g. \"color picker\"")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::LocalizedControlType)
    .passes_test(|e| {
        let localized = required_localized_control_type(e)?;
        Ok(!localized.eq_ignore_ascii_case("custom"))
    })
}

fn localized_control_type_excludes_private_unicode_characters() -> Rule {
    Rule::new(
        RuleId::LocalizedControlTypeExcludesPrivateUnicodeCharacters,
        || {
            strings::localized_control_type().not_null_or_empty()
                & strings::localized_control_type().not_white_space()
        },
    )
    .description("The LocalizedControlType property must not contain private Unicode characters")
    .how_to_fix("Remove characters in the private use area; screen readers cannot speak them")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::LocalizedControlType)
    .passes_test(|e| {
        required_localized_control_type(e)?;
        Ok(strings::localized_control_type()
            .excludes_private_unicode_characters()
            .matches(e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder};
    use crate::engine::rule::EvaluationCode;

    #[test]
    fn test_custom_literal_fails_case_insensitively() {
        let rule = localized_control_type_not_custom();

        for value in ["custom", "Custom", "CUSTOM"] {
            let tree = ElementBuilder::new(ControlType::Custom)
                .with_localized_control_type(value)
                .build();
            assert!(rule.is_applicable(tree.root()));
            assert_eq!(
                rule.evaluate(Some(tree.root())),
                Ok(EvaluationCode::Error),
                "value {value:?} must fail"
            );
        }

        let good = ElementBuilder::new(ControlType::Custom)
            .with_localized_control_type("color picker")
            .build();
        assert_eq!(rule.evaluate(Some(good.root())), Ok(EvaluationCode::Pass));
    }

    #[test]
    fn test_not_custom_skips_elements_without_value() {
        let rule = localized_control_type_not_custom();
        let tree = ElementBuilder::new(ControlType::Custom).build();
        assert!(!rule.is_applicable(tree.root()));
    }

    #[test]
    fn test_not_empty_direct_invocation_without_value() {
        let rule = localized_control_type_not_empty();
        let tree = ElementBuilder::new(ControlType::Button).build();
        assert_eq!(
            rule.evaluate(Some(tree.root())),
            Err(RuleError::InvalidPrecondition(
                "LocalizedControlType is null".to_string()
            ))
        );
    }

    #[test]
    fn test_white_space_value_fails() {
        let rule = localized_control_type_not_white_space();
        let tree = ElementBuilder::new(ControlType::Button)
            .with_localized_control_type("  ")
            .build();

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(rule.evaluate(Some(tree.root())), Ok(EvaluationCode::Error));
    }
}
