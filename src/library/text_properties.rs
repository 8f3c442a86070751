//! Rules over HelpText and LocalizedLandmarkType.

use crate::conditions::strings;
use crate::element::PropertyId;
use crate::engine::rule::{Rule, RuleId, Standard};

const REASONABLE_LANDMARK_TYPE_LENGTH: usize = 64;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        help_text_excludes_private_unicode_characters(),
        localized_landmark_type_reasonable_length(),
        localized_landmark_type_excludes_private_unicode_characters(),
    ]
}

fn help_text_excludes_private_unicode_characters() -> Rule {
    Rule::new(RuleId::HelpTextExcludesPrivateUnicodeCharacters, || {
        strings::help_text().not_null_or_empty() & strings::help_text().not_white_space()
    })
    .description("The HelpText property must not contain private Unicode characters")
    .how_to_fix("Remove characters in the private use area; screen readers cannot speak them")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::HelpText)
    .passes_test(|e| {
        Ok(strings::help_text()
            .excludes_private_unicode_characters()
            .matches(e))
    })
}

fn localized_landmark_type_reasonable_length() -> Rule {
    Rule::new(RuleId::LocalizedLandmarkTypeReasonableLength, || {
        strings::localized_landmark_type().not_null_or_empty()
    })
    .description("The LocalizedLandmarkType property must be no longer than 64 characters")
    .how_to_fix("Shorten the localized landmark type")
    .standard(Standard::InfoAndRelationships)
    .property_id(PropertyId::LocalizedLandmarkType)
    .passes_test(|e| {
        Ok(strings::localized_landmark_type().length().value(e)
            <= REASONABLE_LANDMARK_TYPE_LENGTH)
    })
}

fn localized_landmark_type_excludes_private_unicode_characters() -> Rule {
    Rule::new(
        RuleId::LocalizedLandmarkTypeExcludesPrivateUnicodeCharacters,
        || {
            strings::localized_landmark_type().not_null_or_empty()
                & strings::localized_landmark_type().not_white_space()
        },
    )
    .description("The LocalizedLandmarkType property must not contain private Unicode characters")
    .how_to_fix("Remove characters in the private use area; screen readers cannot speak them")
    .standard(Standard::InfoAndRelationships)
    .property_id(PropertyId::LocalizedLandmarkType)
    .passes_test(|e| {
        Ok(strings::localized_landmark_type()
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
    fn test_help_text_with_private_characters_fails() {
        let rule = help_text_excludes_private_unicode_characters();
        let tree = ElementBuilder::new(ControlType::Button)
            .with_help_text("press \u{F0A0} to continue")
            .build();

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(rule.evaluate(Some(tree.root())), Ok(EvaluationCode::Error));
    }

    #[test]
    fn test_landmark_type_length_boundary() {
        let rule = localized_landmark_type_reasonable_length();

        let at_limit = ElementBuilder::new(ControlType::Group)
            .with_localized_landmark_type("x".repeat(REASONABLE_LANDMARK_TYPE_LENGTH))
            .build();
        assert_eq!(rule.evaluate(Some(at_limit.root())), Ok(EvaluationCode::Pass));

        let over = ElementBuilder::new(ControlType::Group)
            .with_localized_landmark_type("x".repeat(REASONABLE_LANDMARK_TYPE_LENGTH + 1))
            .build();
        assert_eq!(rule.evaluate(Some(over.root())), Ok(EvaluationCode::Error));
    }
}
