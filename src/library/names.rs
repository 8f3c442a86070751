//! Rules over the Name property.

use crate::conditions::{bools, bounding_rectangle, control_type, element_groups, framework, strings};
use crate::element::{Element, PropertyId};
use crate::engine::rule::{Rule, RuleError, RuleId, Standard};
use regex::Regex;
use std::sync::LazyLock;

const REASONABLE_NAME_LENGTH: usize = 512;

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        name_not_null(),
        name_not_empty(),
        name_is_informative(),
        name_reasonable_length(),
        name_excludes_private_unicode_characters(),
        name_excludes_control_type(),
        name_excludes_localized_control_type(),
    ]
}

fn required_name(e: Element<'_>) -> Result<&str, RuleError> {
    e.name()
        .filter(|n| !n.trim().is_empty())
        .ok_or_else(|| RuleError::InvalidPrecondition("Name is null or white space".to_string()))
}

fn name_not_null() -> Rule {
    Rule::new(RuleId::NameNotNull, || {
        element_groups::name_required() & bounding_rectangle::valid()
    })
    .description("The Name property of a nameable element must not be null")
    .how_to_fix("Provide an accessible name for the element")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| Ok(e.name().is_some()))
}

fn name_not_empty() -> Rule {
    Rule::new(RuleId::NameNotEmpty, || {
        // Regardless if it is focusable, ProgressBar should be reported as an error
        (bools::is_keyboard_focusable() | control_type::progress_bar())
            & strings::name().not_null()
            & bounding_rectangle::valid()
            & element_groups::name_required()
    })
    .description("The Name property of a nameable element must not be an empty string")
    .how_to_fix("Provide a non-empty accessible name for the element")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        let name = e.name().ok_or_else(|| {
            RuleError::InvalidPrecondition("Name is null".to_string())
        })?;
        Ok(!name.is_empty())
    })
}

fn name_is_informative() -> Rule {
    Rule::new(RuleId::NameIsInformative, || {
        strings::name().not_null_or_empty()
            & strings::name().not_white_space()
            & bounding_rectangle::valid()
            & !framework::win32()
            & (element_groups::name_required() | element_groups::name_optional())
    })
    .description("The Name property must not be a class name or other uninformative text")
    .how_to_fix("Replace the generated type name with text meaningful to users")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        static UNINFORMATIVE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
            [
                r"(?i)^\s*Microsoft(\.(\w|\d)+)+\s*$",
                r"(?i)^\s*Windows(\.(\w|\d)+)+\s*$",
            ]
            .iter()
            .filter_map(|p| Regex::new(p).ok())
            .collect()
        });

        let name = required_name(e)?;
        Ok(!UNINFORMATIVE.iter().any(|r| r.is_match(name)))
    })
}

fn name_reasonable_length() -> Rule {
    Rule::new(RuleId::NameReasonableLength, || {
        strings::name().not_null_or_empty()
    })
    .description("The Name property must be no longer than 512 characters")
    .how_to_fix("Shorten the name; move long content out of the Name property")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| Ok(strings::name().length().value(e) <= REASONABLE_NAME_LENGTH))
}

fn name_excludes_private_unicode_characters() -> Rule {
    Rule::new(RuleId::NameExcludesPrivateUnicodeCharacters, || {
        strings::name().not_null_or_empty() & strings::name().not_white_space()
    })
    .description("The Name property must not contain private Unicode characters")
    .how_to_fix("Remove characters in the private use area; screen readers cannot speak them")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        required_name(e)?;
        Ok(strings::name().excludes_private_unicode_characters().matches(e))
    })
}

fn name_excludes_control_type() -> Rule {
    Rule::new(RuleId::NameExcludesControlType, || {
        !element_groups::allow_same_name_and_control_type()
            & strings::name().not_null_or_empty()
            & strings::name().not_white_space()
    })
    .description("The Name property must not include the element's control type")
    .how_to_fix("Remove the control type from the name; assistive technology announces it separately")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        let name = required_name(e)?;
        let control_type = e.control_type().display_name();
        Ok(!contains_word(name, control_type))
    })
}

fn name_excludes_localized_control_type() -> Rule {
    Rule::new(RuleId::NameExcludesLocalizedControlType, || {
        strings::name().not_null_or_empty()
            & strings::name().not_white_space()
            & strings::localized_control_type().not_null_or_empty()
    })
    .description("The Name property must not include the localized control type")
    .how_to_fix("Remove the control type from the name; assistive technology announces it separately")
    .standard(Standard::ObjectInformation)
    .property_id(PropertyId::Name)
    .passes_test(|e| {
        let name = required_name(e)?;
        let localized = e.localized_control_type().filter(|s| !s.trim().is_empty()).ok_or_else(
            || RuleError::InvalidPrecondition("LocalizedControlType is null or white space".to_string()),
        )?;
        Ok(!contains_word(name, localized))
    })
}

/// Case-insensitive whole-word containment.
fn contains_word(haystack: &str, word: &str) -> bool {
    match Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word))) {
        Ok(regex) => regex.is_match(haystack),
        Err(_) => false,
    }
}
