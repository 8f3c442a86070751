//! Conditions over string properties
//!
//! A [`StringProperty`] represents a named string property of an element
//! ("Name", "HelpText", ...) and is a factory for the conditions that test
//! it. Null, empty and whitespace are three distinct states: a property can
//! be absent entirely, present with zero length, or present with only
//! whitespace content.

use crate::element::Element;
use crate::engine::condition::{Condition, ValueCondition};
use regex::Regex;
use std::sync::{Arc, LazyLock};

type StringGetter = Arc<dyn for<'t> Fn(Element<'t>) -> Option<&'t str> + Send + Sync>;

/// A named string property of an element and the conditions derived from it.
#[derive(Clone)]
pub struct StringProperty {
    get: StringGetter,
    name: Arc<str>,
}

impl StringProperty {
    pub fn new(
        name: impl Into<Arc<str>>,
        get: impl for<'t> Fn(Element<'t>) -> Option<&'t str> + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            name: name.into(),
        }
    }

    /// The property's name, used in generated condition descriptions.
    pub fn property_name(&self) -> &str {
        &self.name
    }

    fn condition(
        &self,
        suffix: &str,
        test: impl Fn(Option<&str>) -> bool + Send + Sync + 'static,
    ) -> Condition {
        let get = self.get.clone();
        Condition::new(format!("{}.{}", self.name, suffix), move |e| test(get(e)))
    }

    pub fn is_null(&self) -> Condition {
        self.condition("Null", |value| value.is_none())
    }

    pub fn not_null(&self) -> Condition {
        self.condition("NotNull", |value| value.is_some())
    }

    /// Present with zero length; an absent property is not empty.
    pub fn is_empty(&self) -> Condition {
        self.condition("Empty", |value| value.is_some_and(str::is_empty))
    }

    pub fn not_empty(&self) -> Condition {
        self.condition("NotEmpty", |value| !value.is_some_and(str::is_empty))
    }

    pub fn null_or_empty(&self) -> Condition {
        self.condition("NullOrEmpty", |value| value.is_none_or(str::is_empty))
    }

    pub fn not_null_or_empty(&self) -> Condition {
        self.condition("NotNullOrEmpty", |value| value.is_some_and(|s| !s.is_empty()))
    }

    /// Present but containing nothing except whitespace (includes the empty
    /// string).
    pub fn is_white_space(&self) -> Condition {
        self.condition("WhiteSpace", |value| {
            value.is_some_and(|s| s.trim().is_empty())
        })
    }

    pub fn not_white_space(&self) -> Condition {
        self.condition("NotWhiteSpace", |value| {
            !value.is_some_and(|s| s.trim().is_empty())
        })
    }

    pub fn null_or_white_space(&self) -> Condition {
        self.condition("NullOrWhiteSpace", |value| {
            value.is_none_or(|s| s.trim().is_empty())
        })
    }

    pub fn not_null_or_white_space(&self) -> Condition {
        self.condition("NotNullOrWhiteSpace", |value| {
            value.is_some_and(|s| !s.trim().is_empty())
        })
    }

    /// Present and containing at least one codepoint from the Unicode
    /// Private Use Area.
    pub fn includes_private_unicode_characters(&self) -> Condition {
        self.condition("IncludesPrivateUnicodeCharacters", |value| {
            value.is_some_and(|s| s.chars().any(is_private_use))
        })
    }

    pub fn excludes_private_unicode_characters(&self) -> Condition {
        self.condition("ExcludesPrivateUnicodeCharacters", |value| {
            !value.is_some_and(|s| s.chars().any(is_private_use))
        })
    }

    /// The property's length in characters; 0 when absent.
    pub fn length(&self) -> ValueCondition<usize> {
        let get = self.get.clone();
        ValueCondition::new(format!("{}.Length", self.name), move |e| {
            get(e).map_or(0, |s| s.chars().count())
        })
    }

    /// Exact, case-sensitive match against a literal.
    pub fn is(&self, literal: impl Into<String>) -> Condition {
        let literal = literal.into();
        let get = self.get.clone();
        Condition::new(format!("{} == {}", self.name, literal), move |e| {
            get(e) == Some(literal.as_str())
        })
    }

    /// Case-insensitive match against a literal.
    pub fn is_no_case(&self, literal: impl Into<String>) -> Condition {
        let literal = literal.into();
        let get = self.get.clone();
        Condition::new(
            format!("{} ==(no case) {}", self.name, literal),
            move |e| get(e).is_some_and(|s| s.eq_ignore_ascii_case(&literal)),
        )
    }

    /// Case-insensitive comparison against another string property of the
    /// same element. False when either side is null or whitespace.
    pub fn is_equal_to(&self, other: &StringProperty) -> Condition {
        let (a, b) = (self.get.clone(), other.get.clone());
        Condition::new(format!("{} == {}", self.name, other.name), move |e| {
            match (a(e), b(e)) {
                (Some(s1), Some(s2)) => {
                    !s1.trim().is_empty()
                        && !s2.trim().is_empty()
                        && s1.eq_ignore_ascii_case(s2)
                }
                _ => false,
            }
        })
    }

    pub fn is_not_equal_to(&self, other: &StringProperty) -> Condition {
        self.is_equal_to(other).not()
    }

    /// Matches the property value against a regex. An invalid pattern or an
    /// absent property never matches.
    pub fn matches_regex(&self, pattern: &str) -> Condition {
        let regex = Regex::new(pattern).ok();
        let get = self.get.clone();
        Condition::new(format!("{} matches /{}/", self.name, pattern), move |e| {
            match (&regex, get(e)) {
                (Some(regex), Some(value)) => regex.is_match(value),
                _ => false,
            }
        })
    }
}

fn is_private_use(c: char) -> bool {
    ('\u{E000}'..='\u{F8FF}').contains(&c)
}

macro_rules! string_properties {
    ($($fn_name:ident => ($label:literal, $accessor:ident)),* $(,)?) => {
        $(
            pub fn $fn_name() -> StringProperty {
                static PROPERTY: LazyLock<StringProperty> =
                    LazyLock::new(|| StringProperty::new($label, |e| e.$accessor()));
                PROPERTY.clone()
            }
        )*
    };
}

string_properties! {
    name => ("Name", name),
    help_text => ("HelpText", help_text),
    localized_control_type => ("LocalizedControlType", localized_control_type),
    localized_landmark_type => ("LocalizedLandmarkType", localized_landmark_type),
    class_name => ("ClassName", class_name),
    automation_id => ("AutomationId", automation_id),
    framework => ("Framework", framework),
    item_status => ("ItemStatus", item_status),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder, ElementTree};

    fn button_named(name: Option<&str>) -> ElementTree {
        let builder = ElementBuilder::new(ControlType::Button);
        match name {
            Some(n) => builder.with_name(n).build(),
            None => builder.build(),
        }
    }

    #[test]
    fn test_null_empty_whitespace_are_distinct() {
        let absent = button_named(None);
        let empty = button_named(Some(""));
        let blank = button_named(Some("  \t"));
        let real = button_named(Some("ok"));

        assert!(name().is_null().matches(absent.root()));
        assert!(!name().is_empty().matches(absent.root()));
        assert!(!name().is_white_space().matches(absent.root()));

        assert!(!name().is_null().matches(empty.root()));
        assert!(name().is_empty().matches(empty.root()));
        assert!(name().is_white_space().matches(empty.root()));

        assert!(!name().is_null().matches(blank.root()));
        assert!(!name().is_empty().matches(blank.root()));
        assert!(name().is_white_space().matches(blank.root()));

        assert!(name().not_null_or_empty().matches(real.root()));
        assert!(name().not_white_space().matches(real.root()));
        assert!(!name().null_or_white_space().matches(real.root()));
    }

    #[test]
    fn test_is_and_is_no_case() {
        let tree = button_named(Some("Custom"));
        let e = tree.root();

        assert!(name().is("Custom").matches(e));
        assert!(!name().is("custom").matches(e));
        assert!(name().is_no_case("custom").matches(e));
        assert!(name().is_no_case("CUSTOM").matches(e));
        assert!(!name().is_no_case("customs").matches(e));
    }

    #[test]
    fn test_private_unicode_characters() {
        let clean = button_named(Some("Save"));
        let pua = button_named(Some("Save \u{E001}"));
        let absent = button_named(None);

        assert!(name().excludes_private_unicode_characters().matches(clean.root()));
        assert!(name().includes_private_unicode_characters().matches(pua.root()));
        assert!(!name().includes_private_unicode_characters().matches(absent.root()));
    }

    #[test]
    fn test_length() {
        let tree = button_named(Some("abcd"));
        let absent = button_named(None);

        assert_eq!(name().length().value(tree.root()), 4);
        assert_eq!(name().length().value(absent.root()), 0);
        assert!(name().length().at_most(4).matches(tree.root()));
        assert!(!name().length().at_most(3).matches(tree.root()));
    }

    #[test]
    fn test_cross_property_comparison() {
        let same = ElementBuilder::new(ControlType::Button)
            .with_name("Submit")
            .with_localized_control_type("submit")
            .build();
        let different = ElementBuilder::new(ControlType::Button)
            .with_name("Submit")
            .with_localized_control_type("button")
            .build();
        let blank = ElementBuilder::new(ControlType::Button)
            .with_name("Submit")
            .with_localized_control_type(" ")
            .build();

        let equal = name().is_equal_to(&localized_control_type());
        assert!(equal.matches(same.root()));
        assert!(!equal.matches(different.root()));
        assert!(!equal.matches(blank.root()));
        assert!(name()
            .is_not_equal_to(&localized_control_type())
            .matches(different.root()));
    }

    #[test]
    fn test_matches_regex() {
        let tree = button_named(Some("Microsoft.Widget.Button"));

        assert!(name()
            .matches_regex(r"^\s*Microsoft(\.(\w|\d)+)+\s*$")
            .matches(tree.root()));
        assert!(!name().matches_regex(r"^Windows").matches(tree.root()));
        // invalid pattern never matches
        assert!(!name().matches_regex(r"(").matches(tree.root()));
    }
}
