//! Condition algebra for rule applicability and evaluation
//!
//! A [`Condition`] is an immutable, side-effect-free predicate over an
//! [`Element`], built once and evaluated many times. Conditions compose with
//! [`and`](Condition::and), [`or`](Condition::or), [`not`](Condition::not)
//! and [`and_not`](Condition::and_not), or equivalently with the `&`, `|`,
//! `!` and `-` operators. Compositions short-circuit left to right.
//!
//! Every condition carries a human-readable description so that composed
//! predicates stay legible in logs and test failures; anonymous combinations
//! derive their description from their operands.

use crate::element::Element;
use std::fmt;
use std::ops;
use std::sync::Arc;

type Predicate = Arc<dyn for<'t> Fn(Element<'t>) -> bool + Send + Sync>;

/// An immutable predicate over an element.
#[derive(Clone)]
pub struct Condition {
    predicate: Predicate,
    description: Arc<str>,
}

impl Condition {
    pub fn new(
        description: impl Into<Arc<str>>,
        predicate: impl for<'t> Fn(Element<'t>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            predicate: Arc::new(predicate),
            description: description.into(),
        }
    }

    /// The sentinel condition that matches every element.
    pub fn always() -> Self {
        Condition::new("True", |_| true)
    }

    /// The sentinel condition that matches no element.
    pub fn never() -> Self {
        Condition::new("False", |_| false)
    }

    /// Evaluates the predicate against an element.
    pub fn matches(&self, element: Element<'_>) -> bool {
        (self.predicate)(element)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the same predicate under a new name, for diagnostics.
    pub fn with_description(self, description: impl Into<Arc<str>>) -> Self {
        Self {
            predicate: self.predicate,
            description: description.into(),
        }
    }

    /// True iff both conditions hold; `other` is evaluated only when `self`
    /// matched.
    pub fn and(&self, other: &Condition) -> Condition {
        let (a, b) = (self.predicate.clone(), other.predicate.clone());
        Condition {
            predicate: Arc::new(move |e| a(e) && b(e)),
            description: format!("({} and {})", self.description, other.description).into(),
        }
    }

    /// True iff either condition holds; `other` is evaluated only when `self`
    /// did not match.
    pub fn or(&self, other: &Condition) -> Condition {
        let (a, b) = (self.predicate.clone(), other.predicate.clone());
        Condition {
            predicate: Arc::new(move |e| a(e) || b(e)),
            description: format!("({} or {})", self.description, other.description).into(),
        }
    }

    /// Logical negation.
    pub fn not(&self) -> Condition {
        let a = self.predicate.clone();
        Condition {
            predicate: Arc::new(move |e| !a(e)),
            description: format!("not {}", self.description).into(),
        }
    }

    /// "Applies except when": `self & !other`.
    pub fn and_not(&self, other: &Condition) -> Condition {
        self.and(&other.not())
            .with_description(format!("({} and not {})", self.description, other.description))
    }
}

impl ops::BitAnd for Condition {
    type Output = Condition;

    fn bitand(self, rhs: Condition) -> Condition {
        self.and(&rhs)
    }
}

impl ops::BitOr for Condition {
    type Output = Condition;

    fn bitor(self, rhs: Condition) -> Condition {
        self.or(&rhs)
    }
}

impl ops::Not for Condition {
    type Output = Condition;

    fn not(self) -> Condition {
        Condition::not(&self)
    }
}

impl ops::Sub for Condition {
    type Output = Condition;

    fn sub(self, rhs: Condition) -> Condition {
        self.and_not(&rhs)
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Condition({})", self.description)
    }
}

type Getter<T> = Arc<dyn for<'t> Fn(Element<'t>) -> T + Send + Sync>;

/// An integer-valued query over an element (a count or a length) that turns
/// into a [`Condition`] when compared against a literal.
#[derive(Clone)]
pub struct ValueCondition<T> {
    get: Getter<T>,
    description: Arc<str>,
}

impl<T> ValueCondition<T>
where
    T: PartialOrd + Copy + fmt::Display + Send + Sync + 'static,
{
    pub fn new(
        description: impl Into<Arc<str>>,
        get: impl for<'t> Fn(Element<'t>) -> T + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            description: description.into(),
        }
    }

    /// The raw value for an element, for custom evaluation logic.
    pub fn value(&self, element: Element<'_>) -> T {
        (self.get)(element)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    fn compare(&self, symbol: &str, literal: T, cmp: fn(&T, &T) -> bool) -> Condition {
        let get = self.get.clone();
        Condition::new(
            format!("{} {} {}", self.description, symbol, literal),
            move |e| cmp(&get(e), &literal),
        )
    }

    pub fn equals(&self, literal: T) -> Condition {
        self.compare("==", literal, |a, b| a == b)
    }

    pub fn at_most(&self, literal: T) -> Condition {
        self.compare("<=", literal, |a, b| a <= b)
    }

    pub fn at_least(&self, literal: T) -> Condition {
        self.compare(">=", literal, |a, b| a >= b)
    }

    pub fn less_than(&self, literal: T) -> Condition {
        self.compare("<", literal, |a, b| a < b)
    }

    pub fn greater_than(&self, literal: T) -> Condition {
        self.compare(">", literal, |a, b| a > b)
    }
}

impl<T> fmt::Debug for ValueCondition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueCondition({})", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder};

    fn button() -> Condition {
        Condition::new("Button", |e| e.control_type() == ControlType::Button)
    }

    fn named(name: &str) -> Condition {
        let name = name.to_string();
        Condition::new(format!("Name == {name}"), move |e| e.name() == Some(name.as_str()))
    }

    /// A condition that panics if it is ever evaluated.
    fn explode() -> Condition {
        Condition::new("explode", |_| panic!("short-circuit violated"))
    }

    #[test]
    fn test_boolean_algebra_laws() {
        let tree = ElementBuilder::new(ControlType::Button).with_name("ok").build();
        let e = tree.root();

        let a = button();
        let b = named("ok");
        let c = named("cancel");

        assert_eq!(a.and(&b).matches(e), a.matches(e) && b.matches(e));
        assert_eq!(a.and(&c).matches(e), a.matches(e) && c.matches(e));
        assert_eq!(a.or(&c).matches(e), a.matches(e) || c.matches(e));
        assert_eq!(c.or(&b).matches(e), c.matches(e) || b.matches(e));
        assert_eq!(a.not().matches(e), !a.matches(e));
        assert_eq!(a.and_not(&c).matches(e), a.matches(e) && !c.matches(e));
        assert_eq!(a.and_not(&b).matches(e), a.matches(e) && !b.matches(e));

        assert!(Condition::always().matches(e));
        assert!(!Condition::never().matches(e));
    }

    #[test]
    fn test_operator_sugar_matches_combinators() {
        let tree = ElementBuilder::new(ControlType::Button).with_name("ok").build();
        let e = tree.root();

        assert!((button() & named("ok")).matches(e));
        assert!((named("cancel") | button()).matches(e));
        assert!((!named("cancel")).matches(e));
        assert!((button() - named("cancel")).matches(e));
        assert!(!(button() - named("ok")).matches(e));
    }

    #[test]
    fn test_and_short_circuits() {
        let tree = ElementBuilder::new(ControlType::Button).build();
        let e = tree.root();

        assert!(!Condition::never().and(&explode()).matches(e));
        assert!(!(Condition::never() & explode()).matches(e));
    }

    #[test]
    fn test_or_short_circuits() {
        let tree = ElementBuilder::new(ControlType::Button).build();
        let e = tree.root();

        assert!(Condition::always().or(&explode()).matches(e));
        assert!((Condition::always() | explode()).matches(e));
    }

    #[test]
    fn test_generated_descriptions() {
        let a = button();
        let b = named("ok");

        assert_eq!(a.and(&b).description(), "(Button and Name == ok)");
        assert_eq!(a.or(&b).description(), "(Button or Name == ok)");
        assert_eq!(a.not().description(), "not Button");
        assert_eq!(a.and_not(&b).description(), "(Button and not Name == ok)");
        assert_eq!(
            a.and(&b).with_description("EligibleButton").description(),
            "EligibleButton"
        );
    }

    #[test]
    fn test_value_condition_comparisons() {
        let tree = ElementBuilder::new(ControlType::Window)
            .with_child(ElementBuilder::new(ControlType::Button))
            .with_child(ElementBuilder::new(ControlType::Button))
            .build();
        let e = tree.root();

        let child_count = ValueCondition::new("ChildCount", |e: Element<'_>| e.children().count());

        assert_eq!(child_count.value(e), 2);
        assert!(child_count.equals(2).matches(e));
        assert!(child_count.at_most(2).matches(e));
        assert!(child_count.at_least(2).matches(e));
        assert!(!child_count.less_than(2).matches(e));
        assert!(child_count.greater_than(1).matches(e));
        assert_eq!(child_count.at_most(1).description(), "ChildCount <= 1");
    }
}
