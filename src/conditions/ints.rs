//! Conditions over optional integer properties
//!
//! An [`IntProperty`] compares an ordinal attribute (heading level, position
//! in set, ...) against literals. An absent value fails every ordered
//! comparison; use [`exists`](IntProperty::exists) to test for presence.

use crate::element::Element;
use crate::engine::condition::Condition;
use std::sync::{Arc, LazyLock};

type IntGetter = Arc<dyn for<'t> Fn(Element<'t>) -> Option<i32> + Send + Sync>;

#[derive(Clone)]
pub struct IntProperty {
    get: IntGetter,
    name: Arc<str>,
}

impl IntProperty {
    pub fn new(
        name: impl Into<Arc<str>>,
        get: impl for<'t> Fn(Element<'t>) -> Option<i32> + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            name: name.into(),
        }
    }

    /// The raw value for an element, for custom evaluation logic.
    pub fn value(&self, element: Element<'_>) -> Option<i32> {
        (self.get)(element)
    }

    pub fn exists(&self) -> Condition {
        let get = self.get.clone();
        Condition::new(format!("{}.Exists", self.name), move |e| get(e).is_some())
    }

    fn compare(&self, symbol: &str, literal: i32, cmp: fn(i32, i32) -> bool) -> Condition {
        let get = self.get.clone();
        Condition::new(
            format!("{} {} {}", self.name, symbol, literal),
            move |e| get(e).is_some_and(|value| cmp(value, literal)),
        )
    }

    pub fn equals(&self, literal: i32) -> Condition {
        self.compare("==", literal, |a, b| a == b)
    }

    pub fn at_least(&self, literal: i32) -> Condition {
        self.compare(">=", literal, |a, b| a >= b)
    }

    pub fn at_most(&self, literal: i32) -> Condition {
        self.compare("<=", literal, |a, b| a <= b)
    }

    pub fn greater_than(&self, literal: i32) -> Condition {
        self.compare(">", literal, |a, b| a > b)
    }

    pub fn less_than(&self, literal: i32) -> Condition {
        self.compare("<", literal, |a, b| a < b)
    }
}

macro_rules! int_properties {
    ($($fn_name:ident => ($label:literal, $accessor:ident)),* $(,)?) => {
        $(
            pub fn $fn_name() -> IntProperty {
                static PROPERTY: LazyLock<IntProperty> =
                    LazyLock::new(|| IntProperty::new($label, |e| e.$accessor()));
                PROPERTY.clone()
            }
        )*
    };
}

int_properties! {
    heading_level => ("HeadingLevel", heading_level),
    position_in_set => ("PositionInSet", position_in_set),
    size_of_set => ("SizeOfSet", size_of_set),
    orientation => ("Orientation", orientation),
}
