//! Rule abstraction: metadata, applicability condition, evaluation
//!
//! A [`Rule`] pairs immutable metadata with a lazily-computed applicability
//! [`Condition`] and an evaluation function. The condition is built exactly
//! once per process (guarded by a `OnceLock`, safe under concurrent first
//! use) so repeated applicability checks across many elements never rebuild
//! the predicate tree.
//!
//! Rules are plain data plus function pointers; there is no inheritance. A
//! rule either supplies a `passes_test` function (mapped to
//! `Pass`/`error_code` by the default evaluation) or a fully custom
//! `evaluate` when it needs more than two outcomes.

use crate::element::{Element, PropertyId};
use crate::engine::condition::Condition;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

/// The outcome of evaluating one rule against one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvaluationCode {
    Pass,
    Warning,
    Error,
    NeedsReview,
    Open,
    Note,
    /// The rule could not render a verdict for this element; reported as a
    /// result value, never raised.
    RuleExecutionError,
}

impl fmt::Display for EvaluationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Unique identifiers for the rules in this library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    BoundingRectangleNotNull,
    BoundingRectangleCompletelyObscuresContainer,
    ControlShouldNotSupportValuePattern,
    ControlShouldSupportGridItemPattern,
    ControlShouldSupportTextPattern,
    FrameworkDoesNotSupportUIAutomation,
    HeadingLevelDescendsWhenNested,
    HelpTextExcludesPrivateUnicodeCharacters,
    HyperlinkNameShouldBeUnique,
    IsContentElementPropertyExists,
    IsControlElementTrueRequired,
    IsKeyboardFocusableFalseButDisabled,
    IsKeyboardFocusableFalseButOffscreen,
    IsKeyboardFocusableShouldBeTrue,
    LandmarkNoDuplicateBanner,
    LandmarkNoDuplicateContentInfo,
    LandmarkOneMain,
    LocalizedControlTypeExcludesPrivateUnicodeCharacters,
    LocalizedControlTypeNotCustom,
    LocalizedControlTypeNotEmpty,
    LocalizedControlTypeNotNull,
    LocalizedControlTypeNotWhiteSpace,
    LocalizedLandmarkTypeExcludesPrivateUnicodeCharacters,
    LocalizedLandmarkTypeReasonableLength,
    NameExcludesControlType,
    NameExcludesLocalizedControlType,
    NameExcludesPrivateUnicodeCharacters,
    NameIsInformative,
    NameNotEmpty,
    NameNotNull,
    NameReasonableLength,
    ParentChildShouldNotHaveSameNameAndLocalizedControlType,
    ProgressBarRangeValue,
    SiblingUniqueAndFocusable,
    SiblingUniqueAndNotFocusable,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// The accessibility standard a rule is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Standard {
    ObjectInformation,
    NameRoleValue,
    InfoAndRelationships,
    Keyboard,
    AvailableActions,
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Immutable metadata describing a rule.
#[derive(Debug, Clone, Serialize)]
pub struct RuleInfo {
    /// Unique rule identifier.
    pub id: RuleId,

    /// Short description, shown in result listings.
    pub description: &'static str,

    /// How to resolve a violation reported by the rule.
    pub how_to_fix: &'static str,

    /// The standards documentation the rule was derived from.
    pub standard: Standard,

    /// When the rule tests one specific UI Automation property, its id.
    pub property_id: Option<PropertyId>,

    /// The code returned when the test does not pass.
    pub error_code: EvaluationCode,

    /// Link to a known framework issue that can cause this rule to fail.
    pub framework_issue_link: Option<&'static str>,
}

/// Failures raised while evaluating a rule against an element.
///
/// These terminate a single (rule, element) evaluation; callers driving a
/// scan are expected to record the failure and continue with the remaining
/// rules and elements.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// An evaluation entry point received no element.
    #[error("required element parameter '{0}' was not provided")]
    NullElement(&'static str),

    /// A required attribute or relationship was missing despite the rule
    /// being invoked, typically by calling `evaluate` directly without
    /// checking the applicability condition first.
    #[error("precondition violated: {0}")]
    InvalidPrecondition(String),

    /// A relationship query that must match at least the element itself
    /// returned no matches; an engine invariant was broken.
    #[error("no matching element found while evaluating rule {0}")]
    NoMatchingElementFound(RuleId),
}

type ConditionFactory = fn() -> Condition;
type PassesTestFn = fn(Element<'_>) -> Result<bool, RuleError>;
type EvaluateFn = fn(Element<'_>) -> Result<EvaluationCode, RuleError>;

enum Evaluation {
    /// Default mapping: `true` becomes `Pass`, `false` becomes the rule's
    /// `error_code`.
    PassFail(PassesTestFn),
    /// Full control over the returned code.
    Custom(EvaluateFn),
}

/// One accessibility rule: metadata, memoized applicability condition and
/// evaluation behavior.
pub struct Rule {
    info: RuleInfo,
    condition_factory: ConditionFactory,
    excluded_condition: Option<ConditionFactory>,
    evaluation: Evaluation,
    condition: OnceLock<Condition>,
}

impl Rule {
    /// Starts building a rule. The condition factory is invoked at most once,
    /// on first use of [`Rule::condition`].
    pub fn new(id: RuleId, condition_factory: ConditionFactory) -> RuleBuilder {
        RuleBuilder {
            info: RuleInfo {
                id,
                description: "",
                how_to_fix: "",
                standard: Standard::ObjectInformation,
                property_id: None,
                error_code: EvaluationCode::Error,
                framework_issue_link: None,
            },
            condition_factory,
            excluded_condition: None,
        }
    }

    pub fn info(&self) -> &RuleInfo {
        &self.info
    }

    pub fn id(&self) -> RuleId {
        self.info.id
    }

    /// The applicability condition, built on first use and shared afterwards.
    /// When the rule was constructed with an excluded condition, the realized
    /// condition is `factory() - excluded()`.
    pub fn condition(&self) -> &Condition {
        self.condition.get_or_init(|| {
            let condition = (self.condition_factory)();
            match self.excluded_condition {
                Some(excluded) => condition - excluded(),
                None => condition,
            }
        })
    }

    /// Whether the rule applies to the element at all.
    pub fn is_applicable(&self, element: Element<'_>) -> bool {
        self.condition().matches(element)
    }

    /// Evaluates the rule against an element.
    ///
    /// The element is checked for presence here, once, so individual
    /// evaluation functions can assume a concrete element.
    pub fn evaluate(&self, element: Option<Element<'_>>) -> Result<EvaluationCode, RuleError> {
        let element = element.ok_or(RuleError::NullElement("element"))?;

        match self.evaluation {
            Evaluation::PassFail(passes_test) => Ok(if passes_test(element)? {
                EvaluationCode::Pass
            } else {
                self.info.error_code
            }),
            Evaluation::Custom(evaluate) => evaluate(element),
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("id", &self.info.id).finish()
    }
}

/// Builder for [`Rule`]; finished by [`passes_test`](RuleBuilder::passes_test)
/// or [`evaluate_with`](RuleBuilder::evaluate_with).
pub struct RuleBuilder {
    info: RuleInfo,
    condition_factory: ConditionFactory,
    excluded_condition: Option<ConditionFactory>,
}

impl RuleBuilder {
    pub fn description(mut self, description: &'static str) -> Self {
        self.info.description = description;
        self
    }

    pub fn how_to_fix(mut self, how_to_fix: &'static str) -> Self {
        self.info.how_to_fix = how_to_fix;
        self
    }

    pub fn standard(mut self, standard: Standard) -> Self {
        self.info.standard = standard;
        self
    }

    pub fn property_id(mut self, property_id: PropertyId) -> Self {
        self.info.property_id = Some(property_id);
        self
    }

    pub fn error_code(mut self, error_code: EvaluationCode) -> Self {
        self.info.error_code = error_code;
        self
    }

    pub fn framework_issue_link(mut self, link: &'static str) -> Self {
        self.info.framework_issue_link = Some(link);
        self
    }

    /// Subtracts a carve-out from the applicability condition, so a generic
    /// rule can be reused with an exception.
    pub fn excluded_condition(mut self, factory: ConditionFactory) -> Self {
        self.excluded_condition = Some(factory);
        self
    }

    pub fn passes_test(self, passes_test: PassesTestFn) -> Rule {
        self.finish(Evaluation::PassFail(passes_test))
    }

    pub fn evaluate_with(self, evaluate: EvaluateFn) -> Rule {
        self.finish(Evaluation::Custom(evaluate))
    }

    fn finish(self, evaluation: Evaluation) -> Rule {
        Rule {
            info: self.info,
            condition_factory: self.condition_factory,
            excluded_condition: self.excluded_condition,
            evaluation,
            condition: OnceLock::new(),
        }
    }
}
