//! Runs rules against elements and collects results
//!
//! The runner is the evaluation pipeline: for an element it asks each rule
//! for its memoized condition, evaluates the rules whose condition matches,
//! and converts per-rule failures into `RuleExecutionError` results so that
//! one broken (rule, element) pair never aborts the rest of a scan.

use crate::element::Element;
use crate::engine::rule::{EvaluationCode, Rule, RuleError, RuleId};
use log::warn;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// The outcome of running one rule against one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    pub rule_id: RuleId,
    pub evaluation_code: EvaluationCode,

    /// Populated when the evaluation failed and was reported as
    /// [`EvaluationCode::RuleExecutionError`].
    pub error_message: Option<String>,
}

/// Supplies rules by id, ensuring each rule's condition is created only once.
pub struct RuleProvider {
    rules: &'static [Rule],
    by_id: HashMap<RuleId, usize>,
}

impl RuleProvider {
    pub fn new(rules: &'static [Rule]) -> Self {
        let by_id = rules
            .iter()
            .enumerate()
            .map(|(index, rule)| (rule.id(), index))
            .collect();
        Self { rules, by_id }
    }

    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.by_id.get(&id).map(|&index| &self.rules[index])
    }

    pub fn all(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// The provider over the built-in rule library.
pub fn default_provider() -> &'static RuleProvider {
    static PROVIDER: LazyLock<RuleProvider> =
        LazyLock::new(|| RuleProvider::new(crate::library::all_rules()));
    &PROVIDER
}

/// Drives rule evaluation for single elements.
pub struct RuleRunner<'p> {
    provider: &'p RuleProvider,
}

impl<'p> RuleRunner<'p> {
    pub fn new(provider: &'p RuleProvider) -> Self {
        Self { provider }
    }

    /// Runs a single rule. Returns `Ok(None)` when the rule's condition does
    /// not match the element, and an error when no element was provided.
    pub fn run_rule(
        &self,
        id: RuleId,
        element: Option<Element<'_>>,
    ) -> Result<Option<RunResult>, RuleError> {
        let element = element.ok_or(RuleError::NullElement("element"))?;

        let Some(rule) = self.provider.get(id) else {
            return Ok(Some(RunResult {
                rule_id: id,
                evaluation_code: EvaluationCode::RuleExecutionError,
                error_message: Some(format!("no rule matching id {id}")),
            }));
        };

        Ok(self.run(rule, element))
    }

    /// Runs every rule whose condition matches the element.
    pub fn run_all(&self, element: Option<Element<'_>>) -> Result<Vec<RunResult>, RuleError> {
        let element = element.ok_or(RuleError::NullElement("element"))?;

        Ok(self
            .provider
            .all()
            .filter_map(|rule| self.run(rule, element))
            .collect())
    }

    /// Runs one known rule against an element; `None` when the rule's
    /// condition does not match.
    pub fn run(&self, rule: &Rule, element: Element<'_>) -> Option<RunResult> {
        if !rule.condition().matches(element) {
            return None;
        }

        match rule.evaluate(Some(element)) {
            Ok(code) => Some(RunResult {
                rule_id: rule.id(),
                evaluation_code: code,
                error_message: None,
            }),
            Err(err) => {
                warn!("rule {} failed on element {}: {err}", rule.id(), element.id());
                Some(RunResult {
                    rule_id: rule.id(),
                    evaluation_code: EvaluationCode::RuleExecutionError,
                    error_message: Some(err.to_string()),
                })
            }
        }
    }
}
