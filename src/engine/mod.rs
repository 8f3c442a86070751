//! Generic rule-evaluation machinery: conditions, rules, and the runner.

pub mod condition;
pub mod rule;
pub mod runner;

pub use condition::{Condition, ValueCondition};
pub use rule::{EvaluationCode, Rule, RuleBuilder, RuleError, RuleId, RuleInfo, Standard};
pub use runner::{default_provider, RuleProvider, RuleRunner, RunResult};
