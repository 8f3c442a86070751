//! Tree-wide scanning
//!
//! The scanner walks every element of a tree, runs the applicable rules from
//! a provider and aggregates the outcomes. Rules and conditions hold no
//! per-evaluation state, so the parallel mode evaluates elements across
//! threads without locking.

use crate::element::{Element, ElementId, ElementTree};
use crate::engine::rule::{EvaluationCode, RuleId};
use crate::engine::runner::{RuleProvider, RuleRunner};
use log::debug;
use rayon::prelude::*;
use serde::Serialize;
use std::collections::HashMap;

/// Options controlling a scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Evaluate elements on the rayon thread pool.
    pub parallel: bool,
}

/// One (element, rule) outcome from a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub element: ElementId,
    pub rule_id: RuleId,
    pub evaluation_code: EvaluationCode,
    pub error_message: Option<String>,
}

/// Aggregated results of scanning one tree.
#[derive(Debug, Default, Serialize)]
pub struct ScanReport {
    pub results: Vec<ScanResult>,

    /// Number of elements visited.
    pub elements_scanned: usize,

    /// Result counts by evaluation code.
    pub by_code: HashMap<EvaluationCode, usize>,
}

impl ScanReport {
    pub fn count(&self, code: EvaluationCode) -> usize {
        self.by_code.get(&code).copied().unwrap_or(0)
    }

    pub fn error_count(&self) -> usize {
        self.count(EvaluationCode::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(EvaluationCode::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.evaluation_code == EvaluationCode::Pass)
    }
}

/// Scans element trees against a rule provider.
pub struct Scanner<'p> {
    provider: &'p RuleProvider,
    options: ScanOptions,
}

impl<'p> Scanner<'p> {
    pub fn new(provider: &'p RuleProvider) -> Self {
        Self {
            provider,
            options: ScanOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ScanOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs every applicable rule against every element of the tree.
    pub fn scan(&self, tree: &ElementTree) -> ScanReport {
        let elements: Vec<Element<'_>> = tree.iter().collect();

        let results: Vec<ScanResult> = if self.options.parallel {
            elements
                .par_iter()
                .flat_map_iter(|&element| self.scan_element(element))
                .collect()
        } else {
            elements
                .iter()
                .flat_map(|&element| self.scan_element(element))
                .collect()
        };

        let mut by_code = HashMap::new();
        for result in &results {
            *by_code.entry(result.evaluation_code).or_insert(0) += 1;
        }

        debug!(
            "scanned {} elements, {} results ({} errors)",
            elements.len(),
            results.len(),
            by_code.get(&EvaluationCode::Error).copied().unwrap_or(0),
        );

        ScanReport {
            results,
            elements_scanned: elements.len(),
            by_code,
        }
    }

    fn scan_element(&self, element: Element<'_>) -> Vec<ScanResult> {
        let runner = RuleRunner::new(self.provider);
        self.provider
            .all()
            .filter_map(|rule| runner.run(rule, element))
            .map(|result| ScanResult {
                element: element.id(),
                rule_id: result.rule_id,
                evaluation_code: result.evaluation_code,
                error_message: result.error_message,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder, Rect};
    use crate::engine::runner::default_provider;

    fn sample_tree() -> ElementTree {
        ElementBuilder::new(ControlType::Window)
            .with_name("Demo")
            .with_framework("XAML")
            .with_bounding_rectangle(Rect::new(0, 0, 800, 600))
            .control_element(true)
            .with_child(
                ElementBuilder::new(ControlType::Button)
                    .with_name("")
                    .keyboard_focusable(true)
                    .control_element(true)
                    .with_bounding_rectangle(Rect::new(10, 10, 90, 40)),
            )
            .build()
    }

    #[test]
    fn test_scan_covers_all_elements() {
        let scanner = Scanner::new(default_provider());
        let tree = sample_tree();
        let report = scanner.scan(&tree);

        assert_eq!(report.elements_scanned, 2);
        assert!(!report.results.is_empty());
        // the empty-named button must be flagged
        assert!(report.has_errors());
        assert!(report
            .results
            .iter()
            .any(|r| r.rule_id == RuleId::NameNotEmpty
                && r.evaluation_code == EvaluationCode::Error));
    }

    #[test]
    fn test_parallel_scan_matches_sequential() {
        let tree = sample_tree();
        let sequential = Scanner::new(default_provider()).scan(&tree);
        let parallel = Scanner::new(default_provider())
            .with_options(ScanOptions { parallel: true })
            .scan(&tree);

        let mut a = sequential.results.clone();
        let mut b = parallel.results.clone();
        let key = |r: &ScanResult| (r.element.index(), format!("{}", r.rule_id));
        a.sort_by_key(key);
        b.sort_by_key(key);
        assert_eq!(a, b);
    }
}
