//! uia-analyzer - accessibility rule engine for desktop UI Automation trees
//!
//! Given a tree of UI elements (properties, patterns, parent/child links),
//! the engine determines per element which accessibility rules apply and
//! whether each applicable rule passes, fails or needs review.
//!
//! # Architecture
//!
//! ```text
//! Scanner -> RuleRunner -> Rule -> Condition -> Element
//! ```
//!
//! Conditions are immutable predicates composed with `&`, `|`, `!` and `-`;
//! relationship queries (ancestors, children, siblings, descendants) are
//! conditions too, layered on the same algebra. A rule pairs metadata with a
//! memoized applicability condition and an evaluation function returning an
//! [`EvaluationCode`]. The runner and scanner drive rules over elements and
//! convert per-rule failures into soft results so a single broken element
//! never aborts a scan.
//!
//! # Example
//!
//! ```
//! use uia_analyzer::element::{ControlType, ElementBuilder, Rect};
//! use uia_analyzer::engine::default_provider;
//! use uia_analyzer::scanner::Scanner;
//!
//! let tree = ElementBuilder::new(ControlType::Window)
//!     .with_name("Demo")
//!     .with_localized_control_type("window")
//!     .control_element(true)
//!     .with_bounding_rectangle(Rect::new(0, 0, 800, 600))
//!     .with_child(
//!         ElementBuilder::new(ControlType::Button)
//!             .with_name("Save")
//!             .with_localized_control_type("button")
//!             .keyboard_focusable(true)
//!             .control_element(true)
//!             .with_bounding_rectangle(Rect::new(10, 10, 90, 40)),
//!     )
//!     .build();
//!
//! let report = Scanner::new(default_provider()).scan(&tree);
//! assert!(!report.has_errors());
//! ```

pub mod conditions;
pub mod element;
pub mod engine;
pub mod library;
pub mod scanner;

// Re-export main types
pub use element::{
    ControlType, Element, ElementBuilder, ElementId, ElementTree, LandmarkType, Pattern,
    PatternId, PropertyId, PropertyValue, Rect,
};
pub use engine::{
    default_provider, Condition, EvaluationCode, Rule, RuleError, RuleId, RuleInfo, RuleProvider,
    RuleRunner, RunResult, Standard, ValueCondition,
};
pub use scanner::{ScanOptions, ScanReport, ScanResult, Scanner};
