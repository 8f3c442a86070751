//! Landmark structure rules.

use crate::conditions::{bools, control_type, framework, landmarks, relationships};
use crate::engine::condition::Condition;
use crate::engine::rule::{EvaluationCode, Rule, RuleId, Standard};

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        landmark_one_main(),
        landmark_no_duplicate_banner(),
        landmark_no_duplicate_content_info(),
    ]
}

/// Top-level containers whose landmark structure is the application's
/// responsibility.
fn top_level_container() -> Condition {
    (control_type::window() | control_type::pane() | control_type::document())
        & !relationships::parent_exists()
}

fn landmark_one_main() -> Rule {
    Rule::new(RuleId::LandmarkOneMain, || {
        control_type::pane() & framework::edge() & relationships::not_parent(framework::edge())
    })
    .description("A page must have exactly one main landmark")
    .how_to_fix("Mark the primary content region as the main landmark, and only that region")
    .standard(Standard::InfoAndRelationships)
    .error_code(EvaluationCode::Warning)
    .passes_test(|e| {
        Ok(relationships::descendant_count(landmarks::main())
            .equals(1)
            .matches(e))
    })
}

fn landmark_no_duplicate_banner() -> Rule {
    Rule::new(RuleId::LandmarkNoDuplicateBanner, top_level_container)
        .excluded_condition(framework::is_chromium_content)
        .description("A page must not have multiple banner landmarks")
        .how_to_fix("Keep a single banner landmark per page")
        .standard(Standard::InfoAndRelationships)
        .passes_test(|e| {
            let landmark = landmarks::banner() & bools::is_not_off_screen();
            Ok(relationships::descendant_count(landmark).at_most(1).matches(e))
        })
}

fn landmark_no_duplicate_content_info() -> Rule {
    Rule::new(RuleId::LandmarkNoDuplicateContentInfo, top_level_container)
        .excluded_condition(framework::is_chromium_content)
        .description("A page must not have multiple content information landmarks")
        .how_to_fix("Keep a single content information landmark per page")
        .standard(Standard::InfoAndRelationships)
        .passes_test(|e| {
            let landmark = landmarks::content_info() & bools::is_not_off_screen();
            Ok(relationships::descendant_count(landmark).at_most(1).matches(e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::framework::framework_id;
    use crate::element::{ControlType, ElementBuilder, ElementTree, LandmarkType};

    fn edge_page(main_count: usize) -> ElementTree {
        let mut page = ElementBuilder::new(ControlType::Pane).with_framework(framework_id::EDGE);
        for _ in 0..main_count {
            page = page.with_child(
                ElementBuilder::new(ControlType::Group).with_landmark_type(LandmarkType::Main),
            );
        }
        page.build()
    }

    #[test]
    fn test_one_main_landmark_passes() {
        let rule = landmark_one_main();
        let tree = edge_page(1);

        assert!(rule.is_applicable(tree.root()));
        assert_eq!(rule.evaluate(Some(tree.root())), Ok(EvaluationCode::Pass));
    }

    #[test]
    fn test_zero_or_two_main_landmarks_warn() {
        let rule = landmark_one_main();

        let none = edge_page(0);
        assert_eq!(rule.evaluate(Some(none.root())), Ok(EvaluationCode::Warning));

        let two = edge_page(2);
        assert_eq!(rule.evaluate(Some(two.root())), Ok(EvaluationCode::Warning));
    }

    fn window_with_banners(count: usize) -> ElementTree {
        let mut window = ElementBuilder::new(ControlType::Window);
        for _ in 0..count {
            window = window.with_child(
                ElementBuilder::new(ControlType::Group)
                    .with_landmark_type(LandmarkType::Custom)
                    .with_localized_landmark_type("banner"),
            );
        }
        window.build()
    }

    #[test]
    fn test_duplicate_banner_fails() {
        let rule = landmark_no_duplicate_banner();

        let single = window_with_banners(1);
        assert!(rule.is_applicable(single.root()));
        assert_eq!(rule.evaluate(Some(single.root())), Ok(EvaluationCode::Pass));

        let double = window_with_banners(2);
        assert_eq!(rule.evaluate(Some(double.root())), Ok(EvaluationCode::Error));
    }

    #[test]
    fn test_chromium_content_is_excluded() {
        let rule = landmark_no_duplicate_banner();
        let tree = ElementBuilder::new(ControlType::Document)
            .with_framework(framework_id::CHROME)
            .build();

        // a Chromium document reports its own landmark structure
        assert!(!rule.is_applicable(tree.root()));
    }
}
