//! Conditions over landmark properties
//!
//! The main landmark has its own landmark type id; banner and content
//! information landmarks are custom landmarks distinguished by their
//! localized landmark type.

use crate::element::{Element, LandmarkType};
use crate::engine::condition::Condition;
use crate::conditions::strings;
use std::sync::LazyLock;

fn landmark_type(value: LandmarkType) -> Condition {
    Condition::new(format!("LandmarkType.{value:?}"), move |e: Element<'_>| {
        e.landmark_type() == Some(value)
    })
}

pub fn any_landmark() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        Condition::new("AnyLandmark", |e: Element<'_>| e.landmark_type().is_some())
    });
    CONDITION.clone()
}

pub fn main() -> Condition {
    static CONDITION: LazyLock<Condition> =
        LazyLock::new(|| landmark_type(LandmarkType::Main).with_description("Landmarks.Main"));
    CONDITION.clone()
}

pub fn navigation() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        landmark_type(LandmarkType::Navigation).with_description("Landmarks.Navigation")
    });
    CONDITION.clone()
}

pub fn search() -> Condition {
    static CONDITION: LazyLock<Condition> =
        LazyLock::new(|| landmark_type(LandmarkType::Search).with_description("Landmarks.Search"));
    CONDITION.clone()
}

pub fn form() -> Condition {
    static CONDITION: LazyLock<Condition> =
        LazyLock::new(|| landmark_type(LandmarkType::Form).with_description("Landmarks.Form"));
    CONDITION.clone()
}

pub fn banner() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (landmark_type(LandmarkType::Custom)
            & strings::localized_landmark_type().is_no_case("banner"))
        .with_description("Landmarks.Banner")
    });
    CONDITION.clone()
}

pub fn content_info() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        (landmark_type(LandmarkType::Custom)
            & strings::localized_landmark_type().is_no_case("content information"))
        .with_description("Landmarks.ContentInfo")
    });
    CONDITION.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ControlType, ElementBuilder};

    #[test]
    fn test_main_landmark() {
        let main_landmark = ElementBuilder::new(ControlType::Group)
            .with_landmark_type(LandmarkType::Main)
            .build();
        let plain = ElementBuilder::new(ControlType::Group).build();

        assert!(main().matches(main_landmark.root()));
        assert!(any_landmark().matches(main_landmark.root()));
        assert!(!main().matches(plain.root()));
        assert!(!any_landmark().matches(plain.root()));
    }

    #[test]
    fn test_banner_requires_custom_type_and_localized_name() {
        let banner_landmark = ElementBuilder::new(ControlType::Group)
            .with_landmark_type(LandmarkType::Custom)
            .with_localized_landmark_type("Banner")
            .build();
        let custom_only = ElementBuilder::new(ControlType::Group)
            .with_landmark_type(LandmarkType::Custom)
            .build();

        assert!(banner().matches(banner_landmark.root()));
        assert!(!banner().matches(custom_only.root()));
        assert!(!content_info().matches(banner_landmark.root()));
    }
}
