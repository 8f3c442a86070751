//! Conditions over the UI framework that produced an element.

use crate::engine::condition::Condition;
use crate::conditions::{control_type, relationships, strings};
use std::sync::LazyLock;

pub mod framework_id {
    pub const WIN32: &str = "Win32";
    pub const WPF: &str = "WPF";
    pub const WIN_FORM: &str = "WinForm";
    pub const XAML: &str = "XAML";
    pub const DIRECT_UI: &str = "DirectUI";
    pub const INTERNET_EXPLORER: &str = "InternetExplorer";
    pub const EDGE: &str = "Edge";
    pub const CHROME: &str = "Chrome";
}

macro_rules! framework_conditions {
    ($($fn_name:ident => $id:expr),* $(,)?) => {
        $(
            pub fn $fn_name() -> Condition {
                static CONDITION: LazyLock<Condition> =
                    LazyLock::new(|| strings::framework().is($id));
                CONDITION.clone()
            }
        )*
    };
}

framework_conditions! {
    win32 => framework_id::WIN32,
    wpf => framework_id::WPF,
    win_form => framework_id::WIN_FORM,
    xaml => framework_id::XAML,
    direct_ui => framework_id::DIRECT_UI,
    edge => framework_id::EDGE,
    chrome => framework_id::CHROME,
}

/// True for elements rendered by Chromium web content: a Chrome-framework
/// document, or any element below one. Used as a carve-out on rules whose
/// checks the web rendering engine already covers.
pub fn is_chromium_content() -> Condition {
    static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
        let chromium_document = chrome() & control_type::document();
        (chromium_document.clone() | relationships::any_ancestor(chromium_document))
            .with_description("IsChromiumContent")
    });
    CONDITION.clone()
}
