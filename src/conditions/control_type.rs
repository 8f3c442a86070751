//! Conditions over the control type
//!
//! Named singletons for each control type, plus [`is`] for comparing against
//! a control type value captured at evaluation time ("same control type as
//! this element").

use crate::element::{ControlType, Element};
use crate::engine::condition::Condition;
use std::sync::LazyLock;

/// A condition bound to a concrete control type value. Distinct from the
/// named singletons below: the value is supplied by the caller, typically
/// captured from the element under test while building a per-element
/// condition.
pub fn is(control_type: ControlType) -> Condition {
    Condition::new(format!("ControlType == {control_type}"), move |e| {
        e.control_type() == control_type
    })
}

macro_rules! control_type_conditions {
    ($($fn_name:ident => $variant:ident),* $(,)?) => {
        $(
            pub fn $fn_name() -> Condition {
                static CONDITION: LazyLock<Condition> = LazyLock::new(|| {
                    Condition::new(stringify!($variant), |e: Element<'_>| {
                        e.control_type() == ControlType::$variant
                    })
                });
                CONDITION.clone()
            }
        )*
    };
}

control_type_conditions! {
    app_bar => AppBar,
    button => Button,
    calendar => Calendar,
    check_box => CheckBox,
    combo_box => ComboBox,
    custom => Custom,
    data_grid => DataGrid,
    data_item => DataItem,
    document => Document,
    edit => Edit,
    group => Group,
    header => Header,
    header_item => HeaderItem,
    hyperlink => Hyperlink,
    image => Image,
    list => List,
    list_item => ListItem,
    menu => Menu,
    menu_bar => MenuBar,
    menu_item => MenuItem,
    pane => Pane,
    progress_bar => ProgressBar,
    radio_button => RadioButton,
    scroll_bar => ScrollBar,
    semantic_zoom => SemanticZoom,
    separator => Separator,
    slider => Slider,
    spinner => Spinner,
    split_button => SplitButton,
    status_bar => StatusBar,
    tab => Tab,
    tab_item => TabItem,
    table => Table,
    text => Text,
    thumb => Thumb,
    title_bar => TitleBar,
    tool_bar => ToolBar,
    tool_tip => ToolTip,
    tree => Tree,
    tree_item => TreeItem,
    window => Window,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementBuilder;

    #[test]
    fn test_named_singletons() {
        let tree = ElementBuilder::new(ControlType::Button).build();
        let e = tree.root();

        assert!(button().matches(e));
        assert!(!check_box().matches(e));
        assert_eq!(button().description(), "Button");
    }

    #[test]
    fn test_bound_value_condition() {
        let tree = ElementBuilder::new(ControlType::TreeItem)
            .with_child(ElementBuilder::new(ControlType::TreeItem))
            .with_child(ElementBuilder::new(ControlType::Text))
            .build();
        let root = tree.root();

        // capture the control type of the element under test
        let same_type = is(root.control_type());
        let children: Vec<_> = root.children().collect();
        assert!(same_type.matches(children[0]));
        assert!(!same_type.matches(children[1]));
    }
}
