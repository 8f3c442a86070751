//! Element model for UI Automation trees
//!
//! Elements are stored in an arena owned by [`ElementTree`]; parent links are
//! back-indices into the arena, so the tree has single ownership and no
//! reference cycles. [`Element`] is a cheap `Copy` handle combining the tree
//! reference with an id, and exposes read-only accessors for every property
//! the rule engine consumes.
//!
//! The engine never mutates elements; a tree is built once per scan via
//! [`ElementBuilder`] and read concurrently after that.

use std::collections::HashMap;
use std::fmt;

/// UI Automation control type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ControlType {
    Button = 50000,
    Calendar = 50001,
    CheckBox = 50002,
    ComboBox = 50003,
    Edit = 50004,
    Hyperlink = 50005,
    Image = 50006,
    ListItem = 50007,
    List = 50008,
    Menu = 50009,
    MenuBar = 50010,
    MenuItem = 50011,
    ProgressBar = 50012,
    RadioButton = 50013,
    ScrollBar = 50014,
    Slider = 50015,
    Spinner = 50016,
    StatusBar = 50017,
    Tab = 50018,
    TabItem = 50019,
    Text = 50020,
    ToolBar = 50021,
    ToolTip = 50022,
    Tree = 50023,
    TreeItem = 50024,
    Custom = 50025,
    Group = 50026,
    Thumb = 50027,
    DataGrid = 50028,
    DataItem = 50029,
    Document = 50030,
    SplitButton = 50031,
    Window = 50032,
    Pane = 50033,
    Header = 50034,
    HeaderItem = 50035,
    Table = 50036,
    TitleBar = 50037,
    Separator = 50038,
    SemanticZoom = 50039,
    AppBar = 50040,
}

impl ControlType {
    /// The numeric UI Automation property value.
    pub fn id(self) -> i32 {
        self as i32
    }

    /// The English control type string, as reported by UI Automation.
    pub fn display_name(self) -> &'static str {
        match self {
            ControlType::Button => "button",
            ControlType::Calendar => "calendar",
            ControlType::CheckBox => "check box",
            ControlType::ComboBox => "combo box",
            ControlType::Edit => "edit",
            ControlType::Hyperlink => "link",
            ControlType::Image => "image",
            ControlType::ListItem => "list item",
            ControlType::List => "list",
            ControlType::Menu => "menu",
            ControlType::MenuBar => "menu bar",
            ControlType::MenuItem => "menu item",
            ControlType::ProgressBar => "progress bar",
            ControlType::RadioButton => "radio button",
            ControlType::ScrollBar => "scroll bar",
            ControlType::Slider => "slider",
            ControlType::Spinner => "spinner",
            ControlType::StatusBar => "status bar",
            ControlType::Tab => "tab",
            ControlType::TabItem => "tab item",
            ControlType::Text => "text",
            ControlType::ToolBar => "tool bar",
            ControlType::ToolTip => "tool tip",
            ControlType::Tree => "tree",
            ControlType::TreeItem => "tree item",
            ControlType::Custom => "custom",
            ControlType::Group => "group",
            ControlType::Thumb => "thumb",
            ControlType::DataGrid => "data grid",
            ControlType::DataItem => "data item",
            ControlType::Document => "document",
            ControlType::SplitButton => "split button",
            ControlType::Window => "window",
            ControlType::Pane => "pane",
            ControlType::Header => "header",
            ControlType::HeaderItem => "header item",
            ControlType::Table => "table",
            ControlType::TitleBar => "title bar",
            ControlType::Separator => "separator",
            ControlType::SemanticZoom => "semantic zoom",
            ControlType::AppBar => "app bar",
        }
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// UI Automation landmark type ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum LandmarkType {
    Custom = 80000,
    Form = 80001,
    Main = 80002,
    Navigation = 80003,
    Search = 80004,
}

/// UI Automation pattern ids for the interaction patterns an element supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum PatternId {
    Invoke = 10000,
    Selection = 10001,
    Value = 10002,
    RangeValue = 10003,
    Scroll = 10004,
    ExpandCollapse = 10005,
    Grid = 10006,
    GridItem = 10007,
    Window = 10009,
    SelectionItem = 10010,
    Table = 10012,
    TableItem = 10013,
    Text = 10014,
    Toggle = 10015,
    Transform = 10016,
    ScrollItem = 10017,
    Spreadsheet = 10026,
    SpreadsheetItem = 10027,
}

impl fmt::Display for PatternId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// UI Automation property ids, used for rule metadata and the generic
/// property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(i32)]
pub enum PropertyId {
    RuntimeId = 30000,
    BoundingRectangle = 30001,
    ControlType = 30003,
    LocalizedControlType = 30004,
    Name = 30005,
    IsKeyboardFocusable = 30009,
    IsEnabled = 30010,
    AutomationId = 30011,
    ClassName = 30012,
    HelpText = 30013,
    IsControlElement = 30016,
    IsContentElement = 30017,
    IsOffscreen = 30022,
    Orientation = 30023,
    FrameworkId = 30024,
    ItemStatus = 30026,
    PositionInSet = 30152,
    SizeOfSet = 30153,
    LandmarkType = 30157,
    LocalizedLandmarkType = 30158,
    HeadingLevel = 30173,
    IsDialog = 30174,
}

/// A typed value in the generic property bag or a pattern sub-value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Double(f64),
    String(String),
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Int(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Double(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

/// An interaction pattern supported by an element, optionally carrying named
/// sub-values (e.g. `Minimum`/`Maximum`/`IsReadOnly` on RangeValue).
#[derive(Debug, Clone, PartialEq)]
pub struct Pattern {
    id: PatternId,
    values: Vec<(String, PropertyValue)>,
}

impl Pattern {
    pub fn new(id: PatternId) -> Self {
        Self {
            id,
            values: Vec::new(),
        }
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.values.push((name.into(), value.into()));
        self
    }

    pub fn id(&self) -> PatternId {
        self.id
    }

    fn value(&self, name: &str) -> Option<&PropertyValue> {
        self.values.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn get_bool(&self, name: &str) -> Option<bool> {
        match self.value(name) {
            Some(PropertyValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn get_int(&self, name: &str) -> Option<i32> {
        match self.value(name) {
            Some(PropertyValue::Int(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn get_double(&self, name: &str) -> Option<f64> {
        match self.value(name) {
            Some(PropertyValue::Double(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn get_string(&self, name: &str) -> Option<&str> {
        match self.value(name) {
            Some(PropertyValue::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// A screen rectangle in physical pixels.
///
/// The bounding rectangle of an element has three distinct states that
/// consumers must keep apart: absent (`None` on the element accessor),
/// present but empty (zero width or height), and present and valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Present-but-empty state: the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }
}

/// Identifies an element within its [`ElementTree`] for the duration of one
/// scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ElementId(u32);

impl ElementId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct NodeData {
    control_type: ControlType,
    name: Option<String>,
    help_text: Option<String>,
    localized_control_type: Option<String>,
    localized_landmark_type: Option<String>,
    class_name: Option<String>,
    automation_id: Option<String>,
    framework: Option<String>,
    item_status: Option<String>,
    landmark_type: Option<LandmarkType>,
    heading_level: Option<i32>,
    position_in_set: Option<i32>,
    size_of_set: Option<i32>,
    orientation: Option<i32>,
    is_off_screen: bool,
    is_enabled: bool,
    is_keyboard_focusable: bool,
    is_content_element: bool,
    is_control_element: bool,
    bounding_rectangle: Option<Rect>,
    patterns: Vec<Pattern>,
    properties: HashMap<PropertyId, PropertyValue>,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
}

/// An immutable tree of UI elements captured for one scan.
#[derive(Debug, Clone)]
pub struct ElementTree {
    nodes: Vec<NodeData>,
}

impl ElementTree {
    /// The root element of the tree.
    pub fn root(&self) -> Element<'_> {
        Element {
            tree: self,
            id: ElementId(0),
        }
    }

    pub fn get(&self, id: ElementId) -> Option<Element<'_>> {
        if id.index() < self.nodes.len() {
            Some(Element { tree: self, id })
        } else {
            None
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All elements in depth-first order, root first.
    pub fn iter(&self) -> impl Iterator<Item = Element<'_>> {
        (0..self.nodes.len() as u32).map(move |i| Element {
            tree: self,
            id: ElementId(i),
        })
    }
}

/// A read-only handle to one element of an [`ElementTree`].
#[derive(Clone, Copy)]
pub struct Element<'t> {
    tree: &'t ElementTree,
    id: ElementId,
}

impl<'t> Element<'t> {
    fn data(&self) -> &'t NodeData {
        &self.tree.nodes[self.id.index()]
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    pub fn control_type(&self) -> ControlType {
        self.data().control_type
    }

    pub fn name(&self) -> Option<&'t str> {
        self.data().name.as_deref()
    }

    pub fn help_text(&self) -> Option<&'t str> {
        self.data().help_text.as_deref()
    }

    pub fn localized_control_type(&self) -> Option<&'t str> {
        self.data().localized_control_type.as_deref()
    }

    pub fn localized_landmark_type(&self) -> Option<&'t str> {
        self.data().localized_landmark_type.as_deref()
    }

    pub fn class_name(&self) -> Option<&'t str> {
        self.data().class_name.as_deref()
    }

    pub fn automation_id(&self) -> Option<&'t str> {
        self.data().automation_id.as_deref()
    }

    pub fn framework(&self) -> Option<&'t str> {
        self.data().framework.as_deref()
    }

    pub fn item_status(&self) -> Option<&'t str> {
        self.data().item_status.as_deref()
    }

    pub fn landmark_type(&self) -> Option<LandmarkType> {
        self.data().landmark_type
    }

    pub fn heading_level(&self) -> Option<i32> {
        self.data().heading_level
    }

    pub fn position_in_set(&self) -> Option<i32> {
        self.data().position_in_set
    }

    pub fn size_of_set(&self) -> Option<i32> {
        self.data().size_of_set
    }

    pub fn orientation(&self) -> Option<i32> {
        self.data().orientation
    }

    pub fn is_off_screen(&self) -> bool {
        self.data().is_off_screen
    }

    pub fn is_enabled(&self) -> bool {
        self.data().is_enabled
    }

    pub fn is_keyboard_focusable(&self) -> bool {
        self.data().is_keyboard_focusable
    }

    pub fn is_content_element(&self) -> bool {
        self.data().is_content_element
    }

    pub fn is_control_element(&self) -> bool {
        self.data().is_control_element
    }

    pub fn bounding_rectangle(&self) -> Option<Rect> {
        self.data().bounding_rectangle
    }

    /// The pattern with the given id, if the element supports it.
    pub fn pattern(&self, id: PatternId) -> Option<&'t Pattern> {
        self.data().patterns.iter().find(|p| p.id == id)
    }

    pub fn supports_pattern(&self, id: PatternId) -> bool {
        self.pattern(id).is_some()
    }

    /// A value from the generic property bag.
    pub fn property(&self, id: PropertyId) -> Option<&'t PropertyValue> {
        self.data().properties.get(&id)
    }

    pub fn parent(&self) -> Option<Element<'t>> {
        self.data().parent.map(|id| Element {
            tree: self.tree,
            id,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = Element<'t>> + 't {
        let tree = self.tree;
        self.data()
            .children
            .iter()
            .map(move |&id| Element { tree, id })
    }
}

impl PartialEq for Element<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.tree, other.tree) && self.id == other.id
    }
}

impl Eq for Element<'_> {}

impl fmt::Debug for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Element({}, {:?})", self.id, self.control_type())
    }
}

/// Builds an [`ElementTree`] node by node.
///
/// Defaults: enabled, on screen, not focusable, neither content nor control
/// element, no bounding rectangle, no string properties.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    data: NodeData,
    children: Vec<ElementBuilder>,
}

impl ElementBuilder {
    pub fn new(control_type: ControlType) -> Self {
        Self {
            data: NodeData {
                control_type,
                name: None,
                help_text: None,
                localized_control_type: None,
                localized_landmark_type: None,
                class_name: None,
                automation_id: None,
                framework: None,
                item_status: None,
                landmark_type: None,
                heading_level: None,
                position_in_set: None,
                size_of_set: None,
                orientation: None,
                is_off_screen: false,
                is_enabled: true,
                is_keyboard_focusable: false,
                is_content_element: false,
                is_control_element: false,
                bounding_rectangle: None,
                patterns: Vec::new(),
                properties: HashMap::new(),
                parent: None,
                children: Vec::new(),
            },
            children: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.data.name = Some(name.into());
        self
    }

    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.data.help_text = Some(help_text.into());
        self
    }

    pub fn with_localized_control_type(mut self, value: impl Into<String>) -> Self {
        self.data.localized_control_type = Some(value.into());
        self
    }

    pub fn with_localized_landmark_type(mut self, value: impl Into<String>) -> Self {
        self.data.localized_landmark_type = Some(value.into());
        self
    }

    pub fn with_landmark_type(mut self, value: LandmarkType) -> Self {
        self.data.landmark_type = Some(value);
        self
    }

    pub fn with_class_name(mut self, value: impl Into<String>) -> Self {
        self.data.class_name = Some(value.into());
        self
    }

    pub fn with_automation_id(mut self, value: impl Into<String>) -> Self {
        self.data.automation_id = Some(value.into());
        self
    }

    pub fn with_framework(mut self, value: impl Into<String>) -> Self {
        self.data.framework = Some(value.into());
        self
    }

    pub fn with_item_status(mut self, value: impl Into<String>) -> Self {
        self.data.item_status = Some(value.into());
        self
    }

    pub fn with_heading_level(mut self, value: i32) -> Self {
        self.data.heading_level = Some(value);
        self
    }

    pub fn with_position_in_set(mut self, value: i32) -> Self {
        self.data.position_in_set = Some(value);
        self
    }

    pub fn with_size_of_set(mut self, value: i32) -> Self {
        self.data.size_of_set = Some(value);
        self
    }

    pub fn with_orientation(mut self, value: i32) -> Self {
        self.data.orientation = Some(value);
        self
    }

    pub fn off_screen(mut self, value: bool) -> Self {
        self.data.is_off_screen = value;
        self
    }

    pub fn enabled(mut self, value: bool) -> Self {
        self.data.is_enabled = value;
        self
    }

    pub fn keyboard_focusable(mut self, value: bool) -> Self {
        self.data.is_keyboard_focusable = value;
        self
    }

    pub fn content_element(mut self, value: bool) -> Self {
        self.data.is_content_element = value;
        self
    }

    pub fn control_element(mut self, value: bool) -> Self {
        self.data.is_control_element = value;
        self
    }

    pub fn with_bounding_rectangle(mut self, rect: Rect) -> Self {
        self.data.bounding_rectangle = Some(rect);
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.data.patterns.push(pattern);
        self
    }

    pub fn with_property(mut self, id: PropertyId, value: impl Into<PropertyValue>) -> Self {
        self.data.properties.insert(id, value.into());
        self
    }

    pub fn with_child(mut self, child: ElementBuilder) -> Self {
        self.children.push(child);
        self
    }

    /// Flattens the builder into an arena-backed tree, this node as root.
    pub fn build(self) -> ElementTree {
        let mut nodes = Vec::new();
        flatten(self, None, &mut nodes);
        ElementTree { nodes }
    }
}

fn flatten(builder: ElementBuilder, parent: Option<ElementId>, nodes: &mut Vec<NodeData>) {
    let id = ElementId(nodes.len() as u32);
    let mut data = builder.data;
    data.parent = parent;
    nodes.push(data);

    let mut child_ids = Vec::with_capacity(builder.children.len());
    for child in builder.children {
        child_ids.push(ElementId(nodes.len() as u32));
        flatten(child, Some(id), nodes);
    }
    nodes[id.index()].children = child_ids;
}
