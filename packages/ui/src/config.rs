use actions_menu_controller::SelectionTarget;

/// Class that marks a menu button container on the page.
pub const MARKER_CLASS: &str = "menu-button-actions";

pub const OUTPUT_ID: &str = "action_output";

/// How the parts of a menu button are found inside its container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selectors {
    pub button: String,
    pub menu: String,
    pub item: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            button: "button".to_owned(),
            menu: r#"[role="menu"]"#.to_owned(),
            item: r#"[role="menuitem"]"#.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageConfig {
    pub marker_selector: String,
    pub output_id: String,
    pub selectors: Selectors,
    pub selection: SelectionTarget,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            marker_selector: format!(".{MARKER_CLASS}"),
            output_id: OUTPUT_ID.to_owned(),
            selectors: Selectors::default(),
            selection: SelectionTarget::default(),
        }
    }
}

impl PageConfig {
    pub fn with_marker_selector(mut self, marker_selector: impl Into<String>) -> Self {
        self.marker_selector = marker_selector.into();
        self
    }

    pub fn with_output_id(mut self, output_id: impl Into<String>) -> Self {
        self.output_id = output_id.into();
        self
    }

    pub fn with_selectors(mut self, selectors: Selectors) -> Self {
        self.selectors = selectors;
        self
    }

    pub fn with_selection(mut self, selection: SelectionTarget) -> Self {
        self.selection = selection;
        self
    }
}
