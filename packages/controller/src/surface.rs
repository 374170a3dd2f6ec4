use crate::state::TabIndex;

/// The parts of the page a menu button reads and writes.
///
/// Items are addressed by their position in the order they were captured.
pub trait UiSurface {
    type Item;
    type Error;

    fn item_count(&self) -> usize;

    fn item(&self, index: usize) -> Option<&Self::Item>;

    fn set_menu_visible(&self, visible: bool) -> Result<(), Self::Error>;

    /// Set the trigger's `aria-expanded` attribute.
    fn set_expanded(&self, expanded: bool) -> Result<(), Self::Error>;

    fn set_item_tab_index(&self, index: usize, tab_index: TabIndex) -> Result<(), Self::Error>;

    fn focus_item(&self, index: usize) -> Result<(), Self::Error>;

    fn focus_trigger(&self) -> Result<(), Self::Error>;
}

/// What to do when the user commits to a menu item.
pub trait MenuActions<Item> {
    fn perform_menu_action(&self, item: &Item);
}

impl<Item, F: Fn(&Item)> MenuActions<Item> for F {
    fn perform_menu_action(&self, item: &Item) {
        self(item)
    }
}
