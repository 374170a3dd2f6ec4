use std::{cell::RefCell, rc::Rc};

use crate::surface::MenuActions;

/// Holds the selected item until it's taken.
///
/// Use this when the real action must run after the controller is no longer
/// borrowed, for instance when the action might dispatch events back into the
/// same menu button.
#[derive(Debug)]
pub struct PendingSelection<Item>(Rc<RefCell<Option<Item>>>);

impl<Item> PendingSelection<Item> {
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }

    pub fn take(&self) -> Option<Item> {
        self.0.borrow_mut().take()
    }
}

impl<Item> Default for PendingSelection<Item> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Item> Clone for PendingSelection<Item> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Item: Clone> MenuActions<Item> for PendingSelection<Item> {
    fn perform_menu_action(&self, item: &Item) {
        *self.0.borrow_mut() = Some(item.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::PendingSelection;
    use crate::{
        controller::MenuButtonActions,
        fake::{FakeSurface, Focused},
        key::Key,
        state::{Popup, SelectionTarget},
    };

    const ITEMS: [&str; 2] = ["Open", "Close"];

    #[test]
    fn selection_waits_until_taken() {
        let pending = PendingSelection::<&'static str>::new();
        let mut menu_button = MenuButtonActions::new(
            FakeSurface::new(&ITEMS),
            pending.clone(),
            SelectionTarget::EventItem,
        )
        .unwrap();
        menu_button.open_popup().unwrap();

        assert_eq!(pending.take(), None);
        let _ = menu_button.on_menuitem_keydown(Key::Enter, 1).unwrap();

        assert_eq!(pending.take(), Some("Close"));
        assert_eq!(pending.take(), None);
        assert_eq!(menu_button.surface().focused(), Some(Focused::Trigger));
    }

    #[test]
    fn action_can_reenter_menu_button() {
        let pending = PendingSelection::<&'static str>::new();
        let menu_button = Rc::new(RefCell::new(
            MenuButtonActions::new(
                FakeSurface::new(&ITEMS),
                pending.clone(),
                SelectionTarget::EventItem,
            )
            .unwrap(),
        ));
        menu_button.borrow_mut().open_popup().unwrap();

        let _ = menu_button
            .borrow_mut()
            .on_menuitem_keydown(Key::Enter, 0)
            .unwrap();

        // The action clicks the trigger, which needs the controller again.
        if let Some(item) = pending.take() {
            assert_eq!(item, "Open");
            let _ = menu_button.borrow_mut().on_button_click().unwrap();
        }

        assert_eq!(menu_button.borrow().popup(), Popup::Open);
    }
}
