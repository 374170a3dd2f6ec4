use crate::{
    key::Key,
    state::{Effect, MenuButtonState, MenuEvent, Popup, SelectionTarget, Transition},
    surface::{MenuActions, UiSurface},
};

/// Whether the browser's default action for an event should still run.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DefaultAction {
    Prevent,
    Allow,
}

impl DefaultAction {
    pub fn is_prevented(self) -> bool {
        self == Self::Prevent
    }
}

/// A menu button bound to a [`UiSurface`].
///
/// Each handler advances the [`MenuButtonState`] and then applies the
/// resulting effects to the surface, so the menu's visibility and the
/// trigger's `aria-expanded` are always written together.
pub struct MenuButtonActions<S, A> {
    surface: S,
    actions: A,
    state: MenuButtonState,
}

impl<S, A> MenuButtonActions<S, A>
where
    S: UiSurface,
    A: MenuActions<S::Item>,
{
    /// Makes the first item the only focusable one and closes the menu.
    pub fn new(surface: S, actions: A, selection: SelectionTarget) -> Result<Self, S::Error> {
        let (state, initial) = MenuButtonState::new(surface.item_count(), selection);
        let menu_button = Self {
            surface,
            actions,
            state,
        };
        menu_button.apply(initial)?;

        Ok(menu_button)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn popup(&self) -> Popup {
        self.state.popup()
    }

    pub fn focus_index(&self) -> usize {
        self.state.focus().index()
    }

    pub fn open_popup(&mut self) -> Result<(), S::Error> {
        self.handle(MenuEvent::Open).map(|_| ())
    }

    /// Closes the menu without moving focus.
    pub fn close_popup(&mut self) -> Result<(), S::Error> {
        self.handle(MenuEvent::Close).map(|_| ())
    }

    pub fn on_button_keydown(&mut self, key: Key) -> Result<DefaultAction, S::Error> {
        self.handle(MenuEvent::ButtonKey(key))
    }

    /// `index` is the position of the item the event was dispatched to.
    pub fn on_menuitem_keydown(
        &mut self,
        key: Key,
        index: usize,
    ) -> Result<DefaultAction, S::Error> {
        self.handle(MenuEvent::ItemKey { key, index })
    }

    pub fn on_button_click(&mut self) -> Result<DefaultAction, S::Error> {
        self.handle(MenuEvent::ButtonClick)
    }

    /// `inside` is whether the event target is within the menu button's
    /// container.
    pub fn on_background_mousedown(&mut self, inside: bool) -> Result<DefaultAction, S::Error> {
        self.handle(MenuEvent::BackgroundMousedown { inside })
    }

    fn handle(&mut self, event: MenuEvent) -> Result<DefaultAction, S::Error> {
        let (state, transition) = self.state.transition(event);
        self.state = state;

        let default_action = if transition.prevent_default() {
            DefaultAction::Prevent
        } else {
            DefaultAction::Allow
        };

        self.apply(transition)?;
        Ok(default_action)
    }

    fn apply(&self, transition: Transition) -> Result<(), S::Error> {
        for effect in transition.into_effects() {
            match effect {
                Effect::Popup(popup) => {
                    let open = popup.is_open();
                    self.surface.set_menu_visible(open)?;
                    self.surface.set_expanded(open)?;
                }
                Effect::TabIndex { item, tab_index } => {
                    self.surface.set_item_tab_index(item, tab_index)?
                }
                Effect::FocusItem(item) => self.surface.focus_item(item)?,
                Effect::FocusTrigger => self.surface.focus_trigger()?,
                Effect::Select(item) => {
                    if let Some(item) = self.surface.item(item) {
                        self.actions.perform_menu_action(item);
                    }
                }
            }
        }

        Ok(())
    }
}
