use std::{cell::RefCell, rc::Rc};

use actions_menu_controller::{
    DefaultAction, Key, MenuActions, MenuButtonActions, PendingSelection,
};
use gloo_console::error;
use silkenweb::clone;
use web_sys::{Element, Event, HtmlElement, KeyboardEvent, MouseEvent};

use crate::{
    config::PageConfig,
    error::{Error, Result},
    listener::{EventListener, EventType, Phase},
    surface::DomSurface,
};

type MenuButton = MenuButtonActions<DomSurface, PendingSelection<HtmlElement>>;

type Controller = Rc<RefCell<MenuButton>>;

/// A menu button with its event listeners registered.
///
/// The controller is owned by the listeners, so it lives until they are
/// released by [`AttachedMenuButton::detach`] or by dropping this.
///
/// The menu action runs once the controller has finished handling the key
/// event, so it may dispatch events back into this menu button. Events that
/// arrive while the controller is busy, such as a click dispatched from a
/// `focus` handler, are logged and dropped.
pub struct AttachedMenuButton {
    container: Element,
    listeners: Vec<EventListener>,
}

impl AttachedMenuButton {
    pub fn attach<A>(container: Element, config: &PageConfig, actions: A) -> Result<Self>
    where
        A: MenuActions<HtmlElement> + 'static,
    {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let surface = DomSurface::query(container.clone(), &config.selectors)?;
        let button = surface.button().clone();
        let items = surface.items().to_vec();
        let pending = PendingSelection::new();
        let controller: Controller = Rc::new(RefCell::new(MenuButtonActions::new(
            surface,
            pending.clone(),
            config.selection,
        )?));
        let actions = Rc::new(actions);
        let mut listeners = Vec::with_capacity(items.len() + 3);

        listeners.push(EventListener::new(
            &button,
            EventType::Click,
            Phase::Bubble,
            {
                clone!(controller);
                move |event: MouseEvent| {
                    dispatch(&controller, &event, |controller| controller.on_button_click())
                }
            },
        )?);

        listeners.push(EventListener::new(
            &button,
            EventType::Keydown,
            Phase::Bubble,
            {
                clone!(controller);
                move |event: KeyboardEvent| {
                    let key = Key::from_key(&event.key());
                    dispatch(&controller, &event, |controller| {
                        controller.on_button_keydown(key)
                    })
                }
            },
        )?);

        for (index, item) in items.iter().enumerate() {
            listeners.push(EventListener::new(
                item,
                EventType::Keydown,
                Phase::Bubble,
                {
                    clone!(controller, pending, actions);
                    move |event: KeyboardEvent| {
                        let key = Key::from_key(&event.key());
                        dispatch(&controller, &event, |controller| {
                            controller.on_menuitem_keydown(key, index)
                        });

                        if let Some(item) = pending.take() {
                            actions.perform_menu_action(&item);
                        }
                    }
                },
            )?);
        }

        // Capture phase, so handlers that stop propagation can't hide the click.
        listeners.push(EventListener::new(
            &window,
            EventType::Mousedown,
            Phase::Capture,
            move |event: MouseEvent| {
                dispatch(&controller, &event, |controller| {
                    let inside = controller.surface().contains(event.target().as_ref());
                    controller.on_background_mousedown(inside)
                })
            },
        )?);

        Ok(Self {
            container,
            listeners,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    /// Remove every listener this menu button registered.
    pub fn detach(self) {
        for listener in self.listeners {
            listener.release();
        }
    }
}

fn dispatch(
    controller: &Controller,
    event: &Event,
    handle: impl FnOnce(&mut MenuButton) -> Result<DefaultAction>,
) {
    match controller.try_borrow_mut() {
        Ok(mut controller) => respond(event, handle(&mut *controller)),
        Err(_) => error!(format!(
            "Menu button is busy, ignoring `{}` event",
            event.type_()
        )),
    }
}

fn respond(event: &Event, response: Result<DefaultAction>) {
    match response {
        Ok(DefaultAction::Prevent) => event.prevent_default(),
        Ok(DefaultAction::Allow) => (),
        Err(e) => error!(format!("Menu button `{}` event: {e}", event.type_())),
    }
}
