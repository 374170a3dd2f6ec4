use std::cell::RefCell;

use actions_menu_controller::MenuActions;
use gloo_console::{error, log};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Document, Element, HtmlElement};

use crate::{
    config::PageConfig,
    error::{Error, Result},
    menu_button::AttachedMenuButton,
};

thread_local! {
    static ATTACHED: RefCell<Vec<AttachedMenuButton>> = const { RefCell::new(Vec::new()) };
}

/// Attach a menu button to every container matching the marker selector.
///
/// A container that can't be attached is logged and skipped.
pub fn attach_all<A>(
    document: &Document,
    config: &PageConfig,
    actions: A,
) -> Result<Vec<AttachedMenuButton>>
where
    A: MenuActions<HtmlElement> + Clone + 'static,
{
    let containers = document
        .query_selector_all(&config.marker_selector)
        .map_err(|e| Error::invalid_selector(&config.marker_selector, e))?;
    let mut attached = Vec::new();

    for index in 0..containers.length() {
        let Some(container) = containers
            .item(index)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };

        match AttachedMenuButton::attach(container, config, actions.clone()) {
            Ok(menu_button) => attached.push(menu_button),
            Err(e) => error!(format!("Skipping menu button {index}: {e}")),
        }
    }

    log!(format!("Attached {} menu button(s)", attached.len()));
    Ok(attached)
}

/// Attach menu buttons once the page has loaded, keeping them for the life of
/// the page.
pub fn on_page_load<A>(config: PageConfig, actions: A) -> Result<()>
where
    A: MenuActions<HtmlElement> + Clone + 'static,
{
    let window = web_sys::window().ok_or(Error::NoWindow)?;
    let document = window.document().ok_or(Error::NoDocument)?;

    if document.ready_state() == "complete" {
        return keep_attached(&document, &config, actions);
    }

    let on_load = Closure::once_into_js(move || {
        log!("Page loaded");

        if let Err(e) = keep_attached(&document, &config, actions) {
            error!(format!("Couldn't attach menu buttons: {e}"));
        }
    });

    window
        .add_event_listener_with_callback("load", on_load.unchecked_ref())
        .map_err(|e| Error::dom("Adding load listener", e))
}

/// Release every menu button attached by [`on_page_load`].
pub fn detach_all() {
    for menu_button in ATTACHED.with(RefCell::take) {
        menu_button.detach();
    }
}

fn keep_attached<A>(document: &Document, config: &PageConfig, actions: A) -> Result<()>
where
    A: MenuActions<HtmlElement> + Clone + 'static,
{
    let attached = attach_all(document, config, actions)?;
    ATTACHED.with(|menu_buttons| menu_buttons.borrow_mut().extend(attached));
    Ok(())
}
