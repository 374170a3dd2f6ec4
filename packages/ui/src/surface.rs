use actions_menu_controller::{TabIndex, UiSurface};
use wasm_bindgen::JsCast;
use web_sys::{Element, EventTarget, HtmlElement, Node};

use crate::{
    config::Selectors,
    error::{Error, Result},
};

/// A menu button's elements, captured once when it is attached.
pub struct DomSurface {
    container: Element,
    button: HtmlElement,
    menu: HtmlElement,
    items: Vec<HtmlElement>,
}

impl DomSurface {
    pub fn query(container: Element, selectors: &Selectors) -> Result<Self> {
        let button = query_one(&container, &selectors.button)?;
        let menu = query_one(&container, &selectors.menu)?;
        let items = query_all(&container, &selectors.item)?;

        Ok(Self {
            container,
            button,
            menu,
            items,
        })
    }

    pub fn container(&self) -> &Element {
        &self.container
    }

    pub fn button(&self) -> &HtmlElement {
        &self.button
    }

    pub fn items(&self) -> &[HtmlElement] {
        &self.items
    }

    pub fn contains(&self, target: Option<&EventTarget>) -> bool {
        target
            .and_then(|target| target.dyn_ref::<Node>())
            .is_some_and(|node| self.container.contains(Some(node)))
    }
}

impl UiSurface for DomSurface {
    type Error = Error;
    type Item = HtmlElement;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&Self::Item> {
        self.items.get(index)
    }

    fn set_menu_visible(&self, visible: bool) -> Result<()> {
        let display = if visible { "block" } else { "none" };

        self.menu
            .style()
            .set_property("display", display)
            .map_err(|e| Error::dom("Setting menu display", e))
    }

    fn set_expanded(&self, expanded: bool) -> Result<()> {
        self.button
            .set_attribute("aria-expanded", if expanded { "true" } else { "false" })
            .map_err(|e| Error::dom("Setting `aria-expanded`", e))
    }

    fn set_item_tab_index(&self, index: usize, tab_index: TabIndex) -> Result<()> {
        if let Some(item) = self.items.get(index) {
            item.set_tab_index(tab_index.value());
        }

        Ok(())
    }

    fn focus_item(&self, index: usize) -> Result<()> {
        match self.items.get(index) {
            Some(item) => item.focus().map_err(|e| Error::dom("Focusing menu item", e)),
            None => Ok(()),
        }
    }

    fn focus_trigger(&self) -> Result<()> {
        self.button
            .focus()
            .map_err(|e| Error::dom("Focusing menu button", e))
    }
}

fn query_one(container: &Element, selector: &str) -> Result<HtmlElement> {
    container
        .query_selector(selector)
        .map_err(|e| Error::invalid_selector(selector, e))?
        .ok_or_else(|| Error::MissingElement {
            selector: selector.to_owned(),
        })?
        .dyn_into()
        .map_err(|_| Error::NotHtmlElement {
            selector: selector.to_owned(),
        })
}

fn query_all(container: &Element, selector: &str) -> Result<Vec<HtmlElement>> {
    let nodes = container
        .query_selector_all(selector)
        .map_err(|e| Error::invalid_selector(selector, e))?;

    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .map(|node| {
            node.dyn_into().map_err(|_| Error::NotHtmlElement {
                selector: selector.to_owned(),
            })
        })
        .collect()
}
