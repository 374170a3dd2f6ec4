use std::{cell::RefCell, convert::Infallible};

use crate::{state::TabIndex, surface::UiSurface};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Focused {
    Trigger,
    Item(usize),
}

/// A surface that records what a real page would show.
pub struct FakeSurface {
    items: Vec<&'static str>,
    page: RefCell<Page>,
}

#[derive(Clone, Debug, Default)]
struct Page {
    menu_visible: Option<bool>,
    expanded: Option<bool>,
    tab_indexes: Vec<Option<i32>>,
    focused: Option<Focused>,
    focus_changes: usize,
}

impl FakeSurface {
    pub fn new(items: &[&'static str]) -> Self {
        Self {
            items: items.to_vec(),
            page: RefCell::new(Page {
                tab_indexes: vec![None; items.len()],
                ..Page::default()
            }),
        }
    }

    pub fn menu_visible(&self) -> Option<bool> {
        self.page.borrow().menu_visible
    }

    pub fn expanded(&self) -> Option<bool> {
        self.page.borrow().expanded
    }

    pub fn tab_indexes(&self) -> Vec<Option<i32>> {
        self.page.borrow().tab_indexes.clone()
    }

    pub fn focused(&self) -> Option<Focused> {
        self.page.borrow().focused
    }

    pub fn focus_changes(&self) -> usize {
        self.page.borrow().focus_changes
    }

    fn focus(&self, focused: Focused) {
        let mut page = self.page.borrow_mut();
        page.focused = Some(focused);
        page.focus_changes += 1;
    }
}

impl UiSurface for FakeSurface {
    type Error = Infallible;
    type Item = &'static str;

    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn item(&self, index: usize) -> Option<&Self::Item> {
        self.items.get(index)
    }

    fn set_menu_visible(&self, visible: bool) -> Result<(), Self::Error> {
        self.page.borrow_mut().menu_visible = Some(visible);
        Ok(())
    }

    fn set_expanded(&self, expanded: bool) -> Result<(), Self::Error> {
        self.page.borrow_mut().expanded = Some(expanded);
        Ok(())
    }

    fn set_item_tab_index(&self, index: usize, tab_index: TabIndex) -> Result<(), Self::Error> {
        self.page.borrow_mut().tab_indexes[index] = Some(tab_index.value());
        Ok(())
    }

    fn focus_item(&self, index: usize) -> Result<(), Self::Error> {
        self.focus(Focused::Item(index));
        Ok(())
    }

    fn focus_trigger(&self) -> Result<(), Self::Error> {
        self.focus(Focused::Trigger);
        Ok(())
    }
}
